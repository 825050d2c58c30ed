mod common;

use common::*;
use us2cs::ast::{
    BinaryOperator, EnumDefinition, EnumMember, Modifiers, Statement, TypeDefinition,
};
use us2cs::{CSharpCodeGenConfig, CSharpCodeGenerator, ConversionSession};

#[test]
fn converts_class_with_base_field_and_method() {
    let add = member_method(
        "Add",
        vec![param("a", int_type()), param("b", int_type())],
        Some(int_type()),
        vec![Statement::Return {
            value: Some(binary(
                BinaryOperator::Addition,
                reference("a"),
                reference("b"),
            )),
            span: span(),
        }],
    );
    let unit = unit(vec![class(
        "Foo",
        vec![simple_type("Bar")],
        vec![field("x", int_type()), add],
    )]);

    let converted = ConversionSession::new().convert_unit(&unit);
    assert_eq!(
        converted.source,
        "public class Foo : Bar\n\
         {\n\
         \x20   public int x;\n\
         \x20   public int Add(int a, int b)\n\
         \x20   {\n\
         \x20       return a + b;\n\
         \x20   }\n\
         \n\
         }\n"
    );
    assert!(converted.diagnostics.is_empty());
}

#[test]
fn multiple_base_types_are_comma_separated() {
    let unit = unit(vec![class(
        "Foo",
        vec![simple_type("Bar"), simple_type("IComparable")],
        Vec::new(),
    )]);
    let converted = ConversionSession::new().convert_unit(&unit);
    assert_eq!(converted.source, "public class Foo : Bar, IComparable\n{\n\n}\n");
}

#[test]
fn class_without_bases_omits_the_separator() {
    let unit = unit(vec![class("Foo", Vec::new(), Vec::new())]);
    let converted = ConversionSession::new().convert_unit(&unit);
    assert_eq!(converted.source, "public class Foo\n{\n\n}\n");
    assert!(!converted.source.contains(" : "));
}

#[test]
fn enum_members_separated_by_commas_except_the_last() {
    let unit = unit(vec![TypeDefinition::Enum(EnumDefinition {
        modifiers: Modifiers::default(),
        name: "Color".to_string(),
        members: vec![
            EnumMember {
                name: "Red".to_string(),
                initializer: None,
                span: span(),
            },
            EnumMember {
                name: "Green".to_string(),
                initializer: Some(int_lit(5)),
                span: span(),
            },
            EnumMember {
                name: "Blue".to_string(),
                initializer: None,
                span: span(),
            },
        ],
        span: span(),
    })]);

    let converted = ConversionSession::new().convert_unit(&unit);
    assert_eq!(
        converted.source,
        "public enum Color\n{\n    Red,\n    Green = 5,\n    Blue\n}\n"
    );
}

#[test]
fn entry_point_method_is_suppressed() {
    let unit = unit(vec![class(
        "App",
        Vec::new(),
        vec![member_method("Main", Vec::new(), None, Vec::new())],
    )]);
    let converted = ConversionSession::new().convert_unit(&unit);
    assert_eq!(converted.source, "public class App\n{\n\n}\n");
}

#[test]
fn entry_point_name_follows_configuration() {
    let members = vec![
        member_method("Boot", Vec::new(), None, Vec::new()),
        member_method("Main", Vec::new(), None, Vec::new()),
    ];
    let unit = unit(vec![class("App", Vec::new(), members)]);

    let config = CSharpCodeGenConfig {
        entry_point: "Boot".to_string(),
        ..CSharpCodeGenConfig::default()
    };
    let converted = ConversionSession::with_config(config).convert_unit(&unit);
    assert!(!converted.source.contains("Boot"));
    assert!(converted.source.contains("public void Main()"));
}

#[test]
fn imports_become_using_directives_without_duplicates() {
    let unit = unit_with_imports(
        &["UnityEngine", "System", "UnityEngine"],
        vec![class("Foo", Vec::new(), Vec::new())],
    );
    let converted = ConversionSession::new().convert_unit(&unit);
    assert!(converted
        .source
        .starts_with("using UnityEngine;\nusing System;\n\npublic class Foo"));
}

#[test]
fn unit_without_imports_has_no_header() {
    let unit = unit(vec![class("Foo", Vec::new(), Vec::new())]);
    let converted = ConversionSession::new().convert_unit(&unit);
    assert!(converted.source.starts_with("public class Foo"));
}

#[test]
fn imported_type_references_drop_their_qualification() {
    let unit = unit_with_imports(
        &["UnityEngine"],
        vec![class(
            "Player",
            Vec::new(),
            vec![field(
                "body",
                resolved_type("UnityEngine.Rigidbody", "UnityEngine.Rigidbody"),
            )],
        )],
    );
    let converted = ConversionSession::new().convert_unit(&unit);
    assert!(converted.source.contains("public Rigidbody body;"));
}

#[test]
fn sibling_types_are_separated_by_a_blank_line() {
    let unit = unit(vec![
        class("A", Vec::new(), Vec::new()),
        class("B", Vec::new(), Vec::new()),
    ]);
    let converted = ConversionSession::new().convert_unit(&unit);
    assert_eq!(
        converted.source,
        "public class A\n{\n\n}\n\npublic class B\n{\n\n}\n"
    );
}

#[test]
fn generator_can_be_reused_across_units() {
    let first = unit(vec![class("A", Vec::new(), Vec::new())]);
    let second = unit(vec![class("B", Vec::new(), Vec::new())]);

    let mut generator = CSharpCodeGenerator::new();
    let a = generator.generate_unit(&first);
    let b = generator.generate_unit(&second);
    assert_eq!(a, "public class A\n{\n\n}\n");
    assert_eq!(b, "public class B\n{\n\n}\n");
    assert!(generator.diagnostics().is_empty());
}

#[test]
fn dangling_array_instantiation_still_converts_the_unit() {
    let initializer = generic_ref(reference("array"), vec![int_type()]);
    let member = us2cs::ast::Member::Field(us2cs::ast::Field {
        modifiers: Modifiers::default(),
        ty: int_type(),
        name: "xs".to_string(),
        initializer: Some(initializer),
        span: span(),
    });
    let unit = unit(vec![class("Foo", Vec::new(), vec![member])]);

    let converted = ConversionSession::new().convert_unit(&unit);
    assert!(converted.source.contains("public int xs = new int;"));
    assert!(converted.diagnostics.is_empty());
}

#[test]
fn conversion_is_deterministic() {
    let unit = unit_with_imports(
        &["UnityEngine"],
        vec![class("Foo", vec![simple_type("Bar")], vec![field("x", int_type())])],
    );
    let session = ConversionSession::new();
    assert_eq!(session.convert_unit(&unit), session.convert_unit(&unit));
}

#[test]
fn completion_handler_receives_path_and_source() {
    let unit = unit(vec![class("Foo", Vec::new(), Vec::new())]);
    let session = ConversionSession::new();

    let mut seen = None;
    let diagnostics = session.convert(&unit, |path, source| {
        seen = Some((path.to_string(), source.to_string()));
    });

    let (path, source) = seen.unwrap();
    assert_eq!(path, "Script.js");
    assert_eq!(source, "public class Foo\n{\n\n}\n");
    assert!(diagnostics.is_empty());
}

#[test]
fn batch_conversion_preserves_input_order() {
    let units = vec![
        unit(vec![class("A", Vec::new(), Vec::new())]),
        unit(vec![class("B", Vec::new(), Vec::new())]),
        unit(vec![class("C", Vec::new(), Vec::new())]),
    ];
    let session = ConversionSession::new();

    let converted = session.convert_batch(&units);
    assert_eq!(converted.len(), 3);
    for (converted, unit) in converted.iter().zip(&units) {
        assert_eq!(*converted, session.convert_unit(unit));
    }
    assert!(converted[0].source.contains("class A"));
    assert!(converted[2].source.contains("class C"));
}
