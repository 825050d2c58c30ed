#![allow(dead_code)]

use us2cs::ast::{
    BinaryOperator, Block, ClassDefinition, Declaration, DeclarationStatement, Expression, Field,
    Import, Literal, Member, Method, Modifiers, Parameter, ResolvedEntity, Span, Statement,
    TypeDefinition, TypeEntity, TypeReference, UnaryOperator, Unit,
};

pub fn span() -> Span {
    Span::dummy()
}

pub fn unit(types: Vec<TypeDefinition>) -> Unit {
    unit_with_imports(&[], types)
}

pub fn unit_with_imports(namespaces: &[&str], types: Vec<TypeDefinition>) -> Unit {
    Unit {
        path: "Script.js".to_string(),
        namespace: None,
        imports: namespaces
            .iter()
            .map(|namespace| Import {
                namespace: namespace.to_string(),
                span: span(),
            })
            .collect(),
        types,
        span: span(),
    }
}

pub fn class(name: &str, base_types: Vec<TypeReference>, members: Vec<Member>) -> TypeDefinition {
    TypeDefinition::Class(ClassDefinition {
        modifiers: Modifiers::default(),
        name: name.to_string(),
        generic_parameters: Vec::new(),
        base_types,
        members,
        span: span(),
    })
}

pub fn simple_type(name: &str) -> TypeReference {
    TypeReference::Simple {
        name: name.to_string(),
        entity: None,
        span: span(),
    }
}

pub fn resolved_type(name: &str, full_name: &str) -> TypeReference {
    TypeReference::Simple {
        name: name.to_string(),
        entity: Some(TypeEntity::external(full_name)),
        span: span(),
    }
}

pub fn int_type() -> TypeReference {
    resolved_type("int", "System.Int32")
}

pub fn field(name: &str, ty: TypeReference) -> Member {
    Member::Field(Field {
        modifiers: Modifiers::default(),
        ty,
        name: name.to_string(),
        initializer: None,
        span: span(),
    })
}

pub fn param(name: &str, ty: TypeReference) -> Parameter {
    Parameter {
        ty,
        name: name.to_string(),
        span: span(),
    }
}

pub fn method(
    name: &str,
    parameters: Vec<Parameter>,
    return_type: Option<TypeReference>,
    statements: Vec<Statement>,
) -> Method {
    Method {
        modifiers: Modifiers::default(),
        name: name.to_string(),
        generic_parameters: Vec::new(),
        parameters,
        return_type,
        locals: Vec::new(),
        body: block(statements),
        span: span(),
    }
}

pub fn member_method(
    name: &str,
    parameters: Vec<Parameter>,
    return_type: Option<TypeReference>,
    statements: Vec<Statement>,
) -> Member {
    Member::Method(method(name, parameters, return_type, statements))
}

pub fn block(statements: Vec<Statement>) -> Block {
    Block {
        statements,
        span: span(),
    }
}

pub fn expr_stmt(expression: Expression) -> Statement {
    Statement::Expression {
        expression,
        span: span(),
    }
}

pub fn declaration(name: &str, ty: Option<TypeReference>) -> Declaration {
    Declaration {
        name: name.to_string(),
        ty,
        span: span(),
    }
}

pub fn declaration_stmt(
    name: &str,
    ty: Option<TypeReference>,
    initializer: Option<Expression>,
) -> DeclarationStatement {
    DeclarationStatement {
        declaration: declaration(name, ty),
        initializer,
        span: span(),
    }
}

pub fn reference(name: &str) -> Expression {
    Expression::Reference {
        name: name.to_string(),
        entity: None,
        span: span(),
    }
}

pub fn typed_reference(name: &str, full_name: &str) -> Expression {
    Expression::Reference {
        name: name.to_string(),
        entity: Some(ResolvedEntity::Type(TypeEntity::external(full_name))),
        span: span(),
    }
}

pub fn builtin_reference(name: &str) -> Expression {
    Expression::Reference {
        name: name.to_string(),
        entity: Some(ResolvedEntity::BuiltinFunction),
        span: span(),
    }
}

pub fn self_reference() -> Expression {
    Expression::SelfReference {
        entity: None,
        span: span(),
    }
}

pub fn member_ref(target: Expression, name: &str) -> Expression {
    Expression::MemberReference {
        target: Box::new(target),
        name: name.to_string(),
        entity: None,
        span: span(),
    }
}

pub fn invoke(target: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::MethodInvocation {
        target: Box::new(target),
        arguments,
        entity: None,
        span: span(),
    }
}

pub fn generic_ref(target: Expression, arguments: Vec<TypeReference>) -> Expression {
    Expression::GenericReference {
        target: Box::new(target),
        arguments,
        entity: None,
        span: span(),
    }
}

pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::Binary {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        synthetic: false,
        entity: None,
        span: span(),
    }
}

pub fn unary(operator: UnaryOperator, operand: Expression) -> Expression {
    Expression::Unary {
        operator,
        operand: Box::new(operand),
        entity: None,
        span: span(),
    }
}

pub fn int_lit(value: i64) -> Expression {
    Expression::Literal {
        value: Literal::Integer(value),
        entity: None,
        span: span(),
    }
}

pub fn string_lit(value: &str) -> Expression {
    Expression::Literal {
        value: Literal::String(value.to_string()),
        entity: None,
        span: span(),
    }
}
