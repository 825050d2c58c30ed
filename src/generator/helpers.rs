use crate::ast::{BinaryOperator, Modifiers, UnaryOperator, Visibility};

/// C# spelling for a binary operator. Logical conjunction and disjunction
/// have dedicated symbols distinct from the bitwise ones; everything else
/// passes through the source table.
pub(crate) fn csharp_binary_operator(operator: BinaryOperator) -> &'static str {
    match operator {
        BinaryOperator::And => "&&",
        BinaryOperator::Or => "||",
        other => other.source_symbol(),
    }
}

pub(crate) fn csharp_unary_operator(operator: UnaryOperator) -> &'static str {
    match operator {
        UnaryOperator::LogicalNot => "!",
        other => other.source_symbol(),
    }
}

pub(crate) fn modifiers_to_string(modifiers: &Modifiers) -> String {
    let mut parts = Vec::new();
    match modifiers.visibility {
        Visibility::Public => parts.push("public"),
        Visibility::Protected => parts.push("protected"),
        Visibility::Private => parts.push("private"),
        Visibility::Internal => parts.push("internal"),
    }
    if modifiers.is_abstract {
        parts.push("abstract");
    }
    if modifiers.is_virtual {
        parts.push("virtual");
    }
    if modifiers.is_override {
        parts.push("override");
    }
    if modifiers.is_static {
        parts.push("static");
    }
    if modifiers.is_final {
        parts.push("sealed");
    }
    parts.join(" ")
}

pub(crate) fn escape_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
