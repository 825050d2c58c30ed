use super::CSharpCodeGenerator;
use crate::ast::{TypeEntity, TypeReference};

impl CSharpCodeGenerator {
    pub fn generate_type_reference(&mut self, reference: &TypeReference) {
        match reference {
            TypeReference::Simple { name, entity, .. } => {
                let resolved = entity.as_ref().and_then(|entity| self.resolve_type_name(entity));
                match resolved {
                    Some(resolved) => self.writer.write(&resolved),
                    // No entity or no shorter spelling: fall back to the
                    // source-level name, unqualified. Known fidelity gap when
                    // the bare name collides with an unrelated symbol.
                    None => self.writer.write(name),
                }
            }
            TypeReference::Array { element, rank, .. } => {
                self.generate_type_reference(element);
                let commas = ",".repeat((*rank as usize).saturating_sub(1));
                self.writer.write(&format!("[{}]", commas));
            }
            TypeReference::Generic {
                arguments, span, ..
            } => {
                self.not_supported("generic type reference", *span);
                for argument in arguments {
                    self.generate_type_reference(argument);
                }
            }
            TypeReference::Callable {
                parameters,
                return_type,
                span,
            } => {
                self.not_supported("callable type reference", *span);
                for parameter in parameters {
                    self.generate_type_reference(parameter);
                }
                if let Some(return_type) = return_type {
                    self.generate_type_reference(return_type);
                }
            }
        }
    }

    /// C# spelling for a resolved type: a keyword for the well-known CLR
    /// primitives, the bare name when the namespace is imported, `None` when
    /// only the source-level text is usable.
    fn resolve_type_name(&self, entity: &TypeEntity) -> Option<String> {
        if let Some(keyword) = well_known_type_name(&entity.full_name) {
            return Some(keyword.to_string());
        }
        if self.usings.iter().any(|namespace| namespace == &entity.namespace) {
            return Some(entity.name.clone());
        }
        None
    }
}

/// Fixed table of CLR primitive full names that C# spells as keywords.
pub(crate) fn well_known_type_name(full_name: &str) -> Option<&'static str> {
    match full_name {
        "System.String" => Some("string"),
        "System.Boolean" => Some("bool"),
        "System.Object" => Some("object"),
        "System.Int32" => Some("int"),
        "System.Int64" => Some("long"),
        _ => None,
    }
}
