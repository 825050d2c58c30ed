//! Pre-pass collecting a unit's import directives.

use crate::ast::Unit;

/// Collect the namespaces imported by a unit, in first-seen order with
/// duplicates removed. The result feeds both `using` header emission and
/// type-name elision.
pub fn imported_namespaces(unit: &Unit) -> Vec<String> {
    let mut namespaces: Vec<String> = Vec::new();
    for import in &unit.imports {
        if !namespaces.contains(&import.namespace) {
            namespaces.push(import.namespace.clone());
        }
    }
    namespaces
}
