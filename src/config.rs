use serde::{Deserialize, Serialize};

/// Configuration options that drive C# code generation behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CSharpCodeGenConfig {
    /// Indentation string used when pretty-printing generated C#.
    pub indent: String,
    /// Name of the host entry-point method, suppressed during translation.
    pub entry_point: String,
}

impl Default for CSharpCodeGenConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            entry_point: "Main".to_string(),
        }
    }
}
