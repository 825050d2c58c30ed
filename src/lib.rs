//! C# source generation from resolved UnityScript syntax trees.
//!
//! The input is a fully parsed and semantically resolved [`ast::Unit`];
//! parsing and resolution happen upstream. Conversion never fails: constructs
//! with no C# counterpart are recorded as [`Diagnostic`]s while the rest of
//! the unit keeps translating, so one exotic node does not hold the
//! remaining output hostage.
//!
//! [`ConversionSession`] is the top-level entry point; [`CSharpCodeGenerator`]
//! does the per-unit work and can be driven directly for finer control.

pub mod ast;
mod config;
mod diagnostics;
mod generator;
mod namespaces;
mod session;
mod writer;

pub use config::CSharpCodeGenConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use generator::CSharpCodeGenerator;
pub use namespaces::imported_namespaces;
pub use session::{ConversionSession, ConvertedUnit};
pub use writer::CSharpSourceWriter;
