//! Records of constructs the converter cannot translate.

use crate::ast::Span;
use serde::Serialize;
use thiserror::Error;

/// One unsupported-construct occurrence.
///
/// Diagnostics never abort a conversion; they are collected in source order
/// and handed to the caller together with the generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("unsupported construct `{construct}` in {enclosing} at {span}")]
pub struct Diagnostic {
    /// Human-readable kind of the unsupported node, e.g. "try statement".
    pub construct: &'static str,
    /// The construct the node appeared in, e.g. "method Update".
    pub enclosing: String,
    pub span: Span,
}

/// Ordered collector for [`Diagnostic`]s, one per unit.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
