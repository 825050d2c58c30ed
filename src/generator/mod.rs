//! Depth-first C# emitter over the resolved syntax tree.

use crate::ast::{Span, TypeDefinition, Unit};
use crate::config::CSharpCodeGenConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::namespaces;
use crate::writer::CSharpSourceWriter;

mod declarations;
mod expressions;
mod helpers;
mod statements;
mod types;


/// Delimiter pair used by the next invocation-shaped emission.
///
/// Square brackets are armed only by an array instantiation and consumed by
/// exactly one invocation; [`CSharpCodeGenerator::take_brackets`] makes the
/// reversion part of the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BracketKind {
    Round,
    Square,
}

impl BracketKind {
    pub(crate) fn open(self) -> &'static str {
        match self {
            BracketKind::Round => "(",
            BracketKind::Square => "[",
        }
    }

    pub(crate) fn close(self) -> &'static str {
        match self {
            BracketKind::Round => ")",
            BracketKind::Square => "]",
        }
    }
}

pub struct CSharpCodeGenerator {
    writer: CSharpSourceWriter,
    diagnostics: DiagnosticSink,
    usings: Vec<String>,
    brackets: BracketKind,
    enclosing: Vec<String>,
    config: CSharpCodeGenConfig,
}

impl CSharpCodeGenerator {
    pub fn new() -> Self {
        Self::with_config(CSharpCodeGenConfig::default())
    }

    pub fn with_config(config: CSharpCodeGenConfig) -> Self {
        Self {
            writer: CSharpSourceWriter::new(config.indent.clone()),
            diagnostics: DiagnosticSink::new(),
            usings: Vec::new(),
            brackets: BracketKind::Round,
            enclosing: Vec::new(),
            config,
        }
    }

    /// Convert one unit to C# source text. Conversion always completes;
    /// unsupported constructs surface through [`diagnostics`](Self::diagnostics).
    pub fn generate_unit(&mut self, unit: &Unit) -> String {
        self.reset();
        self.usings = namespaces::imported_namespaces(unit);

        if let Some(namespace) = &unit.namespace {
            self.not_supported("namespace declaration", namespace.span);
        }

        if !self.usings.is_empty() {
            for namespace in &self.usings {
                self.writer.write_line(&format!("using {};", namespace));
            }
            self.writer.write_line("");
        }

        for (index, definition) in unit.types.iter().enumerate() {
            if index > 0 {
                self.writer.write_line("");
            }
            self.generate_type_definition(definition);
            self.writer.write_line("");
        }

        // An array instantiation outside any statement (a field or enum
        // initializer) can leave square brackets armed; never let that
        // cross a unit boundary.
        if self.take_brackets() != BracketKind::Round {
            tracing::warn!(path = %unit.path, "index brackets left armed at unit end");
        }

        self.writer.take_text()
    }

    pub fn generate_type_definition(&mut self, definition: &TypeDefinition) {
        match definition {
            TypeDefinition::Class(class) => self.generate_class(class),
            TypeDefinition::Enum(definition) => self.generate_enum(definition),
            TypeDefinition::Struct(definition) => {
                self.not_supported("struct definition", definition.span);
                let label = format!("struct {}", definition.name);
                self.within(label, |this| {
                    for member in &definition.members {
                        this.generate_member(member);
                    }
                });
            }
            TypeDefinition::Interface(definition) => {
                self.not_supported("interface definition", definition.span);
                let label = format!("interface {}", definition.name);
                self.within(label, |this| {
                    for member in &definition.members {
                        this.generate_member(member);
                    }
                });
            }
        }
    }

    /// Text emitted so far. Snapshot for tests and incremental inspection.
    pub fn output(&self) -> String {
        self.writer.text()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.diagnostics()
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics).into_diagnostics()
    }

    fn reset(&mut self) {
        self.writer = CSharpSourceWriter::new(self.config.indent.clone());
        self.diagnostics = DiagnosticSink::new();
        self.usings.clear();
        self.brackets = BracketKind::Round;
        self.enclosing.clear();
    }

    pub(crate) fn entry_point_name(&self) -> &str {
        &self.config.entry_point
    }

    pub(crate) fn not_supported(&mut self, construct: &'static str, span: Span) {
        let enclosing = self
            .enclosing
            .last()
            .cloned()
            .unwrap_or_else(|| "module".to_string());
        self.diagnostics.report(Diagnostic {
            construct,
            enclosing,
            span,
        });
    }

    /// Run `f` with `label` as the enclosing construct for diagnostics.
    pub(crate) fn within<R>(&mut self, label: String, f: impl FnOnce(&mut Self) -> R) -> R {
        self.enclosing.push(label);
        let result = f(self);
        self.enclosing.pop();
        result
    }

    /// Run `f` one indent level deeper; depth is restored on every exit path.
    pub(crate) fn indented<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.writer.indent();
        let result = f(self);
        self.writer.dedent();
        result
    }

    /// Read the active bracket pair and revert to round parentheses.
    pub(crate) fn take_brackets(&mut self) -> BracketKind {
        std::mem::replace(&mut self.brackets, BracketKind::Round)
    }

    pub(crate) fn arm_square_brackets(&mut self) {
        self.brackets = BracketKind::Square;
    }
}

impl Default for CSharpCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
