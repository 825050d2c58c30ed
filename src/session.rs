//! Conversion driver over one or many compilation units.

use rayon::prelude::*;

use crate::ast::Unit;
use crate::config::CSharpCodeGenConfig;
use crate::diagnostics::Diagnostic;
use crate::generator::CSharpCodeGenerator;

/// Result of converting one unit: generated text plus everything the
/// generator could not translate.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedUnit {
    /// Path of the source unit, as carried on the tree.
    pub path: String,
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Shared conversion settings applied to every unit.
///
/// Units are independent, so batch conversion fans out across a thread pool
/// with one generator per unit.
#[derive(Debug, Clone, Default)]
pub struct ConversionSession {
    config: CSharpCodeGenConfig,
}

impl ConversionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CSharpCodeGenConfig) -> Self {
        Self { config }
    }

    pub fn convert_unit(&self, unit: &Unit) -> ConvertedUnit {
        let mut generator = CSharpCodeGenerator::with_config(self.config.clone());
        let source = generator.generate_unit(unit);
        let diagnostics = generator.take_diagnostics();
        tracing::debug!(
            path = %unit.path,
            diagnostics = diagnostics.len(),
            "converted unit"
        );
        ConvertedUnit {
            path: unit.path.clone(),
            source,
            diagnostics,
        }
    }

    /// Convert one unit and hand the generated text to `on_converted`,
    /// returning the diagnostics. The handler always runs, even when the
    /// unit produced diagnostics.
    pub fn convert<F>(&self, unit: &Unit, on_converted: F) -> Vec<Diagnostic>
    where
        F: FnOnce(&str, &str),
    {
        let converted = self.convert_unit(unit);
        on_converted(&converted.path, &converted.source);
        converted.diagnostics
    }

    /// Convert every unit in parallel. Results come back in input order.
    pub fn convert_batch(&self, units: &[Unit]) -> Vec<ConvertedUnit> {
        units.par_iter().map(|unit| self.convert_unit(unit)).collect()
    }
}
