// Common types - diagnostics, spans and limits
pub use strjoin_common as common;
pub use strjoin_common::{Diagnostic, DiagnosticCategory};

// Scanner and parser (arena AST)
pub use strjoin_parser::parser;
pub use strjoin_scanner as scanner;

// Printer and the string concatenation folding pass
pub use strjoin_emitter::{
    Printer, PrinterOptions, RuleOptions, TransformPass, TransformStats, transforms,
};

// Tracing configuration (STRJOIN_LOG / STRJOIN_LOG_FORMAT)
pub mod tracing_config;

// Native CLI support for the strjoin binary
pub mod cli;

use parser::ParserState;
use tracing::debug;

/// Options for one [`transform_source`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub rules: RuleOptions,
    pub printer: PrinterOptions,
}

/// Result of transforming one file.
#[derive(Clone, Debug)]
pub struct TransformOutput {
    /// Printed program, or the input unchanged when it has diagnostics.
    pub code: String,
    /// At least one fold was applied.
    pub changed: bool,
    pub stats: TransformStats,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse `source`, fold its string concatenations and print it back.
///
/// A file that does not parse cleanly is returned as-is together with its
/// diagnostics; a partially recovered tree is never printed.
pub fn transform_source(
    file_name: &str,
    source: &str,
    options: &TransformOptions,
) -> TransformOutput {
    let mut parser = ParserState::new(file_name.to_string(), source.to_string());
    let root = parser.parse_source_file();
    let diagnostics = parser.get_diagnostics();
    if !diagnostics.is_empty() {
        debug!(
            file = file_name,
            count = diagnostics.len(),
            "parse diagnostics, leaving file unchanged"
        );
        return TransformOutput {
            code: source.to_string(),
            changed: false,
            stats: TransformStats::default(),
            diagnostics,
        };
    }

    let mut arena = parser.into_arena();
    let stats = TransformPass::new(options.rules).run(&mut arena, root);

    let mut printer = Printer::new(&arena, options.printer).with_source_text(source);
    printer.emit(root);

    TransformOutput {
        code: printer.take_output(),
        changed: stats.total_folds() > 0,
        stats,
        diagnostics,
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod lib_tests;
