//! Printer and transforms for strjoin.
//!
//! - `emitter::Printer` prints an arena AST back to JavaScript.
//! - `transforms::string_concat` folds string concatenations into literals.
//! - `transforms::visitor` walks a tree and binds replacements into place.
//! - `TransformPass` runs the folding rule over a whole source file.

pub mod emitter;
pub use emitter::{Printer, PrinterOptions};

pub mod transforms;

pub mod transform_pass;
pub use transform_pass::{RuleOptions, TransformPass, TransformStats};
