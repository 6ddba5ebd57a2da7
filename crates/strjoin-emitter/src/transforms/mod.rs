//! AST transforms.
//!
//! Transforms never edit parsed nodes; they build replacements with the
//! arena's `create_*` constructors and bind them with `NodeArena::replace`.

pub mod string_concat;
pub mod visitor;

pub use string_concat::{ConcatError, StringConcatRule};
pub use visitor::{Rewrite, walk_and_rewrite};
