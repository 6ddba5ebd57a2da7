//! JavaScript parser and arena AST for strjoin.
//!
//! - `parser::NodeArena` owns every node of a source file; nodes are addressed
//!   by `NodeIndex` and their payloads live in per-kind data pools.
//! - `parser::ParserState` turns source text into a `SourceFile` node.
//! - `NodeArena::create_*` methods build synthesized nodes for transforms.

pub mod parser;
