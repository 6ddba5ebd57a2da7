//! Parser and AST storage.

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod node;
pub use node::{NodeArena, NodeFlags, QuasiValue};

mod node_access;
mod node_arena;
mod node_factory;

pub mod syntax_kind_ext;

mod state;
pub use state::{ParseDiagnostic, ParserState};

mod state_expressions;
mod state_statements;

#[cfg(test)]
#[path = "../../tests/node_arena_tests.rs"]
mod node_arena_tests;
