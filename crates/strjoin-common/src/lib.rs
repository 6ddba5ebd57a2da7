//! Common types and utilities for strjoin.
//!
//! This crate provides foundational types used across all strjoin crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, codes and messages)
//! - Source spans (`Span`)
//! - Comment ranges (`CommentRange`)
//! - Recursion limits shared by the parser, traversal and rewrite rule

// Diagnostics reported by the scanner and parser
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
    format_message,
};

// Comment ranges recorded by the scanner
pub mod comments;
pub use comments::CommentRange;

// Centralized limits and thresholds
pub mod limits;

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;
