//! JavaScript scanner/tokenizer for strjoin.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine, including template re-scanning
//! - Escape decoding for string and template literals

pub mod syntax_kind;
pub use syntax_kind::{
    SyntaxKind, keyword_to_text, punctuation_to_text, text_to_keyword, token_is_keyword,
    token_is_template_literal,
};

pub mod scanner;
pub use scanner::{ScannerDiagnostic, ScannerState, TokenFlags};
