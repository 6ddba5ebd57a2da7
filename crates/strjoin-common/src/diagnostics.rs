//! Diagnostic types and message lookup for the scanner and parser.
//!
//! Codes are grouped by phase: `1xxx` scanner, `2xxx` parser.

use serde::Serialize;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Message = 2,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1002;
    pub const UNTERMINATED_TEMPLATE_LITERAL: u32 = 1003;
    pub const INVALID_CHARACTER: u32 = 1004;
    pub const INVALID_ESCAPE_SEQUENCE: u32 = 1005;
    pub const UNTERMINATED_COMMENT: u32 = 1006;
    pub const EXPECTED_TOKEN: u32 = 2001;
    pub const EXPRESSION_EXPECTED: u32 = 2002;
    pub const IDENTIFIER_EXPECTED: u32 = 2003;
    pub const DECLARATION_OR_STATEMENT_EXPECTED: u32 = 2004;
    pub const NESTING_TOO_DEEP: u32 = 2005;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::UNTERMINATED_STRING_LITERAL,
        category: DiagnosticCategory::Error,
        message: "Unterminated string literal.",
    };
    pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::UNTERMINATED_TEMPLATE_LITERAL,
        category: DiagnosticCategory::Error,
        message: "Unterminated template literal.",
    };
    pub const INVALID_CHARACTER: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::INVALID_CHARACTER,
        category: DiagnosticCategory::Error,
        message: "Invalid character.",
    };
    pub const INVALID_ESCAPE_SEQUENCE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::INVALID_ESCAPE_SEQUENCE,
        category: DiagnosticCategory::Error,
        message: "Invalid escape sequence.",
    };
    pub const UNTERMINATED_COMMENT: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::UNTERMINATED_COMMENT,
        category: DiagnosticCategory::Error,
        message: "'*/' expected.",
    };
    pub const EXPECTED_TOKEN: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXPECTED_TOKEN,
        category: DiagnosticCategory::Error,
        message: "'{0}' expected.",
    };
    pub const EXPRESSION_EXPECTED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXPRESSION_EXPECTED,
        category: DiagnosticCategory::Error,
        message: "Expression expected.",
    };
    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::IDENTIFIER_EXPECTED,
        category: DiagnosticCategory::Error,
        message: "Identifier expected.",
    };
    pub const DECLARATION_OR_STATEMENT_EXPECTED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
        category: DiagnosticCategory::Error,
        message: "Declaration or statement expected.",
    };
    pub const NESTING_TOO_DEEP: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::NESTING_TOO_DEEP,
        category: DiagnosticCategory::Error,
        message: "Expression nesting is too deep.",
    };
}

/// A diagnostic message attached to a byte range of a source file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            file: file.into(),
            start,
            length,
            message_text: message.into(),
            category: DiagnosticCategory::Error,
            code,
        }
    }
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
