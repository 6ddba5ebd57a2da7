//! Parser state: token cursor, diagnostics and recursion guard.

use super::base::NodeIndex;
use super::node::{IdentifierData, NodeArena, NodeFlags};
use strjoin_common::diagnostics::{Diagnostic, DiagnosticMessage, diagnostic_messages};
use strjoin_common::limits::MAX_PARSE_DEPTH;
use strjoin_scanner::{ScannerState, SyntaxKind, punctuation_to_text};

/// A diagnostic produced while parsing, before it is attached to a file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub start: u32,
    pub length: u32,
    pub message: String,
    pub code: u32,
}

pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub arena: NodeArena,
    pub(crate) file_name: String,
    pub(crate) current_token: SyntaxKind,
    /// End of the previously consumed token; node end positions.
    pub(crate) previous_token_end: u32,
    pub(crate) parse_diagnostics: Vec<ParseDiagnostic>,
    pub(crate) recursion_depth: u32,
    depth_exceeded: bool,
}

impl ParserState {
    pub fn new(file_name: String, source_text: String) -> ParserState {
        ParserState {
            scanner: ScannerState::new(source_text),
            arena: NodeArena::new(),
            file_name,
            current_token: SyntaxKind::Unknown,
            previous_token_end: 0,
            parse_diagnostics: Vec::new(),
            recursion_depth: 0,
            depth_exceeded: false,
        }
    }

    pub fn get_arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source_text(&self) -> &str {
        self.scanner.source_text()
    }

    /// Parse and scan diagnostics for this file, sorted by position.
    pub fn get_diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = self
            .parse_diagnostics
            .iter()
            .map(|d| Diagnostic::error(&self.file_name, d.start, d.length, &d.message, d.code))
            .collect();
        diagnostics.sort_by_key(|d| d.start);
        diagnostics
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    #[inline]
    pub(crate) fn token_pos(&self) -> u32 {
        u32_from_usize(self.scanner.token_pos())
    }

    #[inline]
    pub(crate) fn token_end(&self) -> u32 {
        u32_from_usize(self.scanner.token_end())
    }

    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.previous_token_end = self.token_end();
        self.current_token = self.scanner.scan();
        self.current_token
    }

    /// Re-scan the current `}` as the continuation of a template literal.
    pub(crate) fn re_scan_template_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_template_token();
        self.current_token
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or report "'x' expected." at the current token.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.parse_optional(kind) {
            return true;
        }
        let text = punctuation_to_text(kind).unwrap_or("token");
        self.error_at_current_token(&diagnostic_messages::EXPECTED_TOKEN, &[text]);
        false
    }

    /// Automatic semicolon insertion: a statement may end at `;`, before `}`,
    /// at end of file, or before a line break.
    pub(crate) fn can_parse_semicolon(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) || self.scanner.has_preceding_line_break()
    }

    pub(crate) fn parse_semicolon(&mut self) -> bool {
        if self.parse_optional(SyntaxKind::SemicolonToken) {
            return true;
        }
        if self.can_parse_semicolon() {
            return true;
        }
        self.parse_expected(SyntaxKind::SemicolonToken)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    pub(crate) fn error_at(&mut self, start: u32, length: u32, message: &DiagnosticMessage, args: &[&str]) {
        // One diagnostic per position keeps error recovery from cascading.
        if self
            .parse_diagnostics
            .last()
            .is_some_and(|last| last.start == start)
        {
            return;
        }
        self.parse_diagnostics.push(ParseDiagnostic {
            start,
            length,
            message: strjoin_common::format_message(message.message, args),
            code: message.code,
        });
    }

    pub(crate) fn error_at_current_token(&mut self, message: &DiagnosticMessage, args: &[&str]) {
        let start = self.token_pos();
        let length = self.token_end().saturating_sub(start);
        self.error_at(start, length, message, args);
    }

    pub(crate) fn collect_scanner_diagnostics(&mut self) {
        for diag in self.scanner.take_diagnostics() {
            self.parse_diagnostics.push(ParseDiagnostic {
                start: u32_from_usize(diag.pos),
                length: u32_from_usize(diag.length),
                message: diag.message.to_string(),
                code: diag.code,
            });
        }
    }

    /// Placeholder identifier for a missing expression.
    pub(crate) fn create_missing_node(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let idx = self.arena.add_identifier(
            SyntaxKind::Identifier as u16,
            pos,
            pos,
            IdentifierData {
                escaped_text: String::new(),
            },
        );
        if let Some(node) = self.arena.get_mut(idx) {
            node.flags |= NodeFlags::MISSING;
        }
        idx
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    /// Returns `false` when nesting is too deep; the caller must bail out.
    pub(crate) fn enter_recursion(&mut self) -> bool {
        if self.recursion_depth >= MAX_PARSE_DEPTH {
            if !self.depth_exceeded {
                self.depth_exceeded = true;
                self.error_at_current_token(&diagnostic_messages::NESTING_TOO_DEEP, &[]);
            }
            return false;
        }
        self.recursion_depth += 1;
        true
    }

    #[inline]
    pub(crate) fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }
}

#[inline]
pub(crate) fn u32_from_usize(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
