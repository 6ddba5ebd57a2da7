//! Scanner state machine.
//!
//! `ScannerState` produces one token per `scan()` call. String and template
//! tokens carry their decoded (cooked) value in `token_value()`; template
//! tokens also carry the as-written text in `token_raw()`, with `\r\n` and
//! `\r` normalized to `\n` as the language requires for raw strings.
//!
//! Templates are scanned in pieces: a backtick starts either a
//! `NoSubstitutionTemplateLiteral` or a `TemplateHead`. After the parser has
//! consumed a substitution expression it sees a `CloseBraceToken` and calls
//! `re_scan_template_token()` to continue with a `TemplateMiddle` or
//! `TemplateTail`.
//!
//! Comments are skipped as trivia; their ranges are recorded and handed to
//! the parser through `take_comments()`.

use memchr::{memchr2, memmem};
use strjoin_common::comments::CommentRange;
use strjoin_common::diagnostics::{DiagnosticMessage, diagnostic_messages};

use crate::syntax_kind::{SyntaxKind, text_to_keyword};

const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Facts about the current token, queried with `get_token_flags()`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenFlags {
    None = 0,
    /// A `\u` escape named a lone surrogate; the cooked value holds U+FFFD
    /// in its place and does not match the runtime string.
    ContainsLoneSurrogate = 1 << 0,
}

/// A lexical error found while scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerDiagnostic {
    pub pos: usize,
    pub length: usize,
    pub message: &'static str,
    pub code: u32,
}

pub struct ScannerState {
    text: String,
    pos: usize,
    full_start_pos: usize,
    token_start: usize,
    token: SyntaxKind,
    token_value: String,
    token_raw: String,
    token_flags: u32,
    preceding_line_break: bool,
    comments: Vec<CommentRange>,
    diagnostics: Vec<ScannerDiagnostic>,
}

impl ScannerState {
    pub fn new(text: String) -> Self {
        ScannerState {
            text,
            pos: 0,
            full_start_pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            token_raw: String::new(),
            token_flags: TokenFlags::None as u32,
            preceding_line_break: false,
            comments: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn source_text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// Start of the current token, after leading trivia.
    #[inline]
    pub fn token_pos(&self) -> usize {
        self.token_start
    }

    /// Start of the current token, including leading trivia.
    #[inline]
    pub fn token_full_start(&self) -> usize {
        self.full_start_pos
    }

    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    /// Identifier text, numeric literal text, or the cooked value of a
    /// string/template token.
    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Raw text of a template token (between the delimiters).
    #[inline]
    pub fn token_raw(&self) -> &str {
        &self.token_raw
    }

    #[inline]
    pub fn get_token_flags(&self) -> u32 {
        self.token_flags
    }

    #[inline]
    pub fn has_token_flag(&self, flag: TokenFlags) -> bool {
        (self.token_flags & flag as u32) != 0
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.preceding_line_break
    }

    pub fn get_scanner_diagnostics(&self) -> &[ScannerDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<ScannerDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Comments skipped so far, in source order.
    pub fn take_comments(&mut self) -> Vec<CommentRange> {
        std::mem::take(&mut self.comments)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..)?.chars().next()
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.text.as_bytes().get(pos).copied()
    }

    fn error(&mut self, pos: usize, length: usize, message: &DiagnosticMessage) {
        self.diagnostics.push(ScannerDiagnostic {
            pos,
            length,
            message: message.message,
            code: message.code,
        });
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    pub fn scan(&mut self) -> SyntaxKind {
        self.full_start_pos = self.pos;
        self.preceding_line_break = false;
        self.token_value.clear();
        self.token_raw.clear();
        self.token_flags = TokenFlags::None as u32;
        self.skip_trivia();
        self.token_start = self.pos;

        let Some(ch) = self.char_at(self.pos) else {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        };

        self.token = match ch {
            '"' | '\'' => self.scan_string(ch),
            '`' => {
                self.pos += 1;
                self.scan_template_span(true)
            }
            '0'..='9' => self.scan_number(),
            '.' => {
                if matches!(self.byte_at(self.pos + 1), Some(b) if b.is_ascii_digit()) {
                    self.scan_number()
                } else if self.text[self.pos..].starts_with("...") {
                    self.pos += 3;
                    SyntaxKind::DotDotDotToken
                } else {
                    self.pos += 1;
                    SyntaxKind::DotToken
                }
            }
            '{' => self.single(SyntaxKind::OpenBraceToken),
            '}' => self.single(SyntaxKind::CloseBraceToken),
            '(' => self.single(SyntaxKind::OpenParenToken),
            ')' => self.single(SyntaxKind::CloseParenToken),
            '[' => self.single(SyntaxKind::OpenBracketToken),
            ']' => self.single(SyntaxKind::CloseBracketToken),
            ';' => self.single(SyntaxKind::SemicolonToken),
            ',' => self.single(SyntaxKind::CommaToken),
            '?' => self.single(SyntaxKind::QuestionToken),
            ':' => self.single(SyntaxKind::ColonToken),
            '+' => self.single(SyntaxKind::PlusToken),
            '-' => self.single(SyntaxKind::MinusToken),
            '*' => self.single(SyntaxKind::AsteriskToken),
            '/' => self.single(SyntaxKind::SlashToken),
            '%' => self.single(SyntaxKind::PercentToken),
            '<' => {
                if self.byte_at(self.pos + 1) == Some(b'=') {
                    self.pos += 2;
                    SyntaxKind::LessThanEqualsToken
                } else {
                    self.single(SyntaxKind::LessThanToken)
                }
            }
            '>' => {
                if self.byte_at(self.pos + 1) == Some(b'=') {
                    self.pos += 2;
                    SyntaxKind::GreaterThanEqualsToken
                } else {
                    self.single(SyntaxKind::GreaterThanToken)
                }
            }
            '=' => {
                if self.text[self.pos..].starts_with("===") {
                    self.pos += 3;
                    SyntaxKind::EqualsEqualsEqualsToken
                } else if self.byte_at(self.pos + 1) == Some(b'=') {
                    self.pos += 2;
                    SyntaxKind::EqualsEqualsToken
                } else {
                    self.single(SyntaxKind::EqualsToken)
                }
            }
            '!' => {
                if self.text[self.pos..].starts_with("!==") {
                    self.pos += 3;
                    SyntaxKind::ExclamationEqualsEqualsToken
                } else if self.byte_at(self.pos + 1) == Some(b'=') {
                    self.pos += 2;
                    SyntaxKind::ExclamationEqualsToken
                } else {
                    self.single(SyntaxKind::ExclamationToken)
                }
            }
            '&' if self.byte_at(self.pos + 1) == Some(b'&') => {
                self.pos += 2;
                SyntaxKind::AmpersandAmpersandToken
            }
            '|' if self.byte_at(self.pos + 1) == Some(b'|') => {
                self.pos += 2;
                SyntaxKind::BarBarToken
            }
            c if is_identifier_start(c) => self.scan_identifier(),
            c => {
                let start = self.pos;
                self.pos += c.len_utf8();
                self.error(
                    start,
                    c.len_utf8(),
                    &diagnostic_messages::INVALID_CHARACTER,
                );
                SyntaxKind::Unknown
            }
        };
        self.token
    }

    /// Continue a template after the `}` closing a substitution.
    ///
    /// Must be called while the current token is `CloseBraceToken`.
    pub fn re_scan_template_token(&mut self) -> SyntaxKind {
        self.pos = self.token_start + 1;
        self.token_value.clear();
        self.token_raw.clear();
        self.token_flags = TokenFlags::None as u32;
        self.token = self.scan_template_span(false);
        self.token
    }

    #[inline]
    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    fn skip_trivia(&mut self) {
        loop {
            let Some(ch) = self.char_at(self.pos) else {
                return;
            };
            match ch {
                '\n' | '\r' | '\u{2028}' | '\u{2029}' => {
                    self.preceding_line_break = true;
                    self.pos += ch.len_utf8();
                }
                '/' if self.byte_at(self.pos + 1) == Some(b'/') => {
                    let start = self.pos;
                    let rest = &self.text.as_bytes()[self.pos..];
                    match memchr2(b'\n', b'\r', rest) {
                        Some(offset) => self.pos += offset,
                        None => self.pos = self.text.len(),
                    }
                    self.record_comment(start, false);
                }
                '/' if self.byte_at(self.pos + 1) == Some(b'*') => {
                    let start = self.pos;
                    let body_start = self.pos + 2;
                    match memmem::find(&self.text.as_bytes()[body_start..], b"*/") {
                        Some(offset) => {
                            let body = &self.text[body_start..body_start + offset];
                            if body.contains(|c: char| {
                                matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
                            }) {
                                self.preceding_line_break = true;
                            }
                            self.pos = body_start + offset + 2;
                        }
                        None => {
                            self.error(start, 2, &diagnostic_messages::UNTERMINATED_COMMENT);
                            self.pos = self.text.len();
                        }
                    }
                    self.record_comment(start, true);
                }
                c if c.is_whitespace() || c == '\u{FEFF}' => self.pos += c.len_utf8(),
                _ => return,
            }
        }
    }

    fn record_comment(&mut self, start: usize, is_multi_line: bool) {
        let pos = u32::try_from(start).unwrap_or(u32::MAX);
        let end = u32::try_from(self.pos).unwrap_or(u32::MAX);
        self.comments
            .push(CommentRange::new(pos, end, is_multi_line));
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        while let Some(ch) = self.char_at(self.pos) {
            if !is_identifier_part(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.token_value = self.text[start..self.pos].to_string();
        text_to_keyword(&self.token_value).unwrap_or(SyntaxKind::Identifier)
    }

    fn consume_decimal_digits(&mut self) {
        while matches!(self.byte_at(self.pos), Some(b) if b.is_ascii_digit() || b == b'_') {
            self.pos += 1;
        }
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        let radix_prefix = self.byte_at(start) == Some(b'0')
            && matches!(
                self.byte_at(start + 1),
                Some(b'x' | b'X' | b'b' | b'B' | b'o' | b'O')
            );
        if radix_prefix {
            self.pos += 2;
            while matches!(self.byte_at(self.pos), Some(b) if b.is_ascii_hexdigit() || b == b'_') {
                self.pos += 1;
            }
        } else {
            self.consume_decimal_digits();
            if self.byte_at(self.pos) == Some(b'.') {
                self.pos += 1;
                self.consume_decimal_digits();
            }
            if matches!(self.byte_at(self.pos), Some(b'e' | b'E')) {
                let before_exponent = self.pos;
                self.pos += 1;
                if matches!(self.byte_at(self.pos), Some(b'+' | b'-')) {
                    self.pos += 1;
                }
                if matches!(self.byte_at(self.pos), Some(b) if b.is_ascii_digit()) {
                    self.consume_decimal_digits();
                } else {
                    self.pos = before_exponent;
                }
            }
        }
        // BigInt suffix
        if self.byte_at(self.pos) == Some(b'n') {
            self.pos += 1;
        }
        self.token_value = self.text[start..self.pos].to_string();
        SyntaxKind::NumericLiteral
    }

    fn scan_string(&mut self, quote: char) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        let mut value = String::new();
        loop {
            let Some(ch) = self.char_at(self.pos) else {
                self.error(
                    start,
                    self.pos - start,
                    &diagnostic_messages::UNTERMINATED_STRING_LITERAL,
                );
                break;
            };
            if ch == quote {
                self.pos += 1;
                break;
            }
            match ch {
                '\\' => self.scan_escape(&mut value, false),
                '\n' | '\r' => {
                    self.error(
                        start,
                        self.pos - start,
                        &diagnostic_messages::UNTERMINATED_STRING_LITERAL,
                    );
                    break;
                }
                _ => {
                    value.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
        self.token_value = value;
        SyntaxKind::StringLiteral
    }

    /// Scan template text up to the closing backtick or the next `${`.
    /// `self.pos` is just past the opening backtick or `}`.
    fn scan_template_span(&mut self, starts_with_backtick: bool) -> SyntaxKind {
        let mut raw = String::new();
        let mut cooked = String::new();
        let kind = loop {
            let Some(ch) = self.char_at(self.pos) else {
                self.error(
                    self.token_start,
                    self.pos - self.token_start,
                    &diagnostic_messages::UNTERMINATED_TEMPLATE_LITERAL,
                );
                break if starts_with_backtick {
                    SyntaxKind::NoSubstitutionTemplateLiteral
                } else {
                    SyntaxKind::TemplateTail
                };
            };
            match ch {
                '`' => {
                    self.pos += 1;
                    break if starts_with_backtick {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                }
                '$' if self.byte_at(self.pos + 1) == Some(b'{') => {
                    self.pos += 2;
                    break if starts_with_backtick {
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                }
                '\\' => {
                    let escape_start = self.pos;
                    self.scan_escape(&mut cooked, true);
                    push_normalized_line_endings(&mut raw, &self.text[escape_start..self.pos]);
                }
                '\r' => {
                    self.pos += 1;
                    if self.byte_at(self.pos) == Some(b'\n') {
                        self.pos += 1;
                    }
                    raw.push('\n');
                    cooked.push('\n');
                }
                _ => {
                    raw.push(ch);
                    cooked.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        };
        self.token_raw = raw;
        self.token_value = cooked;
        kind
    }

    // =========================================================================
    // Escapes
    // =========================================================================

    /// Decode one escape sequence starting at the backslash at `self.pos`.
    fn scan_escape(&mut self, out: &mut String, in_template: bool) {
        let start = self.pos;
        self.pos += 1;
        let Some(ch) = self.char_at(self.pos) else {
            return;
        };
        self.pos += ch.len_utf8();
        match ch {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000C}'),
            'v' => out.push('\u{000B}'),
            '0' if !matches!(self.byte_at(self.pos), Some(b) if b.is_ascii_digit()) => {
                out.push('\0');
            }
            '0'..='7' => {
                if in_template {
                    self.invalid_escape(start);
                    return;
                }
                // Legacy octal escape, at most 0o377.
                let mut value = ch as u32 - '0' as u32;
                let max_digits = if ch <= '3' { 3 } else { 2 };
                let mut digits = 1;
                while digits < max_digits {
                    match self.byte_at(self.pos) {
                        Some(b @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(b - b'0');
                            self.pos += 1;
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or(REPLACEMENT_CHAR));
            }
            '8' | '9' => {
                if in_template {
                    self.invalid_escape(start);
                } else {
                    out.push(ch);
                }
            }
            'x' => match self.scan_hex_digits(2) {
                Some(value) => out.push(char::from_u32(value).unwrap_or(REPLACEMENT_CHAR)),
                None => self.invalid_escape(start),
            },
            'u' => match self.scan_unicode_escape_value() {
                Some(high @ 0xD800..=0xDBFF) => {
                    let checkpoint = self.pos;
                    let mut combined = None;
                    if self.text[self.pos..].starts_with("\\u") {
                        self.pos += 2;
                        if let Some(low @ 0xDC00..=0xDFFF) = self.scan_unicode_escape_value() {
                            combined =
                                char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00));
                        }
                    }
                    match combined {
                        Some(c) => out.push(c),
                        None => {
                            self.pos = checkpoint;
                            self.push_code_point(out, high);
                        }
                    }
                }
                Some(value) => self.push_code_point(out, value),
                None => self.invalid_escape(start),
            },
            // Line continuations contribute nothing to the value.
            '\r' => {
                if self.byte_at(self.pos) == Some(b'\n') {
                    self.pos += 1;
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
    }

    /// Push a decoded `\u` escape. Lone surrogates cannot live in a Rust
    /// string: they become U+FFFD and the token is flagged.
    fn push_code_point(&mut self, out: &mut String, value: u32) {
        match char::from_u32(value) {
            Some(c) => out.push(c),
            None => {
                self.token_flags |= TokenFlags::ContainsLoneSurrogate as u32;
                out.push(REPLACEMENT_CHAR);
            }
        }
    }

    fn invalid_escape(&mut self, start: usize) {
        self.error(
            start,
            self.pos - start,
            &diagnostic_messages::INVALID_ESCAPE_SEQUENCE,
        );
    }

    fn scan_hex_digits(&mut self, count: usize) -> Option<u32> {
        let end = self.pos + count;
        let digits = self.text.get(self.pos..end)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        self.pos = end;
        Some(value)
    }

    /// Value of `\uXXXX` or `\u{X...}`, with `self.pos` just past the `u`.
    fn scan_unicode_escape_value(&mut self) -> Option<u32> {
        if self.byte_at(self.pos) != Some(b'{') {
            return self.scan_hex_digits(4);
        }
        let digits_start = self.pos + 1;
        let mut digits_end = digits_start;
        while matches!(self.byte_at(digits_end), Some(b) if b.is_ascii_hexdigit()) {
            digits_end += 1;
        }
        if digits_end == digits_start || self.byte_at(digits_end) != Some(b'}') {
            return None;
        }
        let value = u32::from_str_radix(&self.text[digits_start..digits_end], 16).ok()?;
        if value > 0x10FFFF {
            return None;
        }
        self.pos = digits_end + 1;
        Some(value)
    }
}

fn push_normalized_line_endings(out: &mut String, text: &str) {
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
}

#[must_use]
pub fn is_identifier_start(ch: char) -> bool {
    ch == '$' || ch == '_' || ch.is_ascii_alphabetic() || (!ch.is_ascii() && ch.is_alphabetic())
}

#[must_use]
pub fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch)
        || ch.is_ascii_digit()
        || (!ch.is_ascii() && ch.is_alphanumeric())
        || ch == '\u{200C}'
        || ch == '\u{200D}'
}
