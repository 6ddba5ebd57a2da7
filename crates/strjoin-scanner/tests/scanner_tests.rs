//! Tests for the scanner.

use strjoin_common::diagnostic_codes;
use strjoin_scanner::*;

fn scan_all(source: &str) -> Vec<SyntaxKind> {
    let mut scanner = ScannerState::new(source.to_string());
    let mut kinds = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        kinds.push(kind);
    }
    kinds
}

fn scan_single(source: &str) -> ScannerState {
    let mut scanner = ScannerState::new(source.to_string());
    scanner.scan();
    scanner
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        scan_all("const greeting = name"),
        vec![
            SyntaxKind::ConstKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::EqualsToken,
            SyntaxKind::Identifier,
        ]
    );
    assert_eq!(text_to_keyword("typeof"), Some(SyntaxKind::TypeOfKeyword));
    assert_eq!(text_to_keyword("join"), None);
    assert_eq!(keyword_to_text(SyntaxKind::VarKeyword), Some("var"));
    assert!(token_is_keyword(SyntaxKind::ThisKeyword));
    assert!(!token_is_keyword(SyntaxKind::Identifier));
}

#[test]
fn test_punctuation() {
    assert_eq!(
        scan_all("a === b !== c && d || !e ... ."),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::EqualsEqualsEqualsToken,
            SyntaxKind::Identifier,
            SyntaxKind::ExclamationEqualsEqualsToken,
            SyntaxKind::Identifier,
            SyntaxKind::AmpersandAmpersandToken,
            SyntaxKind::Identifier,
            SyntaxKind::BarBarToken,
            SyntaxKind::ExclamationToken,
            SyntaxKind::Identifier,
            SyntaxKind::DotDotDotToken,
            SyntaxKind::DotToken,
        ]
    );
    assert_eq!(punctuation_to_text(SyntaxKind::PlusToken), Some("+"));
    assert_eq!(punctuation_to_text(SyntaxKind::Identifier), None);
}

#[test]
fn test_syntax_kind_round_trips_through_u16() {
    assert_eq!(SyntaxKind::try_from(SyntaxKind::PlusToken as u16), Ok(SyntaxKind::PlusToken));
    assert_eq!(SyntaxKind::try_from(9999), Err(9999));
}

#[test]
fn test_numeric_literals_keep_source_text() {
    for text in ["42", "3.14", ".5", "1e10", "2E-3", "0xFF", "0b1010", "1_000", "10n"] {
        let scanner = scan_single(text);
        assert_eq!(scanner.token(), SyntaxKind::NumericLiteral, "{text}");
        assert_eq!(scanner.token_value(), text);
    }
}

#[test]
fn test_string_escapes_are_decoded() {
    let scanner = scan_single(r#""a\nb\t\"q\" \x41B\u{43} \0""#);
    assert_eq!(scanner.token(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "a\nb\t\"q\" ABC \0");
    assert!(scanner.get_scanner_diagnostics().is_empty());
}

#[test]
fn test_string_surrogate_pair_escape() {
    let scanner = scan_single(r"'\uD83D\uDE00'");
    assert_eq!(scanner.token_value(), "\u{1F600}");
}

#[test]
fn test_string_line_continuation_and_legacy_octal() {
    let scanner = scan_single("'a\\\nb\\101'");
    assert_eq!(scanner.token_value(), "abA");
}

#[test]
fn test_unterminated_string_reports_diagnostic() {
    let scanner = scan_single("'abc\n");
    let diags = scanner.get_scanner_diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, diagnostic_codes::UNTERMINATED_STRING_LITERAL);
}

#[test]
fn test_no_substitution_template() {
    let scanner = scan_single(r"`a\tb`");
    assert_eq!(scanner.token(), SyntaxKind::NoSubstitutionTemplateLiteral);
    assert_eq!(scanner.token_value(), "a\tb");
    assert_eq!(scanner.token_raw(), r"a\tb");
}

#[test]
fn test_template_head_middle_tail() {
    let mut scanner = ScannerState::new("`a${x}b${y}c`".to_string());
    assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
    assert_eq!(scanner.token_raw(), "a");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateMiddle);
    assert_eq!(scanner.token_raw(), "b");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateTail);
    assert_eq!(scanner.token_raw(), "c");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_template_raw_normalizes_carriage_returns() {
    let scanner = scan_single("`a\r\nb\rc`");
    assert_eq!(scanner.token_raw(), "a\nb\nc");
    assert_eq!(scanner.token_value(), "a\nb\nc");
}

#[test]
fn test_template_rejects_octal_escape() {
    let scanner = scan_single(r"`\1`");
    let diags = scanner.get_scanner_diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, diagnostic_codes::INVALID_ESCAPE_SEQUENCE);
}

#[test]
fn test_comments_and_line_breaks() {
    let mut scanner = ScannerState::new("a // trailing\n/* block\n */ b /* inline */ c".to_string());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(!scanner.has_preceding_line_break());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "b");
    assert!(scanner.has_preceding_line_break());
    // Leading trivia belongs to the token's full range.
    assert_eq!(scanner.token_full_start(), 1);
    assert_eq!(scanner.token_pos(), 27);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "c");
    assert!(!scanner.has_preceding_line_break());
}

#[test]
fn test_comment_ranges_are_recorded() {
    let source = "a // trailing\n/* block\n */ b '// not a comment' `/* nor this */`";
    let mut scanner = ScannerState::new(source.to_string());
    while scanner.scan() != SyntaxKind::EndOfFileToken {}
    let comments = scanner.take_comments();
    let texts: Vec<&str> = comments.iter().map(|c| c.get_text(source)).collect();
    assert_eq!(texts, vec!["// trailing", "/* block\n */"]);
    assert!(!comments[0].is_multi_line);
    assert!(comments[1].is_multi_line);
    assert!(scanner.take_comments().is_empty());
}

#[test]
fn test_lone_surrogate_escapes_are_flagged() {
    for source in [r"'\uD800'", r"'\uDC00x'", r"'\u{DFFF}'", r"`\uD800${"] {
        let scanner = scan_single(source);
        assert_eq!(scanner.token_value().chars().next(), Some('\u{FFFD}'), "{source}");
        assert!(scanner.has_token_flag(TokenFlags::ContainsLoneSurrogate), "{source}");
    }
    for source in [r"'\uD83D\uDE00'", r"'\uFFFD'", r"'plain'"] {
        let scanner = scan_single(source);
        assert_eq!(scanner.get_token_flags(), TokenFlags::None as u32, "{source}");
    }
    // Flags describe the current token only.
    let mut scanner = ScannerState::new(r"'\uD800' 'x'".to_string());
    scanner.scan();
    assert!(scanner.has_token_flag(TokenFlags::ContainsLoneSurrogate));
    scanner.scan();
    assert!(!scanner.has_token_flag(TokenFlags::ContainsLoneSurrogate));
}

#[test]
fn test_invalid_character() {
    let kinds = scan_all("a # b");
    assert_eq!(
        kinds,
        vec![SyntaxKind::Identifier, SyntaxKind::Unknown, SyntaxKind::Identifier]
    );
}

#[test]
fn test_template_token_classification() {
    assert!(token_is_template_literal(SyntaxKind::NoSubstitutionTemplateLiteral));
    assert!(token_is_template_literal(SyntaxKind::TemplateMiddle));
    assert!(!token_is_template_literal(SyntaxKind::StringLiteral));
}
