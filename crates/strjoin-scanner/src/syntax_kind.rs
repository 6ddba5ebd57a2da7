//! Token kinds produced by the scanner.
//!
//! Node kinds built by the parser live in `strjoin_parser::parser::syntax_kind_ext`
//! and start above the last token kind.

/// Token kind.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken = 1,

    // Literals
    NumericLiteral = 2,
    StringLiteral = 3,
    NoSubstitutionTemplateLiteral = 4,
    TemplateHead = 5,
    TemplateMiddle = 6,
    TemplateTail = 7,

    // Punctuation
    OpenBraceToken = 10,
    CloseBraceToken = 11,
    OpenParenToken = 12,
    CloseParenToken = 13,
    OpenBracketToken = 14,
    CloseBracketToken = 15,
    DotToken = 16,
    DotDotDotToken = 17,
    SemicolonToken = 18,
    CommaToken = 19,
    QuestionToken = 20,
    ColonToken = 21,
    LessThanToken = 22,
    GreaterThanToken = 23,
    LessThanEqualsToken = 24,
    GreaterThanEqualsToken = 25,
    EqualsEqualsToken = 26,
    ExclamationEqualsToken = 27,
    EqualsEqualsEqualsToken = 28,
    ExclamationEqualsEqualsToken = 29,
    PlusToken = 30,
    MinusToken = 31,
    AsteriskToken = 32,
    SlashToken = 33,
    PercentToken = 34,
    ExclamationToken = 35,
    AmpersandAmpersandToken = 36,
    BarBarToken = 37,
    EqualsToken = 38,

    // Names
    Identifier = 50,

    // Keywords
    ConstKeyword = 60,
    FalseKeyword = 61,
    LetKeyword = 62,
    NullKeyword = 63,
    ReturnKeyword = 64,
    ThisKeyword = 65,
    TrueKeyword = 66,
    TypeOfKeyword = 67,
    VarKeyword = 68,
}

impl SyntaxKind {
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::ConstKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::VarKeyword;
    /// Node kinds allocated by the parser start here.
    pub const LAST_TOKEN: u16 = 99;
}

const KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("const", SyntaxKind::ConstKeyword),
    ("false", SyntaxKind::FalseKeyword),
    ("let", SyntaxKind::LetKeyword),
    ("null", SyntaxKind::NullKeyword),
    ("return", SyntaxKind::ReturnKeyword),
    ("this", SyntaxKind::ThisKeyword),
    ("true", SyntaxKind::TrueKeyword),
    ("typeof", SyntaxKind::TypeOfKeyword),
    ("var", SyntaxKind::VarKeyword),
];

#[must_use]
pub fn token_is_keyword(kind: SyntaxKind) -> bool {
    kind >= SyntaxKind::FIRST_KEYWORD && kind <= SyntaxKind::LAST_KEYWORD
}

#[must_use]
pub fn token_is_template_literal(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead
            | SyntaxKind::TemplateMiddle
            | SyntaxKind::TemplateTail
    )
}

#[must_use]
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|&(_, kind)| kind)
}

#[must_use]
pub fn keyword_to_text(kind: SyntaxKind) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|&&(_, k)| k == kind)
        .map(|&(word, _)| word)
}

#[must_use]
pub fn punctuation_to_text(kind: SyntaxKind) -> Option<&'static str> {
    let text = match kind {
        SyntaxKind::OpenBraceToken => "{",
        SyntaxKind::CloseBraceToken => "}",
        SyntaxKind::OpenParenToken => "(",
        SyntaxKind::CloseParenToken => ")",
        SyntaxKind::OpenBracketToken => "[",
        SyntaxKind::CloseBracketToken => "]",
        SyntaxKind::DotToken => ".",
        SyntaxKind::DotDotDotToken => "...",
        SyntaxKind::SemicolonToken => ";",
        SyntaxKind::CommaToken => ",",
        SyntaxKind::QuestionToken => "?",
        SyntaxKind::ColonToken => ":",
        SyntaxKind::LessThanToken => "<",
        SyntaxKind::GreaterThanToken => ">",
        SyntaxKind::LessThanEqualsToken => "<=",
        SyntaxKind::GreaterThanEqualsToken => ">=",
        SyntaxKind::EqualsEqualsToken => "==",
        SyntaxKind::ExclamationEqualsToken => "!=",
        SyntaxKind::EqualsEqualsEqualsToken => "===",
        SyntaxKind::ExclamationEqualsEqualsToken => "!==",
        SyntaxKind::PlusToken => "+",
        SyntaxKind::MinusToken => "-",
        SyntaxKind::AsteriskToken => "*",
        SyntaxKind::SlashToken => "/",
        SyntaxKind::PercentToken => "%",
        SyntaxKind::ExclamationToken => "!",
        SyntaxKind::AmpersandAmpersandToken => "&&",
        SyntaxKind::BarBarToken => "||",
        SyntaxKind::EqualsToken => "=",
        _ => return None,
    };
    Some(text)
}

impl TryFrom<u16> for SyntaxKind {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        use SyntaxKind::*;
        const ALL: &[SyntaxKind] = &[
            Unknown,
            EndOfFileToken,
            NumericLiteral,
            StringLiteral,
            NoSubstitutionTemplateLiteral,
            TemplateHead,
            TemplateMiddle,
            TemplateTail,
            OpenBraceToken,
            CloseBraceToken,
            OpenParenToken,
            CloseParenToken,
            OpenBracketToken,
            CloseBracketToken,
            DotToken,
            DotDotDotToken,
            SemicolonToken,
            CommaToken,
            QuestionToken,
            ColonToken,
            LessThanToken,
            GreaterThanToken,
            LessThanEqualsToken,
            GreaterThanEqualsToken,
            EqualsEqualsToken,
            ExclamationEqualsToken,
            EqualsEqualsEqualsToken,
            ExclamationEqualsEqualsToken,
            PlusToken,
            MinusToken,
            AsteriskToken,
            SlashToken,
            PercentToken,
            ExclamationToken,
            AmpersandAmpersandToken,
            BarBarToken,
            EqualsToken,
            Identifier,
            ConstKeyword,
            FalseKeyword,
            LetKeyword,
            NullKeyword,
            ReturnKeyword,
            ThisKeyword,
            TrueKeyword,
            TypeOfKeyword,
            VarKeyword,
        ];
        ALL.iter()
            .copied()
            .find(|&kind| kind as u16 == value)
            .ok_or(value)
    }
}
