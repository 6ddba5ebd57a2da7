//! Node kinds that have no token counterpart.
//!
//! Literal and keyword nodes reuse their token kind (`SyntaxKind::StringLiteral
//! as u16`, `SyntaxKind::ThisKeyword as u16`, ...). Everything else uses the
//! constants below, which start after the last token kind.

use strjoin_scanner::SyntaxKind;

pub const SOURCE_FILE: u16 = 100;
pub const VARIABLE_STATEMENT: u16 = 101;
pub const VARIABLE_DECLARATION: u16 = 102;
pub const EXPRESSION_STATEMENT: u16 = 103;
pub const RETURN_STATEMENT: u16 = 104;
pub const BLOCK: u16 = 105;
pub const EMPTY_STATEMENT: u16 = 106;

pub const BINARY_EXPRESSION: u16 = 110;
pub const PREFIX_UNARY_EXPRESSION: u16 = 111;
pub const CALL_EXPRESSION: u16 = 112;
pub const PROPERTY_ACCESS_EXPRESSION: u16 = 113;
pub const ELEMENT_ACCESS_EXPRESSION: u16 = 114;
pub const CONDITIONAL_EXPRESSION: u16 = 115;
pub const PARENTHESIZED_EXPRESSION: u16 = 116;
pub const ARRAY_LITERAL_EXPRESSION: u16 = 117;
pub const SPREAD_ELEMENT: u16 = 118;
pub const OMITTED_EXPRESSION: u16 = 119;
pub const TEMPLATE_EXPRESSION: u16 = 120;
pub const TEMPLATE_ELEMENT: u16 = 121;
pub const TAGGED_TEMPLATE_EXPRESSION: u16 = 122;

/// Human-readable kind name for logs and error messages.
#[must_use]
pub fn kind_name(kind: u16) -> &'static str {
    match kind {
        SOURCE_FILE => "SourceFile",
        VARIABLE_STATEMENT => "VariableStatement",
        VARIABLE_DECLARATION => "VariableDeclaration",
        EXPRESSION_STATEMENT => "ExpressionStatement",
        RETURN_STATEMENT => "ReturnStatement",
        BLOCK => "Block",
        EMPTY_STATEMENT => "EmptyStatement",
        BINARY_EXPRESSION => "BinaryExpression",
        PREFIX_UNARY_EXPRESSION => "PrefixUnaryExpression",
        CALL_EXPRESSION => "CallExpression",
        PROPERTY_ACCESS_EXPRESSION => "PropertyAccessExpression",
        ELEMENT_ACCESS_EXPRESSION => "ElementAccessExpression",
        CONDITIONAL_EXPRESSION => "ConditionalExpression",
        PARENTHESIZED_EXPRESSION => "ParenthesizedExpression",
        ARRAY_LITERAL_EXPRESSION => "ArrayLiteralExpression",
        SPREAD_ELEMENT => "SpreadElement",
        OMITTED_EXPRESSION => "OmittedExpression",
        TEMPLATE_EXPRESSION => "TemplateExpression",
        TEMPLATE_ELEMENT => "TemplateElement",
        TAGGED_TEMPLATE_EXPRESSION => "TaggedTemplateExpression",
        k if k == SyntaxKind::StringLiteral as u16 => "StringLiteral",
        k if k == SyntaxKind::NumericLiteral as u16 => "NumericLiteral",
        k if k == SyntaxKind::Identifier as u16 => "Identifier",
        k if k == SyntaxKind::TrueKeyword as u16 => "TrueKeyword",
        k if k == SyntaxKind::FalseKeyword as u16 => "FalseKeyword",
        k if k == SyntaxKind::NullKeyword as u16 => "NullKeyword",
        k if k == SyntaxKind::ThisKeyword as u16 => "ThisKeyword",
        _ => "Unknown",
    }
}
