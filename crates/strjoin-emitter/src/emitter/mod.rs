//! AST to JavaScript printer.
//!
//! Output layout is normalized: one statement per line, four-space block
//! indentation, single spaces around binary operators. Parentheses are
//! printed exactly where the tree has `ParenthesizedExpression` nodes.
//!
//! Source-backed nodes can be copied from the original text: string literals
//! that no transform touched keep their original quotes and escapes, and
//! subtrees nested deeper than `MAX_AST_DEPTH` are copied verbatim. With the
//! source text attached, comments are written back around statements.

mod comments;
mod expressions;
mod helpers;
mod literals;
mod statements;

use strjoin_common::limits::MAX_AST_DEPTH;
use strjoin_common::{CommentRange, Span};
use strjoin_parser::parser::node::{Node, NodeArena, NodeFlags};
use strjoin_parser::parser::syntax_kind_ext::*;
use strjoin_parser::parser::NodeIndex;
use strjoin_scanner::SyntaxKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Quote synthesized string literals with `'` instead of `"`.
    pub single_quote: bool,
}

pub struct Printer<'a> {
    arena: &'a NodeArena,
    source_text: Option<&'a str>,
    options: PrinterOptions,
    output: String,
    indent_level: u32,
    indent_str: &'static str,
    depth: u32,
    /// Emitting the leading string-literal statements of a source file.
    in_directive_prologue: bool,
    comments: &'a [CommentRange],
    comment_emit_idx: usize,
    /// Source ranges written verbatim; their comments are already out.
    copied_spans: Vec<Span>,
}

impl<'a> Printer<'a> {
    pub fn new(arena: &'a NodeArena, options: PrinterOptions) -> Self {
        Printer {
            arena,
            source_text: None,
            options,
            output: String::new(),
            indent_level: 0,
            indent_str: "    ",
            depth: 0,
            in_directive_prologue: false,
            comments: &[],
            comment_emit_idx: 0,
            copied_spans: Vec::new(),
        }
    }

    /// Attach the text the arena was parsed from.
    pub fn with_source_text(mut self, text: &'a str) -> Self {
        self.source_text = Some(text);
        self
    }

    pub fn emit(&mut self, idx: NodeIndex) {
        self.emit_node(idx);
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    pub fn take_output(self) -> String {
        self.output
    }

    pub(super) fn emit_node(&mut self, idx: NodeIndex) {
        let Some(node) = self.arena.get(idx) else {
            return;
        };
        if self.depth >= MAX_AST_DEPTH && self.write_source_range(node) {
            return;
        }
        self.depth += 1;
        self.emit_node_by_kind(node, idx);
        self.depth -= 1;
    }

    fn emit_node_by_kind(&mut self, node: &Node, idx: NodeIndex) {
        match node.kind {
            SOURCE_FILE => self.emit_source_file(node),
            VARIABLE_STATEMENT => self.emit_variable_statement(node),
            VARIABLE_DECLARATION => self.emit_variable_declaration(node),
            EXPRESSION_STATEMENT => self.emit_expression_statement(node),
            RETURN_STATEMENT => self.emit_return_statement(node),
            BLOCK => self.emit_block(node),
            EMPTY_STATEMENT => self.write(";"),

            BINARY_EXPRESSION => self.emit_binary_expression(node),
            PREFIX_UNARY_EXPRESSION => self.emit_prefix_unary_expression(node),
            CALL_EXPRESSION => self.emit_call_expression(node),
            PROPERTY_ACCESS_EXPRESSION => self.emit_property_access(node),
            ELEMENT_ACCESS_EXPRESSION => self.emit_element_access(node),
            CONDITIONAL_EXPRESSION => self.emit_conditional_expression(node),
            PARENTHESIZED_EXPRESSION => self.emit_parenthesized_expression(node),
            ARRAY_LITERAL_EXPRESSION => self.emit_array_literal(node),
            SPREAD_ELEMENT => self.emit_spread_element(node),
            OMITTED_EXPRESSION => {}
            TEMPLATE_EXPRESSION => self.emit_template_expression(node),
            TEMPLATE_ELEMENT => self.emit_template_element(node),
            TAGGED_TEMPLATE_EXPRESSION => self.emit_tagged_template(node),

            k if k == SyntaxKind::Identifier as u16 => self.emit_identifier(node),
            k if k == SyntaxKind::StringLiteral as u16 => self.emit_string_literal(node),
            k if k == SyntaxKind::NumericLiteral as u16 => self.emit_numeric_literal(node),
            k if k == SyntaxKind::TrueKeyword as u16 => self.write("true"),
            k if k == SyntaxKind::FalseKeyword as u16 => self.write("false"),
            k if k == SyntaxKind::NullKeyword as u16 => self.write("null"),
            k if k == SyntaxKind::ThisKeyword as u16 => self.write("this"),
            _ => {
                tracing::trace!(node = idx.0, kind = node.kind, "no printer for node kind");
            }
        }
    }

    /// Whether `node` still stands for exactly its source range.
    pub(super) fn is_source_backed(node: &Node) -> bool {
        !node
            .flags
            .intersects(NodeFlags::SYNTHESIZED | NodeFlags::REPLACED | NodeFlags::MISSING)
    }
}

#[cfg(test)]
#[path = "../../tests/printer.rs"]
mod tests;
