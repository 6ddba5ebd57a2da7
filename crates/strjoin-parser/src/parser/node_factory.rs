//! Synthesized node constructors.
//!
//! Transforms never edit parsed nodes. They build new ones here; every
//! constructor allocates a fresh header and fresh child lists, flagged
//! `SYNTHESIZED` with an empty source range.

use super::base::{NodeIndex, NodeList};
use super::node::*;
use super::syntax_kind_ext;
use strjoin_scanner::SyntaxKind;

impl NodeArena {
    fn mark_synthesized(&mut self, index: NodeIndex) -> NodeIndex {
        if let Some(node) = self.get_mut(index) {
            node.flags |= NodeFlags::SYNTHESIZED;
        }
        index
    }

    pub fn create_string_literal(&mut self, text: impl Into<String>) -> NodeIndex {
        let idx = self.add_literal(
            SyntaxKind::StringLiteral as u16,
            0,
            0,
            LiteralData { text: text.into() },
        );
        self.mark_synthesized(idx)
    }

    pub fn create_numeric_literal(&mut self, text: impl Into<String>) -> NodeIndex {
        let idx = self.add_literal(
            SyntaxKind::NumericLiteral as u16,
            0,
            0,
            LiteralData { text: text.into() },
        );
        self.mark_synthesized(idx)
    }

    pub fn create_identifier(&mut self, name: impl Into<String>) -> NodeIndex {
        let idx = self.add_identifier(
            SyntaxKind::Identifier as u16,
            0,
            0,
            IdentifierData {
                escaped_text: name.into(),
            },
        );
        self.mark_synthesized(idx)
    }

    pub fn create_template_element(&mut self, value: QuasiValue, tail: bool) -> NodeIndex {
        let idx = self.add_template_element(
            syntax_kind_ext::TEMPLATE_ELEMENT,
            0,
            0,
            TemplateElementData { value, tail },
        );
        self.mark_synthesized(idx)
    }

    /// Build a template literal from its quasis and substitutions.
    ///
    /// Returns `None` unless `quasis.len() == expressions.len() + 1`.
    pub fn create_template(
        &mut self,
        quasis: Vec<NodeIndex>,
        expressions: Vec<NodeIndex>,
    ) -> Option<NodeIndex> {
        if quasis.len() != expressions.len() + 1 {
            return None;
        }
        let idx = self.add_template(
            syntax_kind_ext::TEMPLATE_EXPRESSION,
            0,
            0,
            TemplateData {
                quasis: NodeList::from(quasis),
                expressions: NodeList::from(expressions),
            },
        );
        Some(self.mark_synthesized(idx))
    }

    pub fn create_binary(
        &mut self,
        left: NodeIndex,
        operator_token: SyntaxKind,
        right: NodeIndex,
    ) -> NodeIndex {
        let idx = self.add_binary_expr(
            syntax_kind_ext::BINARY_EXPRESSION,
            0,
            0,
            BinaryExprData {
                left,
                operator_token,
                right,
            },
        );
        self.mark_synthesized(idx)
    }

    pub fn create_property_access(&mut self, expression: NodeIndex, name: &str) -> NodeIndex {
        let name = self.create_identifier(name);
        let idx = self.add_access_expr(
            syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION,
            0,
            0,
            AccessExprData {
                expression,
                name_or_argument: name,
            },
        );
        self.mark_synthesized(idx)
    }

    pub fn create_call(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.add_call_expr(
            syntax_kind_ext::CALL_EXPRESSION,
            0,
            0,
            CallExprData {
                expression,
                arguments: NodeList::from(arguments),
            },
        );
        self.mark_synthesized(idx)
    }

    pub fn create_array_literal(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.add_literal_expr(
            syntax_kind_ext::ARRAY_LITERAL_EXPRESSION,
            0,
            0,
            LiteralExprData {
                elements: NodeList::from(elements),
            },
        );
        self.mark_synthesized(idx)
    }
}
