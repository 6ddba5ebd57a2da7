use super::Printer;
use strjoin_parser::parser::NodeIndex;
use strjoin_parser::parser::node::Node;
use strjoin_parser::parser::syntax_kind_ext::OMITTED_EXPRESSION;
use strjoin_scanner::{SyntaxKind, keyword_to_text, punctuation_to_text};

impl<'a> Printer<'a> {
    // =========================================================================
    // Operators
    // =========================================================================

    pub(super) fn emit_binary_expression(&mut self, node: &Node) {
        let Some(bin) = self.arena.get_binary_expr(node) else {
            return;
        };
        self.emit_node(bin.left);
        self.write_space();
        self.write(punctuation_to_text(bin.operator_token).unwrap_or("?"));
        self.write_space();
        self.emit_node(bin.right);
    }

    pub(super) fn emit_prefix_unary_expression(&mut self, node: &Node) {
        let Some(unary) = self.arena.get_unary_expr(node) else {
            return;
        };
        if let Some(keyword) = keyword_to_text(unary.operator) {
            self.write(keyword);
            self.write_space();
        } else {
            self.write(punctuation_to_text(unary.operator).unwrap_or(""));
            // `- -x` must not turn into `--x`.
            if self.operand_starts_with_operator(unary.operand, unary.operator) {
                self.write_space();
            }
        }
        self.emit_node(unary.operand);
    }

    fn operand_starts_with_operator(&self, operand: NodeIndex, operator: SyntaxKind) -> bool {
        if !matches!(operator, SyntaxKind::PlusToken | SyntaxKind::MinusToken) {
            return false;
        }
        self.arena
            .get(operand)
            .and_then(|node| self.arena.get_unary_expr(node))
            .is_some_and(|inner| inner.operator == operator)
    }

    pub(super) fn emit_conditional_expression(&mut self, node: &Node) {
        let Some(cond) = self.arena.get_conditional_expr(node) else {
            return;
        };
        self.emit_node(cond.condition);
        self.write(" ? ");
        self.emit_node(cond.when_true);
        self.write(" : ");
        self.emit_node(cond.when_false);
    }

    pub(super) fn emit_parenthesized_expression(&mut self, node: &Node) {
        if let Some(paren) = self.arena.get_wrapped_expr(node) {
            self.write_char('(');
            self.emit_node(paren.expression);
            self.write_char(')');
        }
    }

    // =========================================================================
    // Calls and member access
    // =========================================================================

    pub(super) fn emit_call_expression(&mut self, node: &Node) {
        let Some(call) = self.arena.get_call_expr(node) else {
            return;
        };
        self.emit_node(call.expression);
        self.write_char('(');
        self.emit_comma_list(&call.arguments.nodes);
        self.write_char(')');
    }

    pub(super) fn emit_property_access(&mut self, node: &Node) {
        if let Some(access) = self.arena.get_access_expr(node) {
            self.emit_node(access.expression);
            self.write_char('.');
            self.emit_node(access.name_or_argument);
        }
    }

    pub(super) fn emit_element_access(&mut self, node: &Node) {
        if let Some(access) = self.arena.get_access_expr(node) {
            self.emit_node(access.expression);
            self.write_char('[');
            self.emit_node(access.name_or_argument);
            self.write_char(']');
        }
    }

    // =========================================================================
    // Arrays
    // =========================================================================

    /// Holes print as nothing; a trailing hole needs its own comma.
    pub(super) fn emit_array_literal(&mut self, node: &Node) {
        let Some(array) = self.arena.get_literal_expr(node) else {
            return;
        };
        self.write_char('[');
        self.emit_comma_list(&array.elements.nodes);
        if array
            .elements
            .last()
            .is_some_and(|last| self.arena.is_kind(last, OMITTED_EXPRESSION))
        {
            self.write_char(',');
        }
        self.write_char(']');
    }

    pub(super) fn emit_spread_element(&mut self, node: &Node) {
        if let Some(spread) = self.arena.get_wrapped_expr(node) {
            self.write("...");
            self.emit_node(spread.expression);
        }
    }

    fn emit_comma_list(&mut self, nodes: &[NodeIndex]) {
        for (i, &idx) in nodes.iter().enumerate() {
            if i > 0 {
                self.write_char(',');
                // A hole is followed directly by the next comma.
                if !self.arena.is_kind(idx, OMITTED_EXPRESSION) {
                    self.write_space();
                }
            }
            self.emit_node(idx);
        }
    }
}
