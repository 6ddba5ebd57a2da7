use super::Printer;
use strjoin_parser::parser::NodeIndex;
use strjoin_parser::parser::node::{Node, NodeFlags};
use strjoin_parser::parser::syntax_kind_ext::EXPRESSION_STATEMENT;
use strjoin_scanner::keyword_to_text;

impl<'a> Printer<'a> {
    // =========================================================================
    // Source file and blocks
    // =========================================================================

    pub(super) fn emit_source_file(&mut self, node: &Node) {
        let arena = self.arena;
        let Some(sf) = arena.get_source_file(node) else {
            return;
        };
        if self.source_text.is_some() {
            self.comments = &sf.comments;
            self.comment_emit_idx = 0;
        }
        self.in_directive_prologue = true;
        for &stmt in &sf.statements.nodes {
            if self.in_directive_prologue && !self.is_string_statement(stmt) {
                self.in_directive_prologue = false;
            }
            self.emit_statement_line(stmt);
        }
        self.in_directive_prologue = false;
        self.emit_leading_comments(u32::MAX);
    }

    pub(super) fn emit_block(&mut self, node: &Node) {
        let Some(block) = self.arena.get_block(node) else {
            return;
        };
        if block.statements.is_empty() {
            self.write("{}");
            return;
        }
        self.write_char('{');
        self.write_line();
        self.increase_indent();
        self.emit_statement_lines(&block.statements.nodes);
        self.emit_leading_comments(node.end);
        self.decrease_indent();
        self.write_indent();
        self.write_char('}');
    }

    fn emit_statement_lines(&mut self, statements: &[NodeIndex]) {
        for &stmt in statements {
            self.emit_statement_line(stmt);
        }
    }

    /// One statement on its own line, with the comments around it.
    fn emit_statement_line(&mut self, stmt: NodeIndex) {
        let span = self
            .arena
            .get(stmt)
            .filter(|node| Self::is_source_backed(node))
            .map(|node| node.span());
        if let Some(span) = span {
            self.emit_leading_comments(span.start);
        }
        self.write_indent();
        self.emit_node(stmt);
        if let Some(span) = span {
            self.emit_trailing_comments(span.end);
        }
        self.write_line();
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub(super) fn emit_variable_statement(&mut self, node: &Node) {
        let Some(var) = self.arena.get_variable(node) else {
            return;
        };
        self.write(keyword_to_text(var.keyword).unwrap_or("var"));
        self.write_space();
        for (i, decl) in var.declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_node(decl);
        }
        self.write_char(';');
    }

    pub(super) fn emit_variable_declaration(&mut self, node: &Node) {
        let Some(decl) = self.arena.get_variable_declaration(node) else {
            return;
        };
        self.emit_node(decl.name);
        if decl.initializer.is_some() {
            self.write(" = ");
            self.emit_node(decl.initializer);
        }
    }

    pub(super) fn emit_expression_statement(&mut self, node: &Node) {
        let Some(stmt) = self.arena.get_wrapped_expr(node) else {
            return;
        };
        // A folded string in the directive prologue must not turn into a
        // directive such as "use strict".
        let needs_parens = self.in_directive_prologue
            && self
                .arena
                .get(stmt.expression)
                .is_some_and(|expr| expr.flags.contains(NodeFlags::REPLACED));
        if needs_parens {
            self.write_char('(');
            self.emit_node(stmt.expression);
            self.write_char(')');
        } else {
            self.emit_node(stmt.expression);
        }
        self.write_char(';');
    }

    /// An expression statement whose expression is a string literal.
    fn is_string_statement(&self, stmt: NodeIndex) -> bool {
        self.arena
            .get(stmt)
            .filter(|node| node.kind == EXPRESSION_STATEMENT)
            .and_then(|node| self.arena.get_wrapped_expr(node))
            .is_some_and(|wrapped| self.arena.is_string_literal(wrapped.expression))
    }

    pub(super) fn emit_return_statement(&mut self, node: &Node) {
        let Some(ret) = self.arena.get_wrapped_expr(node) else {
            return;
        };
        self.write("return");
        if ret.expression.is_some() {
            self.write_space();
            self.emit_node(ret.expression);
        }
        self.write_char(';');
    }
}
