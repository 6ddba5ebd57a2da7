//! Source file and statement parsing.

use super::base::NodeIndex;
use super::node::*;
use super::state::{ParserState, u32_from_usize};
use super::syntax_kind_ext::*;
use strjoin_common::diagnostics::diagnostic_messages;
use strjoin_scanner::SyntaxKind;
use tracing::debug;

impl ParserState {
    /// Parse the whole input and return the `SOURCE_FILE` node.
    pub fn parse_source_file(&mut self) -> NodeIndex {
        self.next_token();
        let statements = self.parse_statement_list(false);
        self.collect_scanner_diagnostics();
        let comments = self.scanner.take_comments();

        let end = u32_from_usize(self.scanner.source_text().len());
        let root = self.arena.add_source_file(
            0,
            end,
            SourceFileData {
                file_name: self.file_name.clone(),
                statements: statements.into(),
                comments,
            },
        );
        debug!(
            file = %self.file_name,
            nodes = self.arena.len(),
            diagnostics = self.parse_diagnostics.len(),
            "parsed source file"
        );
        root
    }

    /// Statements up to end of file, or up to `}` inside a block.
    fn parse_statement_list(&mut self, in_block: bool) -> Vec<NodeIndex> {
        let mut statements = Vec::new();
        loop {
            if self.is_token(SyntaxKind::EndOfFileToken)
                || (in_block && self.is_token(SyntaxKind::CloseBraceToken))
            {
                break;
            }
            let start = self.token_pos();
            let statement = self.parse_statement();
            statements.push(statement);

            // Always make progress, even on input no rule accepts.
            if self.token_pos() == start && !self.is_token(SyntaxKind::EndOfFileToken) {
                self.error_at_current_token(
                    &diagnostic_messages::DECLARATION_OR_STATEMENT_EXPECTED,
                    &[],
                );
                self.next_token();
            }
        }
        statements
    }

    fn parse_statement(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::OpenBraceToken => self.parse_block(),
            SyntaxKind::SemicolonToken => {
                let pos = self.token_pos();
                let end = self.token_end();
                self.next_token();
                self.arena.add_token(EMPTY_STATEMENT, pos, end)
            }
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => {
                self.parse_variable_statement()
            }
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_block(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        if !self.enter_recursion() {
            return self.create_missing_node();
        }
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let statements = self.parse_statement_list(true);
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.exit_recursion();
        let end = self.previous_token_end;
        self.arena.add_block(
            BLOCK,
            pos,
            end,
            BlockData {
                statements: statements.into(),
            },
        )
    }

    fn parse_variable_statement(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let keyword = self.token();
        self.next_token();

        let mut declarations = Vec::new();
        loop {
            let decl_pos = self.token_pos();
            let name = if self.is_token(SyntaxKind::Identifier) {
                self.parse_identifier_token()
            } else {
                self.error_at_current_token(&diagnostic_messages::IDENTIFIER_EXPECTED, &[]);
                self.create_missing_node()
            };
            let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                self.parse_assignment_expression()
            } else {
                NodeIndex::NONE
            };
            let decl_end = self.previous_token_end;
            declarations.push(self.arena.add_variable_declaration(
                VARIABLE_DECLARATION,
                decl_pos,
                decl_end,
                VariableDeclarationData { name, initializer },
            ));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_semicolon();

        let end = self.previous_token_end;
        self.arena.add_variable(
            VARIABLE_STATEMENT,
            pos,
            end,
            VariableData {
                keyword,
                declarations: declarations.into(),
            },
        )
    }

    fn parse_return_statement(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        let expression = if self.can_parse_semicolon() {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.parse_semicolon();
        let end = self.previous_token_end;
        self.arena
            .add_wrapped_expr(RETURN_STATEMENT, pos, end, WrappedExprData { expression })
    }

    fn parse_expression_statement(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let expression = self.parse_expression();
        self.parse_semicolon();
        let end = self.previous_token_end;
        self.arena.add_wrapped_expr(
            EXPRESSION_STATEMENT,
            pos,
            end,
            WrappedExprData { expression },
        )
    }
}
