//! Expression parsing.
//!
//! Binary operators are parsed by precedence climbing; assignment and the
//! conditional operator sit above them and are right-associative. The comma
//! operator is not part of the supported subset.

use super::base::NodeIndex;
use super::node::*;
use super::state::ParserState;
use super::syntax_kind_ext::*;
use strjoin_common::diagnostics::diagnostic_messages;
use strjoin_scanner::{SyntaxKind, TokenFlags, token_is_keyword};

/// Binding power of a binary operator token; 0 for anything else.
pub(crate) fn binary_operator_precedence(kind: SyntaxKind) -> u8 {
    match kind {
        SyntaxKind::BarBarToken => 1,
        SyntaxKind::AmpersandAmpersandToken => 2,
        SyntaxKind::EqualsEqualsToken
        | SyntaxKind::ExclamationEqualsToken
        | SyntaxKind::EqualsEqualsEqualsToken
        | SyntaxKind::ExclamationEqualsEqualsToken => 3,
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken => 4,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => 5,
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => 6,
        _ => 0,
    }
}

impl ParserState {
    pub(crate) fn parse_expression(&mut self) -> NodeIndex {
        self.parse_assignment_expression()
    }

    pub(crate) fn parse_assignment_expression(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return self.create_missing_node();
        }
        let pos = self.token_pos();
        let left = self.parse_conditional_expression();
        let result = if self.is_token(SyntaxKind::EqualsToken) {
            self.next_token();
            let right = self.parse_assignment_expression();
            self.finish_binary(pos, left, SyntaxKind::EqualsToken, right)
        } else {
            left
        };
        self.exit_recursion();
        result
    }

    fn parse_conditional_expression(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let condition = self.parse_binary_expression(0);
        if !self.parse_optional(SyntaxKind::QuestionToken) {
            return condition;
        }
        let when_true = self.parse_assignment_expression();
        self.parse_expected(SyntaxKind::ColonToken);
        let when_false = self.parse_assignment_expression();
        let end = self.previous_token_end;
        self.arena.add_conditional_expr(
            CONDITIONAL_EXPRESSION,
            pos,
            end,
            ConditionalExprData {
                condition,
                when_true,
                when_false,
            },
        )
    }

    /// Parse operators binding tighter than `min_precedence`.
    fn parse_binary_expression(&mut self, min_precedence: u8) -> NodeIndex {
        let pos = self.token_pos();
        let mut left = self.parse_unary_expression();
        loop {
            let operator = self.token();
            let precedence = binary_operator_precedence(operator);
            if precedence == 0 || precedence <= min_precedence {
                break;
            }
            self.next_token();
            let right = self.parse_binary_expression(precedence);
            left = self.finish_binary(pos, left, operator, right);
        }
        left
    }

    fn finish_binary(
        &mut self,
        pos: u32,
        left: NodeIndex,
        operator_token: SyntaxKind,
        right: NodeIndex,
    ) -> NodeIndex {
        let end = self.previous_token_end;
        self.arena.add_binary_expr(
            BINARY_EXPRESSION,
            pos,
            end,
            BinaryExprData {
                left,
                operator_token,
                right,
            },
        )
    }

    fn parse_unary_expression(&mut self) -> NodeIndex {
        let operator = self.token();
        if !matches!(
            operator,
            SyntaxKind::ExclamationToken
                | SyntaxKind::MinusToken
                | SyntaxKind::PlusToken
                | SyntaxKind::TypeOfKeyword
        ) {
            return self.parse_left_hand_side_expression();
        }
        if !self.enter_recursion() {
            return self.create_missing_node();
        }
        let pos = self.token_pos();
        self.next_token();
        let operand = self.parse_unary_expression();
        let end = self.previous_token_end;
        self.exit_recursion();
        self.arena.add_unary_expr(
            PREFIX_UNARY_EXPRESSION,
            pos,
            end,
            UnaryExprData { operator, operand },
        )
    }

    /// Primary expression followed by any number of `.name`, `[index]`,
    /// `(args)` or template suffixes.
    fn parse_left_hand_side_expression(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let mut expression = self.parse_primary_expression();
        loop {
            match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token();
                    let name = self.parse_property_name();
                    let end = self.previous_token_end;
                    expression = self.arena.add_access_expr(
                        PROPERTY_ACCESS_EXPRESSION,
                        pos,
                        end,
                        AccessExprData {
                            expression,
                            name_or_argument: name,
                        },
                    );
                }
                SyntaxKind::OpenBracketToken => {
                    self.next_token();
                    let argument = self.parse_expression();
                    self.parse_expected(SyntaxKind::CloseBracketToken);
                    let end = self.previous_token_end;
                    expression = self.arena.add_access_expr(
                        ELEMENT_ACCESS_EXPRESSION,
                        pos,
                        end,
                        AccessExprData {
                            expression,
                            name_or_argument: argument,
                        },
                    );
                }
                SyntaxKind::OpenParenToken => {
                    let arguments = self.parse_arguments();
                    let end = self.previous_token_end;
                    expression = self.arena.add_call_expr(
                        CALL_EXPRESSION,
                        pos,
                        end,
                        CallExprData {
                            expression,
                            arguments: arguments.into(),
                        },
                    );
                }
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                    let template = self.parse_template_literal();
                    let end = self.previous_token_end;
                    expression = self.arena.add_tagged_template(
                        TAGGED_TEMPLATE_EXPRESSION,
                        pos,
                        end,
                        TaggedTemplateData {
                            tag: expression,
                            template,
                        },
                    );
                }
                _ => break,
            }
        }
        expression
    }

    /// Identifier after `.`; keywords are valid property names.
    fn parse_property_name(&mut self) -> NodeIndex {
        let kind = self.token();
        if kind == SyntaxKind::Identifier || token_is_keyword(kind) {
            return self.parse_identifier_token();
        }
        self.error_at_current_token(&diagnostic_messages::IDENTIFIER_EXPECTED, &[]);
        self.create_missing_node()
    }

    /// Consume the current token as an identifier node.
    pub(crate) fn parse_identifier_token(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let end = self.token_end();
        let escaped_text = self.scanner.token_value().to_string();
        self.next_token();
        self.arena.add_identifier(
            SyntaxKind::Identifier as u16,
            pos,
            end,
            IdentifierData { escaped_text },
        )
    }

    fn parse_arguments(&mut self) -> Vec<NodeIndex> {
        let mut arguments = Vec::new();
        self.parse_expected(SyntaxKind::OpenParenToken);
        while !self.is_token(SyntaxKind::CloseParenToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let argument = if self.is_token(SyntaxKind::DotDotDotToken) {
                self.parse_spread_element()
            } else {
                self.parse_assignment_expression()
            };
            arguments.push(argument);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseParenToken);
        arguments
    }

    fn parse_spread_element(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        let expression = self.parse_assignment_expression();
        let end = self.previous_token_end;
        self.arena
            .add_wrapped_expr(SPREAD_ELEMENT, pos, end, WrappedExprData { expression })
    }

    fn parse_primary_expression(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let end = self.token_end();
        match self.token() {
            SyntaxKind::Identifier => self.parse_identifier_token(),
            SyntaxKind::NumericLiteral | SyntaxKind::StringLiteral => {
                let kind = self.token() as u16;
                let text = self.scanner.token_value().to_string();
                let lone_surrogate = self.scanner.has_token_flag(TokenFlags::ContainsLoneSurrogate);
                self.next_token();
                let idx = self.arena.add_literal(kind, pos, end, LiteralData { text });
                if lone_surrogate && let Some(node) = self.arena.get_mut(idx) {
                    node.flags |= NodeFlags::LONE_SURROGATE;
                }
                idx
            }
            SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::ThisKeyword => {
                let kind = self.token() as u16;
                self.next_token();
                self.arena.add_token(kind, pos, end)
            }
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let expression = self.parse_expression();
                self.parse_expected(SyntaxKind::CloseParenToken);
                let end = self.previous_token_end;
                self.arena.add_wrapped_expr(
                    PARENTHESIZED_EXPRESSION,
                    pos,
                    end,
                    WrappedExprData { expression },
                )
            }
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                self.parse_template_literal()
            }
            _ => {
                self.error_at_current_token(&diagnostic_messages::EXPRESSION_EXPECTED, &[]);
                self.create_missing_node()
            }
        }
    }

    /// `[a, , ...b]`: holes become `OMITTED_EXPRESSION` nodes; a single
    /// trailing comma does not add a hole.
    fn parse_array_literal(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        self.next_token();
        let mut elements = Vec::new();
        loop {
            match self.token() {
                SyntaxKind::CloseBracketToken | SyntaxKind::EndOfFileToken => break,
                SyntaxKind::CommaToken => {
                    let hole_pos = self.token_pos();
                    elements.push(self.arena.add_token(OMITTED_EXPRESSION, hole_pos, hole_pos));
                    self.next_token();
                    continue;
                }
                SyntaxKind::DotDotDotToken => elements.push(self.parse_spread_element()),
                _ => elements.push(self.parse_assignment_expression()),
            }
            if self.is_token(SyntaxKind::CloseBracketToken) {
                break;
            }
            if !self.parse_expected(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken);
        let end = self.previous_token_end;
        self.arena.add_literal_expr(
            ARRAY_LITERAL_EXPRESSION,
            pos,
            end,
            LiteralExprData {
                elements: elements.into(),
            },
        )
    }

    /// Template literal starting at a `NoSubstitutionTemplateLiteral` or
    /// `TemplateHead` token.
    ///
    /// Both forms produce a `TEMPLATE_EXPRESSION`; a literal without
    /// substitutions has a single tail quasi.
    pub(crate) fn parse_template_literal(&mut self) -> NodeIndex {
        let pos = self.token_pos();
        let mut quasis = Vec::new();
        let mut expressions = Vec::new();

        let head_is_tail = self.is_token(SyntaxKind::NoSubstitutionTemplateLiteral);
        quasis.push(self.template_element_from_token(head_is_tail));
        self.next_token();

        if !head_is_tail {
            loop {
                expressions.push(self.parse_expression());
                if !self.is_token(SyntaxKind::CloseBraceToken) {
                    self.parse_expected(SyntaxKind::CloseBraceToken);
                    // Keep quasis one longer than substitutions.
                    let missing_pos = self.token_pos();
                    let tail = self.arena.add_template_element(
                        TEMPLATE_ELEMENT,
                        missing_pos,
                        missing_pos,
                        TemplateElementData {
                            value: QuasiValue::Plain(String::new()),
                            tail: true,
                        },
                    );
                    if let Some(node) = self.arena.get_mut(tail) {
                        node.flags |= NodeFlags::MISSING;
                    }
                    quasis.push(tail);
                    break;
                }
                let is_tail = self.re_scan_template_token() == SyntaxKind::TemplateTail;
                quasis.push(self.template_element_from_token(is_tail));
                self.next_token();
                if is_tail {
                    break;
                }
            }
        }

        let end = self.previous_token_end;
        self.arena.add_template(
            TEMPLATE_EXPRESSION,
            pos,
            end,
            TemplateData {
                quasis: quasis.into(),
                expressions: expressions.into(),
            },
        )
    }

    fn template_element_from_token(&mut self, tail: bool) -> NodeIndex {
        let pos = self.token_pos();
        let end = self.token_end();
        let value = QuasiValue::Cooked {
            raw: self.scanner.token_raw().to_string(),
            cooked: self.scanner.token_value().to_string(),
        };
        let idx = self
            .arena
            .add_template_element(TEMPLATE_ELEMENT, pos, end, TemplateElementData { value, tail });
        if self.scanner.has_token_flag(TokenFlags::ContainsLoneSurrogate)
            && let Some(node) = self.arena.get_mut(idx)
        {
            node.flags |= NodeFlags::LONE_SURROGATE;
        }
        idx
    }
}
