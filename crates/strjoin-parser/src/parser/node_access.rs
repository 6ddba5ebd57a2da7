//! NodeArena access methods.
//!
//! Each `get_*` accessor checks the node kind before indexing its data pool,
//! so a header that was rebound by `replace` is always read through the pool
//! matching its current kind.

use super::base::NodeIndex;
use super::node::*;
use super::syntax_kind_ext::*;
use strjoin_scanner::SyntaxKind;

impl NodeArena {
    /// Get a node header by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable node header by index
    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn kind_of(&self, index: NodeIndex) -> Option<u16> {
        self.get(index).map(|node| node.kind)
    }

    #[inline]
    pub fn is_kind(&self, index: NodeIndex, kind: u16) -> bool {
        self.kind_of(index) == Some(kind)
    }

    #[inline]
    pub fn is_string_literal(&self, index: NodeIndex) -> bool {
        self.is_kind(index, SyntaxKind::StringLiteral as u16)
    }

    #[inline]
    pub fn is_template(&self, index: NodeIndex) -> bool {
        self.is_kind(index, TEMPLATE_EXPRESSION)
    }

    /// Get identifier data for a node.
    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind == SyntaxKind::Identifier as u16 {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get literal data for a string or numeric literal node.
    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if node.has_data()
            && (node.kind == SyntaxKind::StringLiteral as u16
                || node.kind == SyntaxKind::NumericLiteral as u16)
        {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_template(&self, node: &Node) -> Option<&TemplateData> {
        if node.has_data() && node.kind == TEMPLATE_EXPRESSION {
            self.templates.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_template_element(&self, node: &Node) -> Option<&TemplateElementData> {
        if node.has_data() && node.kind == TEMPLATE_ELEMENT {
            self.template_elements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_tagged_template(&self, node: &Node) -> Option<&TaggedTemplateData> {
        if node.has_data() && node.kind == TAGGED_TEMPLATE_EXPRESSION {
            self.tagged_templates.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_binary_expr(&self, node: &Node) -> Option<&BinaryExprData> {
        if node.has_data() && node.kind == BINARY_EXPRESSION {
            self.binary_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_unary_expr(&self, node: &Node) -> Option<&UnaryExprData> {
        if node.has_data() && node.kind == PREFIX_UNARY_EXPRESSION {
            self.unary_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_call_expr(&self, node: &Node) -> Option<&CallExprData> {
        if node.has_data() && node.kind == CALL_EXPRESSION {
            self.call_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get access expression data (property access or element access).
    #[inline]
    pub fn get_access_expr(&self, node: &Node) -> Option<&AccessExprData> {
        if node.has_data()
            && (node.kind == PROPERTY_ACCESS_EXPRESSION || node.kind == ELEMENT_ACCESS_EXPRESSION)
        {
            self.access_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_conditional_expr(&self, node: &Node) -> Option<&ConditionalExprData> {
        if node.has_data() && node.kind == CONDITIONAL_EXPRESSION {
            self.conditional_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get array literal data.
    #[inline]
    pub fn get_literal_expr(&self, node: &Node) -> Option<&LiteralExprData> {
        if node.has_data() && node.kind == ARRAY_LITERAL_EXPRESSION {
            self.literal_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get the single-expression payload of a parenthesized expression,
    /// spread element, expression statement or return statement.
    #[inline]
    pub fn get_wrapped_expr(&self, node: &Node) -> Option<&WrappedExprData> {
        if node.has_data()
            && matches!(
                node.kind,
                PARENTHESIZED_EXPRESSION | SPREAD_ELEMENT | EXPRESSION_STATEMENT | RETURN_STATEMENT
            )
        {
            self.wrapped_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable(&self, node: &Node) -> Option<&VariableData> {
        if node.has_data() && node.kind == VARIABLE_STATEMENT {
            self.variables.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable_declaration(&self, node: &Node) -> Option<&VariableDeclarationData> {
        if node.has_data() && node.kind == VARIABLE_DECLARATION {
            self.variable_declarations.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_block(&self, node: &Node) -> Option<&BlockData> {
        if node.has_data() && node.kind == BLOCK {
            self.blocks.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_source_file(&self, node: &Node) -> Option<&SourceFileData> {
        if node.has_data() && node.kind == SOURCE_FILE {
            self.source_files.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_source_file_at(&self, index: NodeIndex) -> Option<&SourceFileData> {
        self.get(index).and_then(|node| self.get_source_file(node))
    }

    pub fn get_template_at(&self, index: NodeIndex) -> Option<&TemplateData> {
        self.get(index).and_then(|node| self.get_template(node))
    }

    pub fn get_template_element_at(&self, index: NodeIndex) -> Option<&TemplateElementData> {
        self.get(index)
            .and_then(|node| self.get_template_element(node))
    }

    /// Cooked text of a string literal node.
    pub fn string_literal_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        if node.kind != SyntaxKind::StringLiteral as u16 {
            return None;
        }
        self.get_literal(node).map(|lit| lit.text.as_str())
    }

    /// Identifier text of a node, if it is an identifier.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node)
            .map(|ident| ident.escaped_text.as_str())
    }

    /// Direct children in source order.
    ///
    /// Template quasis are included (interleaved with the substitutions),
    /// so a walk over children sees the same order the printer emits.
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(index) else {
            return Vec::new();
        };
        match node.kind {
            SOURCE_FILE => self
                .get_source_file(node)
                .map(|sf| sf.statements.nodes.clone())
                .unwrap_or_default(),
            BLOCK => self
                .get_block(node)
                .map(|block| block.statements.nodes.clone())
                .unwrap_or_default(),
            VARIABLE_STATEMENT => self
                .get_variable(node)
                .map(|var| var.declarations.nodes.clone())
                .unwrap_or_default(),
            VARIABLE_DECLARATION => self
                .get_variable_declaration(node)
                .map(|decl| non_none(&[decl.name, decl.initializer]))
                .unwrap_or_default(),
            PARENTHESIZED_EXPRESSION | SPREAD_ELEMENT | EXPRESSION_STATEMENT | RETURN_STATEMENT => {
                self.get_wrapped_expr(node)
                    .map(|wrapped| non_none(&[wrapped.expression]))
                    .unwrap_or_default()
            }
            BINARY_EXPRESSION => self
                .get_binary_expr(node)
                .map(|bin| vec![bin.left, bin.right])
                .unwrap_or_default(),
            PREFIX_UNARY_EXPRESSION => self
                .get_unary_expr(node)
                .map(|unary| vec![unary.operand])
                .unwrap_or_default(),
            CALL_EXPRESSION => self
                .get_call_expr(node)
                .map(|call| {
                    let mut children = Vec::with_capacity(call.arguments.len() + 1);
                    children.push(call.expression);
                    children.extend(call.arguments.iter());
                    children
                })
                .unwrap_or_default(),
            PROPERTY_ACCESS_EXPRESSION | ELEMENT_ACCESS_EXPRESSION => self
                .get_access_expr(node)
                .map(|access| vec![access.expression, access.name_or_argument])
                .unwrap_or_default(),
            CONDITIONAL_EXPRESSION => self
                .get_conditional_expr(node)
                .map(|cond| vec![cond.condition, cond.when_true, cond.when_false])
                .unwrap_or_default(),
            ARRAY_LITERAL_EXPRESSION => self
                .get_literal_expr(node)
                .map(|array| array.elements.nodes.clone())
                .unwrap_or_default(),
            TEMPLATE_EXPRESSION => self
                .get_template(node)
                .map(|template| {
                    let mut children = Vec::with_capacity(
                        template.quasis.len() + template.expressions.len(),
                    );
                    for (i, quasi) in template.quasis.iter().enumerate() {
                        children.push(quasi);
                        if let Some(expr) = template.expressions.nodes.get(i) {
                            children.push(*expr);
                        }
                    }
                    children
                })
                .unwrap_or_default(),
            TAGGED_TEMPLATE_EXPRESSION => self
                .get_tagged_template(node)
                .map(|tagged| vec![tagged.tag, tagged.template])
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

fn non_none(indices: &[NodeIndex]) -> Vec<NodeIndex> {
    indices.iter().copied().filter(|idx| idx.is_some()).collect()
}
