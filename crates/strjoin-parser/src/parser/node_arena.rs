//! NodeArena creation methods (add_* methods) and slot replacement.

use super::base::NodeIndex;
use super::node::*;

macro_rules! push_node {
    ($arena:expr, $pool:ident, $kind:expr, $pos:expr, $end:expr, $data:expr) => {{
        let data_index = $arena.$pool.len() as u32;
        $arena.$pool.push($data);
        $arena.push_header(Node::with_data($kind, $pos, $end, data_index))
    }};
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Number of node headers, including orphaned ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    fn push_header(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeIndex(index)
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add a node without payload (`true`, `null`, `this`, holes, `;`).
    pub fn add_token(&mut self, kind: u16, pos: u32, end: u32) -> NodeIndex {
        self.push_header(Node::new(kind, pos, end))
    }

    pub fn add_identifier(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: IdentifierData,
    ) -> NodeIndex {
        push_node!(self, identifiers, kind, pos, end, data)
    }

    pub fn add_literal(&mut self, kind: u16, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        push_node!(self, literals, kind, pos, end, data)
    }

    pub fn add_template(&mut self, kind: u16, pos: u32, end: u32, data: TemplateData) -> NodeIndex {
        debug_assert_eq!(data.quasis.len(), data.expressions.len() + 1);
        push_node!(self, templates, kind, pos, end, data)
    }

    pub fn add_template_element(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: TemplateElementData,
    ) -> NodeIndex {
        push_node!(self, template_elements, kind, pos, end, data)
    }

    pub fn add_tagged_template(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: TaggedTemplateData,
    ) -> NodeIndex {
        push_node!(self, tagged_templates, kind, pos, end, data)
    }

    pub fn add_binary_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: BinaryExprData,
    ) -> NodeIndex {
        push_node!(self, binary_exprs, kind, pos, end, data)
    }

    pub fn add_unary_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: UnaryExprData,
    ) -> NodeIndex {
        push_node!(self, unary_exprs, kind, pos, end, data)
    }

    pub fn add_call_expr(&mut self, kind: u16, pos: u32, end: u32, data: CallExprData) -> NodeIndex {
        push_node!(self, call_exprs, kind, pos, end, data)
    }

    /// Add a property/element access expression node
    pub fn add_access_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: AccessExprData,
    ) -> NodeIndex {
        push_node!(self, access_exprs, kind, pos, end, data)
    }

    /// Add a conditional expression node (a ? b : c)
    pub fn add_conditional_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: ConditionalExprData,
    ) -> NodeIndex {
        push_node!(self, conditional_exprs, kind, pos, end, data)
    }

    /// Add an array literal expression node
    pub fn add_literal_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: LiteralExprData,
    ) -> NodeIndex {
        push_node!(self, literal_exprs, kind, pos, end, data)
    }

    /// Add a parenthesized expression, spread element, expression statement
    /// or return statement.
    pub fn add_wrapped_expr(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: WrappedExprData,
    ) -> NodeIndex {
        push_node!(self, wrapped_exprs, kind, pos, end, data)
    }

    pub fn add_variable(&mut self, kind: u16, pos: u32, end: u32, data: VariableData) -> NodeIndex {
        push_node!(self, variables, kind, pos, end, data)
    }

    pub fn add_variable_declaration(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: VariableDeclarationData,
    ) -> NodeIndex {
        push_node!(self, variable_declarations, kind, pos, end, data)
    }

    pub fn add_block(&mut self, kind: u16, pos: u32, end: u32, data: BlockData) -> NodeIndex {
        push_node!(self, blocks, kind, pos, end, data)
    }

    pub fn add_source_file(&mut self, pos: u32, end: u32, data: SourceFileData) -> NodeIndex {
        push_node!(
            self,
            source_files,
            super::syntax_kind_ext::SOURCE_FILE,
            pos,
            end,
            data
        )
    }

    // ============================================================================
    // Replacement
    // ============================================================================

    /// Rebind `slot` to the node at `replacement`.
    ///
    /// Every parent that refers to `slot` now sees the replacement's kind and
    /// payload. The slot keeps its source range so diagnostics still point at
    /// the original text. The payload previously bound to `slot` becomes
    /// unreachable; it is never edited.
    ///
    /// Returns `false` when either index is out of range.
    pub fn replace(&mut self, slot: NodeIndex, replacement: NodeIndex) -> bool {
        if slot == replacement {
            return true;
        }
        let Some(&new_node) = self.get(replacement) else {
            return false;
        };
        let Some(old_node) = self.get_mut(slot) else {
            return false;
        };
        *old_node = Node {
            pos: old_node.pos,
            end: old_node.end,
            flags: new_node.flags | NodeFlags::REPLACED,
            ..new_node
        };
        true
    }
}
