//! Node header, per-kind data structures and the arena that owns them.
//!
//! A `Node` is a small header (`kind`, `flags`, `pos`, `end`, `data_index`).
//! The payload of a node lives in the arena pool for its kind; `data_index`
//! points into that pool. Token-like nodes (`true`, `this`, holes) carry no
//! payload and use `Node::NO_DATA`.

use super::base::{NodeIndex, NodeList};
use strjoin_common::{CommentRange, Span};
use strjoin_scanner::SyntaxKind;

bitflags::bitflags! {
    /// Per-node flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Built by a transform rather than the parser; `pos`/`end` are not source offsets.
        const SYNTHESIZED = 1 << 0;
        /// Placeholder created during error recovery.
        const MISSING = 1 << 1;
        /// The slot was rebound to a replacement node by a transform.
        const REPLACED = 1 << 2;
        /// String literal or template quasi whose cooked text stands in
        /// U+FFFD for a lone surrogate escape.
        const LONE_SURROGATE = 1 << 3;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: u16,
    pub flags: NodeFlags,
    pub pos: u32,
    pub end: u32,
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: u16, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: NodeFlags::empty(),
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: NodeFlags::empty(),
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    pub fn is_synthesized(&self) -> bool {
        self.flags.contains(NodeFlags::SYNTHESIZED)
    }
    /// Source range of the node. Empty for synthesized nodes.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.pos, self.end)
    }
}

// =============================================================================
// Node data
// =============================================================================

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// String or numeric literal. For strings `text` is the cooked value; for
/// numbers it is the source text.
#[derive(Clone, Debug)]
pub struct LiteralData {
    pub text: String,
}

/// Text of one template quasi.
///
/// `Plain` is the untagged shorthand where raw and cooked coincide; the parser
/// and the string-concatenation merger produce `Cooked`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuasiValue {
    Plain(String),
    Cooked { raw: String, cooked: String },
}

impl QuasiValue {
    pub fn raw(&self) -> &str {
        match self {
            QuasiValue::Plain(text) => text,
            QuasiValue::Cooked { raw, .. } => raw,
        }
    }

    pub fn cooked(&self) -> &str {
        match self {
            QuasiValue::Plain(text) => text,
            QuasiValue::Cooked { cooked, .. } => cooked,
        }
    }

    /// Both channels as an owned `(raw, cooked)` pair.
    pub fn normalize(&self) -> (String, String) {
        match self {
            QuasiValue::Plain(text) => (text.clone(), text.clone()),
            QuasiValue::Cooked { raw, cooked } => (raw.clone(), cooked.clone()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TemplateElementData {
    pub value: QuasiValue,
    pub tail: bool,
}

/// Template literal: `quasis.len() == expressions.len() + 1`.
#[derive(Clone, Debug)]
pub struct TemplateData {
    pub quasis: NodeList,
    pub expressions: NodeList,
}

#[derive(Clone, Debug)]
pub struct TaggedTemplateData {
    pub tag: NodeIndex,
    pub template: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: SyntaxKind,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct UnaryExprData {
    pub operator: SyntaxKind,
    pub operand: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: NodeList,
}

/// Property access (`a.b`, `name_or_argument` is an identifier) or element
/// access (`a[b]`).
#[derive(Clone, Debug)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

/// Array literal elements.
#[derive(Clone, Debug)]
pub struct LiteralExprData {
    pub elements: NodeList,
}

/// Payload shared by parenthesized expressions, spread elements, expression
/// statements and return statements.
#[derive(Clone, Debug)]
pub struct WrappedExprData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct VariableData {
    pub keyword: SyntaxKind,
    pub declarations: NodeList,
}

#[derive(Clone, Debug)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct BlockData {
    pub statements: NodeList,
}

#[derive(Clone, Debug)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
    /// Every comment in the file, in source order.
    pub comments: Vec<CommentRange>,
}

// =============================================================================
// Arena
// =============================================================================

/// Owner of every node of one source file.
#[derive(Clone, Default, Debug)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub identifiers: Vec<IdentifierData>,
    pub literals: Vec<LiteralData>,
    pub templates: Vec<TemplateData>,
    pub template_elements: Vec<TemplateElementData>,
    pub tagged_templates: Vec<TaggedTemplateData>,
    pub binary_exprs: Vec<BinaryExprData>,
    pub unary_exprs: Vec<UnaryExprData>,
    pub call_exprs: Vec<CallExprData>,
    pub access_exprs: Vec<AccessExprData>,
    pub conditional_exprs: Vec<ConditionalExprData>,
    pub literal_exprs: Vec<LiteralExprData>,
    pub wrapped_exprs: Vec<WrappedExprData>,
    pub variables: Vec<VariableData>,
    pub variable_declarations: Vec<VariableDeclarationData>,
    pub blocks: Vec<BlockData>,
    pub source_files: Vec<SourceFileData>,
}
