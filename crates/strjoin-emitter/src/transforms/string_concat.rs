//! String concatenation folding.
//!
//! Folds `+` chains and `[...].join(sep)` calls whose operands are all string
//! or template literals into a single literal:
//!
//! ```javascript
//! "a" + "b" + `c${d}`      // => `abc${d}`
//! ["a", `b${c}`].join("-") // => `a-b${c}`
//! ```
//!
//! Operands are never edited. Every fold allocates fresh literal, template
//! and quasi nodes; substitution expressions are carried over by index, in
//! their original left-to-right order.

use memchr::{memchr, memchr3};
use std::fmt;
use strjoin_common::limits::MAX_CONCAT_DEPTH;
use strjoin_parser::parser::node::{NodeArena, NodeFlags, QuasiValue};
use strjoin_parser::parser::syntax_kind_ext::{self, kind_name};
use strjoin_parser::parser::NodeIndex;
use strjoin_scanner::SyntaxKind;
use tracing::{trace, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConcatError {
    /// An operand is neither a string literal nor a template literal.
    InvalidOperand { kind: u16 },
    /// A template whose quasi and substitution counts disagree.
    MalformedTemplate { index: NodeIndex },
}

impl fmt::Display for ConcatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcatError::InvalidOperand { kind } => {
                write!(f, "cannot concatenate a {} operand", kind_name(*kind))
            }
            ConcatError::MalformedTemplate { index } => {
                write!(f, "template literal {} has inconsistent quasis", index.0)
            }
        }
    }
}

impl std::error::Error for ConcatError {}

// =============================================================================
// Eligibility
// =============================================================================

/// True only for string literals and template literals whose cooked text is
/// exact. A literal holding a lone surrogate escape cannot be re-emitted from
/// its cooked value and is never treated as a leaf.
pub fn is_string_like_leaf(arena: &NodeArena, idx: NodeIndex) -> bool {
    if arena.is_string_literal(idx) {
        return !has_lone_surrogate(arena, idx);
    }
    arena.get_template_at(idx).is_some_and(|template| {
        !template
            .quasis
            .iter()
            .any(|quasi| has_lone_surrogate(arena, quasi))
    })
}

fn has_lone_surrogate(arena: &NodeArena, idx: NodeIndex) -> bool {
    arena
        .get(idx)
        .is_some_and(|node| node.flags.contains(NodeFlags::LONE_SURROGATE))
}

/// True when `idx` evaluates to a string built only from literals: a string
/// literal, a template literal, a parenthesized pure string value, or a `+`
/// whose operands are both pure string values.
pub fn is_pure_string_value(arena: &NodeArena, idx: NodeIndex) -> bool {
    pure_string_value_at(arena, idx, 0)
}

fn pure_string_value_at(arena: &NodeArena, idx: NodeIndex, depth: u32) -> bool {
    if depth > MAX_CONCAT_DEPTH {
        return false;
    }
    let idx = skip_parentheses(arena, idx);
    if is_string_like_leaf(arena, idx) {
        return true;
    }
    let Some(node) = arena.get(idx) else {
        return false;
    };
    match arena.get_binary_expr(node) {
        Some(bin) if bin.operator_token == SyntaxKind::PlusToken => {
            pure_string_value_at(arena, bin.left, depth + 1)
                && pure_string_value_at(arena, bin.right, depth + 1)
        }
        _ => false,
    }
}

/// The expression inside any number of enclosing parentheses.
fn skip_parentheses(arena: &NodeArena, mut idx: NodeIndex) -> NodeIndex {
    while let Some(node) = arena.get(idx)
        && node.kind == syntax_kind_ext::PARENTHESIZED_EXPRESSION
        && let Some(paren) = arena.get_wrapped_expr(node)
    {
        idx = paren.expression;
    }
    idx
}

fn is_plus_expression(arena: &NodeArena, idx: NodeIndex) -> bool {
    arena
        .get(idx)
        .and_then(|node| arena.get_binary_expr(node))
        .is_some_and(|bin| bin.operator_token == SyntaxKind::PlusToken)
}

fn operand_kind(arena: &NodeArena, idx: NodeIndex) -> u16 {
    arena.kind_of(idx).unwrap_or(SyntaxKind::Unknown as u16)
}

// =============================================================================
// Merging
// =============================================================================

/// Merge two string-like fragments into a new node.
///
/// | `a`      | `b`      | result                                          |
/// |----------|----------|-------------------------------------------------|
/// | literal  | literal  | literal `a + b`                                 |
/// | literal  | template | template, `a` prefixed onto the first quasi     |
/// | template | literal  | template, `b` appended to the last quasi        |
/// | template | template | boundary quasis merged, substitutions `a ++ b`  |
pub fn concat(arena: &mut NodeArena, a: NodeIndex, b: NodeIndex) -> Result<NodeIndex, ConcatError> {
    let mut builder = FragmentBuilder::new();
    builder.push_leaf(arena, a)?;
    builder.push_leaf(arena, b)?;
    builder.finish(arena)
}

/// Flatten a `+` chain of string-like operands into one node.
///
/// Literals and templates come back unchanged, and so does any node that is
/// not a `+` expression. A `+` chain that reaches a non-string operand fails
/// with `InvalidOperand`.
pub fn evaluate(arena: &mut NodeArena, idx: NodeIndex) -> Result<NodeIndex, ConcatError> {
    if !is_plus_expression(arena, idx) {
        return Ok(idx);
    }
    let mut builder = FragmentBuilder::new();
    builder.push_value(arena, idx)?;
    builder.finish(arena)
}

/// Accumulates fragments left to right.
///
/// `quasis` always holds one more entry than `expressions`; each entry is a
/// `(raw, cooked)` pair. The result stays a plain string literal until the
/// first template is pushed.
struct FragmentBuilder {
    quasis: Vec<(String, String)>,
    expressions: Vec<NodeIndex>,
    is_template: bool,
}

impl FragmentBuilder {
    fn new() -> FragmentBuilder {
        FragmentBuilder {
            quasis: vec![(String::new(), String::new())],
            expressions: Vec::new(),
            is_template: false,
        }
    }

    fn tail(&mut self) -> &mut (String, String) {
        let last = self.quasis.len() - 1;
        &mut self.quasis[last]
    }

    fn push_text(&mut self, text: &str) {
        let (raw, cooked) = self.tail();
        let escaped = escape_template_raw(text);
        append_raw(raw, &escaped);
        cooked.push_str(text);
    }

    /// Push a string literal or template literal, seen through parentheses.
    fn push_leaf(&mut self, arena: &NodeArena, idx: NodeIndex) -> Result<(), ConcatError> {
        let idx = skip_parentheses(arena, idx);
        if let Some(text) = arena.string_literal_text(idx) {
            self.push_text(text);
            return Ok(());
        }
        let Some(template) = arena.get_template_at(idx) else {
            return Err(ConcatError::InvalidOperand {
                kind: operand_kind(arena, idx),
            });
        };
        if template.quasis.len() != template.expressions.len() + 1 {
            return Err(ConcatError::MalformedTemplate { index: idx });
        }

        self.is_template = true;
        for (i, quasi_idx) in template.quasis.iter().enumerate() {
            let element = arena
                .get_template_element_at(quasi_idx)
                .ok_or(ConcatError::MalformedTemplate { index: idx })?;
            let (quasi_raw, quasi_cooked) = element.value.normalize();
            if i == 0 {
                let (raw, cooked) = self.tail();
                append_raw(raw, &quasi_raw);
                cooked.push_str(&quasi_cooked);
            } else {
                self.expressions.push(template.expressions.nodes[i - 1]);
                self.quasis.push((quasi_raw, quasi_cooked));
            }
        }
        Ok(())
    }

    /// Push a pure string value, flattening `+` chains left to right.
    fn push_value(&mut self, arena: &NodeArena, idx: NodeIndex) -> Result<(), ConcatError> {
        let mut pending = vec![idx];
        while let Some(current) = pending.pop() {
            let current = skip_parentheses(arena, current);
            if let Some(node) = arena.get(current)
                && let Some(bin) = arena.get_binary_expr(node)
                && bin.operator_token == SyntaxKind::PlusToken
            {
                pending.push(bin.right);
                pending.push(bin.left);
                continue;
            }
            self.push_leaf(arena, current)?;
        }
        Ok(())
    }

    fn finish(self, arena: &mut NodeArena) -> Result<NodeIndex, ConcatError> {
        if !self.is_template {
            let text = self
                .quasis
                .into_iter()
                .next()
                .map(|(_, cooked)| cooked)
                .unwrap_or_default();
            return Ok(arena.create_string_literal(text));
        }

        let count = self.quasis.len();
        let quasis: Vec<NodeIndex> = self
            .quasis
            .into_iter()
            .enumerate()
            .map(|(i, (raw, cooked))| {
                arena.create_template_element(QuasiValue::Cooked { raw, cooked }, i + 1 == count)
            })
            .collect();
        arena
            .create_template(quasis, self.expressions)
            .ok_or(ConcatError::MalformedTemplate {
                index: NodeIndex::NONE,
            })
    }
}

/// Escape literal text for the raw channel of a template quasi.
///
/// Backslashes, backticks, `${` and carriage returns are escaped; everything
/// else is kept as written.
pub fn escape_template_raw(text: &str) -> String {
    let bytes = text.as_bytes();
    if memchr3(b'\\', b'`', b'$', bytes).is_none() && memchr(b'\r', bytes).is_none() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '\r' => out.push_str("\\r"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            c => out.push(c),
        }
    }
    out
}

/// Append raw quasi text, escaping a trailing `$` of `dst` when `piece`
/// starts with `{` so the join does not open a substitution.
fn append_raw(dst: &mut String, piece: &str) {
    if piece.starts_with('{') && ends_with_unescaped_dollar(dst) {
        dst.pop();
        dst.push_str("\\$");
    }
    dst.push_str(piece);
}

fn ends_with_unescaped_dollar(raw: &str) -> bool {
    let Some(rest) = raw.strip_suffix('$') else {
        return false;
    };
    let backslashes = rest.bytes().rev().take_while(|&b| b == b'\\').count();
    backslashes % 2 == 0
}

// =============================================================================
// Rewrite rule
// =============================================================================

/// The folding rule for `+` expressions and array `.join()` calls.
///
/// Both entry points return the replacement node, or `None` to keep the
/// original node.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringConcatRule;

impl StringConcatRule {
    pub fn fold_binary(&self, arena: &mut NodeArena, idx: NodeIndex) -> Option<NodeIndex> {
        if !is_plus_expression(arena, idx) || !is_pure_string_value(arena, idx) {
            trace!(node = idx.0, "binary expression is not a pure string value");
            return None;
        }
        match evaluate(arena, idx) {
            Ok(folded) => Some(folded),
            Err(err) => {
                warn!(node = idx.0, error = %err, "string concatenation not folded");
                None
            }
        }
    }

    pub fn fold_join(&self, arena: &mut NodeArena, idx: NodeIndex) -> Option<NodeIndex> {
        let call = arena.get(idx).and_then(|node| arena.get_call_expr(node))?;
        let access = arena
            .get(call.expression)
            .filter(|node| node.kind == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION)
            .and_then(|node| arena.get_access_expr(node))?;
        if arena.identifier_text(access.name_or_argument) != Some("join") {
            return None;
        }
        let array = arena
            .get(access.expression)
            .and_then(|node| arena.get_literal_expr(node))?;

        if call.arguments.len() > 1 {
            trace!(node = idx.0, "join call has more than one argument");
            return None;
        }
        let separator = call.arguments.first();
        if let Some(sep) = separator
            && !is_plain_separator(arena, sep)
        {
            trace!(node = idx.0, "join separator is not a constant string");
            return None;
        }
        if !array
            .elements
            .iter()
            .all(|element| is_pure_string_value(arena, element))
        {
            trace!(node = idx.0, "array element is not a pure string value");
            return None;
        }

        let elements = array.elements.nodes.clone();
        let result = match elements.as_slice() {
            [] => Ok(arena.create_string_literal("")),
            // The separator is ignored, but the element is still rebuilt
            // into a new node.
            [only] => join_fragments(arena, *only, &[], None),
            [first, rest @ ..] => join_fragments(arena, *first, rest, separator),
        };
        match result {
            Ok(folded) => Some(folded),
            Err(err) => {
                warn!(node = idx.0, error = %err, "array join not folded");
                None
            }
        }
    }
}

/// `e0 <> sep <> e1 <> ... <> en`, with `","` when no separator is given.
fn join_fragments(
    arena: &mut NodeArena,
    first: NodeIndex,
    rest: &[NodeIndex],
    separator: Option<NodeIndex>,
) -> Result<NodeIndex, ConcatError> {
    let mut builder = FragmentBuilder::new();
    builder.push_value(arena, first)?;
    for &element in rest {
        match separator {
            Some(sep) => builder.push_leaf(arena, sep)?,
            None => builder.push_text(","),
        }
        builder.push_value(arena, element)?;
    }
    builder.finish(arena)
}

/// A separator must be a string literal or a template without substitutions.
fn is_plain_separator(arena: &NodeArena, idx: NodeIndex) -> bool {
    let idx = skip_parentheses(arena, idx);
    is_string_like_leaf(arena, idx)
        && arena
            .get_template_at(idx)
            .is_none_or(|template| template.expressions.is_empty())
}

#[cfg(test)]
#[path = "../../tests/string_concat.rs"]
mod tests;
