//! Post-order tree walk with in-place slot replacement.
//!
//! `walk_and_rewrite` offers every binary expression and call expression to
//! a [`Rewrite`] implementation after its children have been walked. A
//! returned replacement is bound into the visited slot with
//! `NodeArena::replace`, so the parent keeps pointing at the same index.

use strjoin_common::limits::MAX_AST_DEPTH;
use strjoin_parser::parser::node::NodeArena;
use strjoin_parser::parser::syntax_kind_ext::{self, kind_name};
use strjoin_parser::parser::NodeIndex;
use tracing::debug;

/// Node handlers for `walk_and_rewrite`.
///
/// A handler returns the node that should take the place of `idx`, or `None`
/// to leave it alone.
pub trait Rewrite {
    fn visit_binary_expression(
        &mut self,
        _arena: &mut NodeArena,
        _idx: NodeIndex,
    ) -> Option<NodeIndex> {
        None
    }

    fn visit_call_expression(
        &mut self,
        _arena: &mut NodeArena,
        _idx: NodeIndex,
    ) -> Option<NodeIndex> {
        None
    }
}

/// Walk the tree under `root` and apply `rewriter`. Returns the number of
/// replacements made.
pub fn walk_and_rewrite<R: Rewrite>(arena: &mut NodeArena, root: NodeIndex, rewriter: &mut R) -> usize {
    let mut walker = Walker {
        rewriter,
        depth: 0,
        replacements: 0,
    };
    walker.walk(arena, root);
    walker.replacements
}

struct Walker<'r, R> {
    rewriter: &'r mut R,
    depth: u32,
    replacements: usize,
}

impl<R: Rewrite> Walker<'_, R> {
    fn walk(&mut self, arena: &mut NodeArena, idx: NodeIndex) {
        // Stack overflow protection: deeper subtrees are left as they are.
        if self.depth >= MAX_AST_DEPTH {
            return;
        }
        let Some(kind) = arena.kind_of(idx) else {
            return;
        };
        self.depth += 1;

        for child in arena.get_children(idx) {
            self.walk(arena, child);
        }

        let replacement = match kind {
            syntax_kind_ext::BINARY_EXPRESSION => {
                self.rewriter.visit_binary_expression(arena, idx)
            }
            syntax_kind_ext::CALL_EXPRESSION => self.rewriter.visit_call_expression(arena, idx),
            _ => None,
        };
        if let Some(replacement) = replacement
            && arena.replace(idx, replacement)
        {
            self.replacements += 1;
            debug!(
                node = idx.0,
                from = kind_name(kind),
                to = arena.kind_of(idx).map_or("Unknown", kind_name),
                "replaced node"
            );
        }

        self.depth -= 1;
    }
}

#[cfg(test)]
#[path = "../../tests/visitor.rs"]
mod tests;
