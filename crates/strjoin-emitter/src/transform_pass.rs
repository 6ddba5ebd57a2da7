//! Whole-file string concatenation pass.
//!
//! `TransformPass` drives [`StringConcatRule`] over one source file through
//! the post-order walk in `transforms::visitor`:
//!
//! ```javascript
//! const greeting = "Hello, " + "world" + "!";     // => "Hello, world!"
//! const path = ["usr", `${dir}`, "bin"].join("/"); // => `usr/${dir}/bin`
//! ```
//!
//! Each file gets its own pass; nothing is shared between files.

use crate::transforms::string_concat::{StringConcatRule, is_string_like_leaf};
use crate::transforms::visitor::{Rewrite, walk_and_rewrite};
use strjoin_parser::parser::node::NodeArena;
use strjoin_parser::parser::syntax_kind_ext;
use strjoin_parser::parser::NodeIndex;
use strjoin_scanner::SyntaxKind;
use tracing::{debug, trace};

/// Which entry points of the rule are enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleOptions {
    pub fold_binary: bool,
    pub fold_join: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        RuleOptions {
            fold_binary: true,
            fold_join: true,
        }
    }
}

/// Counters for one run of the pass.
///
/// `skipped` counts candidates that were looked at and left alone: a `+`
/// with a string-literal or template operand, or a `.join()` call on an
/// array literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub binary_folds: usize,
    pub join_folds: usize,
    pub skipped: usize,
}

impl TransformStats {
    pub fn total_folds(&self) -> usize {
        self.binary_folds + self.join_folds
    }

    pub fn merge(&mut self, other: &TransformStats) {
        self.binary_folds += other.binary_folds;
        self.join_folds += other.join_folds;
        self.skipped += other.skipped;
    }
}

pub struct TransformPass {
    options: RuleOptions,
    rule: StringConcatRule,
    stats: TransformStats,
}

impl TransformPass {
    pub fn new(options: RuleOptions) -> Self {
        TransformPass {
            options,
            rule: StringConcatRule,
            stats: TransformStats::default(),
        }
    }

    /// Run the pass over the tree under `root`.
    pub fn run(mut self, arena: &mut NodeArena, root: NodeIndex) -> TransformStats {
        if !self.options.fold_binary && !self.options.fold_join {
            return self.stats;
        }
        let replacements = walk_and_rewrite(arena, root, &mut self);
        debug_assert_eq!(replacements, self.stats.total_folds());
        debug!(
            root = root.0,
            binary_folds = self.stats.binary_folds,
            join_folds = self.stats.join_folds,
            skipped = self.stats.skipped,
            "string concatenation pass finished"
        );
        self.stats
    }
}

impl Rewrite for TransformPass {
    fn visit_binary_expression(&mut self, arena: &mut NodeArena, idx: NodeIndex) -> Option<NodeIndex> {
        if !self.options.fold_binary {
            return None;
        }
        let (left, right) = {
            let bin = arena.get(idx).and_then(|node| arena.get_binary_expr(node))?;
            if bin.operator_token != SyntaxKind::PlusToken {
                return None;
            }
            (bin.left, bin.right)
        };
        let folded = self.rule.fold_binary(arena, idx);
        match folded {
            Some(_) => self.stats.binary_folds += 1,
            None if is_string_like_leaf(arena, left) || is_string_like_leaf(arena, right) => {
                trace!(node = idx.0, "string concatenation left as is");
                self.stats.skipped += 1;
            }
            None => {}
        }
        folded
    }

    fn visit_call_expression(&mut self, arena: &mut NodeArena, idx: NodeIndex) -> Option<NodeIndex> {
        if !self.options.fold_join || !is_array_join_call(arena, idx) {
            return None;
        }
        let folded = self.rule.fold_join(arena, idx);
        if folded.is_some() {
            self.stats.join_folds += 1;
        } else {
            trace!(node = idx.0, "array join left as is");
            self.stats.skipped += 1;
        }
        folded
    }
}

/// `[...].join(...)`, regardless of what the elements and arguments are.
fn is_array_join_call(arena: &NodeArena, idx: NodeIndex) -> bool {
    let Some(call) = arena.get(idx).and_then(|node| arena.get_call_expr(node)) else {
        return false;
    };
    let Some(access) = arena
        .get(call.expression)
        .filter(|node| node.kind == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION)
        .and_then(|node| arena.get_access_expr(node))
    else {
        return false;
    };
    arena.identifier_text(access.name_or_argument) == Some("join")
        && arena.is_kind(access.expression, syntax_kind_ext::ARRAY_LITERAL_EXPRESSION)
}

#[cfg(test)]
#[path = "../tests/transform_pass.rs"]
mod tests;
