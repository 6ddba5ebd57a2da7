//! Centralized limits and thresholds.
//!
//! Recursion depths used by the parser, the tree walk and the rewrite rule.
//! Inputs that go deeper are left alone rather than risking a stack overflow.

/// Maximum nesting depth the parser accepts for a single expression.
///
/// ```javascript
/// const x = ((((((((((((((((((((((((1 + 2) + 3) + 4) /* ... */))))));
/// ```
///
/// Beyond this depth the parser reports `NESTING_TOO_DEEP` and the file is
/// emitted unchanged.
pub const MAX_PARSE_DEPTH: u32 = 256;

/// Maximum recursion depth for the rewrite walk over the AST.
///
/// Subtrees below this depth are not visited, and the printer copies them
/// from the source text instead of recursing into them.
pub const MAX_AST_DEPTH: u32 = 500;

/// Maximum length of a `+` chain the eligibility check and the flattening
/// step will recurse through.
///
/// ```javascript
/// const s = "a" + "b" + "c" /* ... thousands of operands ... */;
/// ```
///
/// Chains deeper than this are treated as not foldable.
pub const MAX_CONCAT_DEPTH: u32 = 400;
