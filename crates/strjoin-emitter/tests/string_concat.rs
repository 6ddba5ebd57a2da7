use super::*;
use strjoin_parser::parser::ParserState;

/// Parse `source` and return the expression of its first statement.
fn parse_expression(source: &str) -> (NodeArena, NodeIndex) {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    assert!(parser.get_diagnostics().is_empty(), "parse errors in {source:?}");
    let arena = parser.into_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let stmt = arena.get(sf.statements.nodes[0]).unwrap();
    let expr = arena.get_wrapped_expr(stmt).unwrap().expression;
    (arena, expr)
}

/// Quasis of a template as `(raw, cooked)` pairs.
fn quasis_of(arena: &NodeArena, idx: NodeIndex) -> Vec<(String, String)> {
    let template = arena.get_template_at(idx).expect("template");
    template
        .quasis
        .iter()
        .map(|q| arena.get_template_element_at(q).unwrap().value.normalize())
        .collect()
}

fn pair(raw: &str, cooked: &str) -> (String, String) {
    (raw.to_string(), cooked.to_string())
}

// =============================================================================
// Eligibility
// =============================================================================

#[test]
fn test_pure_string_values() {
    for source in [
        "'a'",
        "`a${b}`",
        "'a' + 'b'",
        "'a' + `b${c}` + 'd'",
        "('a' + 'b')",
        "'a' + ('b')",
        "'a' + (('b' + `c`))",
        "'\\uD83D\\uDE00' + 'x'",
    ] {
        let (arena, expr) = parse_expression(source);
        assert!(is_pure_string_value(&arena, expr), "{source}");
    }
}

#[test]
fn test_impure_values() {
    for source in [
        "1",
        "a",
        "'a' + 1",
        "'a' + b",
        "'a' - 'b'",
        "('a' + 1)",
        "'\\uD800' + 'x'",
        "'a' + `${b}\\uDC00`",
        "tag`a`",
        "f()",
        "['a']",
    ] {
        let (arena, expr) = parse_expression(source);
        assert!(!is_pure_string_value(&arena, expr), "{source}");
    }
}

#[test]
fn test_string_like_leaf() {
    let (arena, expr) = parse_expression("'a' + 'b'");
    assert!(!is_string_like_leaf(&arena, expr));
    let bin = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    assert!(is_string_like_leaf(&arena, bin.left));
    assert!(!is_string_like_leaf(&arena, NodeIndex::NONE));
}

#[test]
fn test_overlong_chain_is_not_pure() {
    let source = vec!["'a'"; MAX_CONCAT_DEPTH as usize + 10].join(" + ");
    let (arena, expr) = parse_expression(&source);
    assert!(!is_pure_string_value(&arena, expr));
}

// =============================================================================
// concat
// =============================================================================

#[test]
fn test_concat_literal_literal() {
    let mut arena = NodeArena::new();
    let a = arena.create_string_literal("foo");
    let b = arena.create_string_literal("bar");
    let result = concat(&mut arena, a, b).unwrap();
    assert_eq!(arena.string_literal_text(result), Some("foobar"));
    // Operands are untouched.
    assert_eq!(arena.string_literal_text(a), Some("foo"));
}

#[test]
fn test_concat_literal_template() {
    let (mut arena, expr) = parse_expression("'pre' + `mid${x}post`");
    let bin = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap().clone();
    let result = concat(&mut arena, bin.left, bin.right).unwrap();

    assert_eq!(
        quasis_of(&arena, result),
        vec![pair("premid", "premid"), pair("post", "post")]
    );
    let original = arena.get_template_at(bin.right).unwrap();
    let merged = arena.get_template_at(result).unwrap();
    assert_eq!(merged.expressions, original.expressions);
    // The original template keeps its own first quasi.
    assert_eq!(quasis_of(&arena, bin.right)[0], pair("mid", "mid"));
}

#[test]
fn test_concat_template_literal() {
    let (mut arena, expr) = parse_expression("`${x}a` + 'b'");
    let bin = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap().clone();
    let result = concat(&mut arena, bin.left, bin.right).unwrap();
    assert_eq!(
        quasis_of(&arena, result),
        vec![pair("", ""), pair("ab", "ab")]
    );
}

#[test]
fn test_concat_template_template_keeps_substitution_order() {
    let (mut arena, expr) = parse_expression("`a${x}b${y}c` + `d${z}e`");
    let bin = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap().clone();
    let result = concat(&mut arena, bin.left, bin.right).unwrap();

    assert_eq!(
        quasis_of(&arena, result),
        vec![pair("a", "a"), pair("b", "b"), pair("cd", "cd"), pair("e", "e")]
    );
    let names: Vec<&str> = arena
        .get_template_at(result)
        .unwrap()
        .expressions
        .iter()
        .map(|e| arena.identifier_text(e).unwrap())
        .collect();
    assert_eq!(names, vec!["x", "y", "z"]);
}

#[test]
fn test_concat_combines_raw_and_cooked_independently() {
    let (mut arena, expr) = parse_expression("`a\\n${x}` + `\\t`");
    let bin = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap().clone();
    let result = concat(&mut arena, bin.left, bin.right).unwrap();
    assert_eq!(
        quasis_of(&arena, result),
        vec![pair("a\\n", "a\n"), pair("\\t", "\t")]
    );
}

#[test]
fn test_concat_plain_quasi_is_normalized() {
    let mut arena = NodeArena::new();
    let head = arena.create_template_element(QuasiValue::Plain("x".into()), true);
    let template = arena.create_template(vec![head], vec![]).unwrap();
    let lit = arena.create_string_literal("y");
    let result = concat(&mut arena, template, lit).unwrap();
    assert_eq!(quasis_of(&arena, result), vec![pair("xy", "xy")]);
}

#[test]
fn test_concat_escapes_literal_text_for_raw_channel() {
    let (mut arena, expr) = parse_expression("'a`b\\\\c${d}\\r' + `${e}`");
    let bin = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap().clone();
    let result = concat(&mut arena, bin.left, bin.right).unwrap();
    let quasis = quasis_of(&arena, result);
    assert_eq!(quasis[0].0, "a\\`b\\\\c\\${d}\\r");
    assert_eq!(quasis[0].1, "a`b\\c${d}\r");
}

#[test]
fn test_concat_does_not_create_substitution_at_boundary() {
    let (mut arena, expr) = parse_expression("`${x}$` + '{y}'");
    let bin = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap().clone();
    let result = concat(&mut arena, bin.left, bin.right).unwrap();
    assert_eq!(quasis_of(&arena, result)[1], pair("\\${y}", "${y}"));
}

#[test]
fn test_concat_rejects_non_string_operand() {
    let mut arena = NodeArena::new();
    let a = arena.create_string_literal("a");
    let n = arena.create_numeric_literal("1");
    let err = concat(&mut arena, a, n).unwrap_err();
    assert_eq!(
        err,
        ConcatError::InvalidOperand {
            kind: SyntaxKind::NumericLiteral as u16
        }
    );
    assert_eq!(err.to_string(), "cannot concatenate a NumericLiteral operand");
}

// =============================================================================
// evaluate
// =============================================================================

#[test]
fn test_evaluate_leaf_is_identity() {
    let (mut arena, expr) = parse_expression("'a'");
    assert_eq!(evaluate(&mut arena, expr), Ok(expr));
    let (mut arena, expr) = parse_expression("x * y");
    assert_eq!(evaluate(&mut arena, expr), Ok(expr));
}

#[test]
fn test_evaluate_flattens_left_associative_chain() {
    let (mut arena, expr) = parse_expression("'a' + `b${x}` + 'c' + `${y}d`");
    let result = evaluate(&mut arena, expr).unwrap();
    assert_eq!(
        quasis_of(&arena, result),
        vec![pair("ab", "ab"), pair("c", "c"), pair("d", "d")]
    );
}

#[test]
fn test_evaluate_fails_on_mixed_chain() {
    let (mut arena, expr) = parse_expression("'a' + b");
    assert_eq!(
        evaluate(&mut arena, expr),
        Err(ConcatError::InvalidOperand {
            kind: SyntaxKind::Identifier as u16
        })
    );
}

// =============================================================================
// Rule
// =============================================================================

#[test]
fn test_fold_binary_rejects_impure() {
    let rule = StringConcatRule;
    let (mut arena, expr) = parse_expression("'a' + 1 + 'b'");
    let before = arena.len();
    assert_eq!(rule.fold_binary(&mut arena, expr), None);
    assert_eq!(arena.len(), before);
}

#[test]
fn test_fold_binary_literals() {
    let rule = StringConcatRule;
    let (mut arena, expr) = parse_expression("'a' + 'b' + 'c'");
    let folded = rule.fold_binary(&mut arena, expr).unwrap();
    assert_eq!(arena.string_literal_text(folded), Some("abc"));
}

#[test]
fn test_fold_join_default_separator() {
    let rule = StringConcatRule;
    let (mut arena, expr) = parse_expression("['a', 'b', 'c'].join()");
    let folded = rule.fold_join(&mut arena, expr).unwrap();
    assert_eq!(arena.string_literal_text(folded), Some("a,b,c"));
}

#[test]
fn test_fold_join_with_separator_and_templates() {
    let rule = StringConcatRule;
    let (mut arena, expr) = parse_expression("['a', `b${x}`, 'c' + 'd'].join(`-`)");
    let folded = rule.fold_join(&mut arena, expr).unwrap();
    assert_eq!(
        quasis_of(&arena, folded),
        vec![pair("a-b", "a-b"), pair("-cd", "-cd")]
    );
}

#[test]
fn test_fold_join_empty_and_single() {
    let rule = StringConcatRule;
    let (mut arena, expr) = parse_expression("[].join('-')");
    let folded = rule.fold_join(&mut arena, expr).unwrap();
    assert_eq!(arena.string_literal_text(folded), Some(""));

    let (mut arena, expr) = parse_expression("['only'].join('-')");
    let folded = rule.fold_join(&mut arena, expr).unwrap();
    assert_eq!(arena.string_literal_text(folded), Some("only"));

    let (mut arena, expr) = parse_expression("['a' + 'b'].join('-')");
    let folded = rule.fold_join(&mut arena, expr).unwrap();
    assert_eq!(arena.string_literal_text(folded), Some("ab"));
}

#[test]
fn test_fold_join_single_element_is_a_new_node() {
    let rule = StringConcatRule;
    let (mut arena, expr) = parse_expression("['only'].join('-')");
    let call = arena.get_call_expr(arena.get(expr).unwrap()).unwrap().expression;
    let access = arena.get_access_expr(arena.get(call).unwrap()).unwrap().expression;
    let element = arena.get_literal_expr(arena.get(access).unwrap()).unwrap().elements.nodes[0];

    let folded = rule.fold_join(&mut arena, expr).unwrap();
    assert_ne!(folded, element);
    assert!(arena.get(folded).unwrap().is_synthesized());
    assert_eq!(arena.string_literal_text(folded), Some("only"));
}

#[test]
fn test_fold_binary_sees_through_parentheses() {
    let rule = StringConcatRule;
    let (mut arena, expr) = parse_expression("'a' + ('b' + (`c${x}`))");
    let folded = rule.fold_binary(&mut arena, expr).unwrap();
    assert_eq!(quasis_of(&arena, folded), vec![pair("abc", "abc"), pair("", "")]);

    let (mut arena, expr) = parse_expression("['a', ('b')].join(('-'))");
    let folded = rule.fold_join(&mut arena, expr).unwrap();
    assert_eq!(arena.string_literal_text(folded), Some("a-b"));
}

#[test]
fn test_lone_surrogate_escapes_are_not_folded() {
    let rule = StringConcatRule;
    for source in [
        "'\\uD800' + 'x'",
        "'x' + '\\u{DFFF}'",
        "`a\\uD800${b}` + 'c'",
    ] {
        let (mut arena, expr) = parse_expression(source);
        assert_eq!(rule.fold_binary(&mut arena, expr), None, "{source}");
    }
    for source in ["['\\uD800', 'x'].join()", "['a', 'b'].join('\\uDBFF')"] {
        let (mut arena, expr) = parse_expression(source);
        assert_eq!(rule.fold_join(&mut arena, expr), None, "{source}");
    }

    // A complete surrogate pair decodes to one scalar value and folds.
    let (mut arena, expr) = parse_expression("'\\uD83D\\uDE00' + 'x'");
    let folded = rule.fold_binary(&mut arena, expr).unwrap();
    assert_eq!(arena.string_literal_text(folded), Some("\u{1F600}x"));
}

#[test]
fn test_fold_join_rejections() {
    let rule = StringConcatRule;
    for source in [
        "['a', b].join()",
        "['a', , 'b'].join()",
        "['a', ...b].join()",
        "['a', 1].join()",
        "['a', 'b'].join(sep)",
        "['a', 'b'].join(`${sep}`)",
        "['a', 'b'].join(',', extra)",
        "['a', 'b'].concat()",
        "['a', 'b'][join]()",
        "list.join(',')",
        "join(['a'])",
    ] {
        let (mut arena, expr) = parse_expression(source);
        assert_eq!(rule.fold_join(&mut arena, expr), None, "{source}");
    }
}

#[test]
fn test_escape_template_raw() {
    assert_eq!(escape_template_raw("plain"), "plain");
    assert_eq!(escape_template_raw("$x"), "$x");
    assert_eq!(escape_template_raw("${x}"), "\\${x}");
    assert_eq!(escape_template_raw("a\nb"), "a\nb");
    assert_eq!(escape_template_raw("a\r\nb"), "a\\r\nb");
}

#[test]
fn test_rule_on_synthesized_tree() {
    // ['a', 'b' + 'c'].join('-') built without a parser.
    let mut arena = NodeArena::new();
    let a = arena.create_string_literal("a");
    let b = arena.create_string_literal("b");
    let c = arena.create_string_literal("c");
    let bc = arena.create_binary(b, SyntaxKind::PlusToken, c);
    let array = arena.create_array_literal(vec![a, bc]);
    let callee = arena.create_property_access(array, "join");
    let dash = arena.create_string_literal("-");
    let call = arena.create_call(callee, vec![dash]);

    assert!(is_pure_string_value(&arena, bc));
    let folded = StringConcatRule.fold_join(&mut arena, call).expect("join folds");
    assert_eq!(arena.string_literal_text(folded), Some("a-bc"));

    let x = arena.create_identifier("x");
    let mixed = arena.create_binary(a, SyntaxKind::PlusToken, x);
    assert_eq!(StringConcatRule.fold_binary(&mut arena, mixed), None);
    assert_eq!(
        concat(&mut arena, a, x),
        Err(ConcatError::InvalidOperand {
            kind: SyntaxKind::Identifier as u16
        })
    );
}
