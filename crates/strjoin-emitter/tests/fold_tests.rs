//! End-to-end tests: parse, run the folding pass, print.

use strjoin_emitter::{Printer, PrinterOptions, RuleOptions, TransformPass, TransformStats};
use strjoin_parser::parser::ParserState;

fn fold_with(source: &str, options: RuleOptions) -> (String, TransformStats) {
    let mut parser = ParserState::new("fold.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    assert!(parser.get_diagnostics().is_empty(), "parse errors in {source:?}");
    let mut arena = parser.into_arena();
    let stats = TransformPass::new(options).run(&mut arena, root);
    let mut printer = Printer::new(&arena, PrinterOptions::default()).with_source_text(source);
    printer.emit(root);
    (printer.take_output(), stats)
}

fn fold(source: &str) -> String {
    fold_with(source, RuleOptions::default()).0
}

#[test]
fn folds_plus_chain_of_literals() {
    assert_eq!(fold("var a = 'foo' + 'bar' + 'baz';"), "var a = \"foobarbaz\";\n");
}

#[test]
fn folds_literal_into_template() {
    assert_eq!(
        fold("var a = 'pre' + `${mid}post`;"),
        "var a = `pre${mid}post`;\n"
    );
}

#[test]
fn folds_join_with_default_separator() {
    assert_eq!(
        fold("var a = ['foo', 'bar', `baz${x}`].join();"),
        "var a = `foo,bar,baz${x}`;\n"
    );
}

#[test]
fn folds_join_with_separator() {
    assert_eq!(
        fold("var a = ['foo', `b${x}r`].join(' - ');"),
        "var a = `foo - b${x}r`;\n"
    );
}

#[test]
fn leaves_mixed_operands_alone() {
    let source = "var a = 'a' + 1 + 'b';\nvar b = 1 + 2 + 'c';\nvar c = [x, 'y'].join();\n";
    let (output, stats) = fold_with(source, RuleOptions::default());
    assert_eq!(output, source);
    assert_eq!(stats.total_folds(), 0);
}

#[test]
fn folds_inside_substitutions_and_arguments() {
    assert_eq!(
        fold("f(`a${'b' + 'c'}d`, ['e'].join());"),
        "f(`a${\"bc\"}d`, \"e\");\n"
    );
}

#[test]
fn parenthesized_operands_fold_into_the_whole_chain() {
    assert_eq!(fold("const a = 'a' + ('b' + 'c');"), "const a = \"abc\";\n");
    assert_eq!(
        fold("const a = ('a') + (('b') + `${c}`);"),
        "const a = `ab${c}`;\n"
    );
    assert_eq!(fold("f(['a', ('b' + 'c')].join(('-')));"), "f(\"a-bc\");\n");
}

#[test]
fn parenthesized_group_with_opaque_operand_folds_inside_only() {
    assert_eq!(
        fold("var a = x + ('b' + 'c');"),
        "var a = x + (\"bc\");\n"
    );
}

#[test]
fn lone_surrogate_escapes_are_left_as_written() {
    let (output, stats) = fold_with("const a = '\\uD800' + 'x';\n", RuleOptions::default());
    assert_eq!(output, "const a = '\\uD800' + 'x';\n");
    assert_eq!(stats.total_folds(), 0);

    assert_eq!(
        fold("const b = ['\\uDC00', `y${z}`].join();"),
        "const b = ['\\uDC00', `y${z}`].join();\n"
    );
    // Other folds in the same file still happen.
    assert_eq!(
        fold("x = '\\uD800' + ('a' + 'b');"),
        "x = '\\uD800' + (\"ab\");\n"
    );
}

#[test]
fn substitution_order_is_preserved() {
    // A separator with substitutions is never folded; see `join_rejects_dynamic_separator`.
    assert_eq!(
        fold("s = `${a}` + `${b}` + ['-', `${c}`, `${d}`].join(``);"),
        "s = `${a}${b}-${c}${d}`;\n"
    );
}

#[test]
fn folding_is_idempotent() {
    let once = fold("var a = ['x', `${y}`].join('$') + '{z}' + \"\\\\\";");
    let twice = fold(&once);
    assert_eq!(once, twice);
    assert_eq!(once, "var a = `x$${y}{z}\\\\`;\n");
}

#[test]
fn rule_options_select_entry_points() {
    let source = "a = 'x' + 'y'; b = ['x', 'y'].join('');";
    let (output, _) = fold_with(
        source,
        RuleOptions {
            fold_binary: false,
            fold_join: true,
        },
    );
    assert_eq!(output, "a = 'x' + 'y';\nb = \"xy\";\n");
}

#[test]
fn join_rejects_dynamic_separator() {
    let source = "s = ['a', 'b'].join(`${sep}`);\n";
    assert_eq!(fold(source), source);
}
