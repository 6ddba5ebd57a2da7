use super::*;
use strjoin_parser::parser::ParserState;
use strjoin_parser::parser::node::QuasiValue;

fn print_source(source: &str) -> String {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    assert!(parser.get_diagnostics().is_empty(), "parse errors in {source:?}");
    let mut printer = Printer::new(&parser.arena, PrinterOptions::default()).with_source_text(source);
    printer.emit(root);
    printer.take_output()
}

fn print_node(arena: &NodeArena, idx: NodeIndex, options: PrinterOptions) -> String {
    let mut printer = Printer::new(arena, options);
    printer.emit(idx);
    printer.take_output()
}

#[test]
fn test_normalized_layout() {
    assert_eq!(
        print_source("const a='x',b;a=b+1\nreturn"),
        "const a = 'x', b;\na = b + 1;\nreturn;\n"
    );
}

#[test]
fn test_blocks_are_indented() {
    assert_eq!(
        print_source("{ let x = 1; { y; } {} }"),
        "{\n    let x = 1;\n    {\n        y;\n    }\n    {}\n}\n"
    );
}

#[test]
fn test_source_literals_keep_quotes_and_escapes() {
    assert_eq!(print_source(r#"x = 'it\'s' + "\x41";"#), "x = 'it\\'s' + \"\\x41\";\n");
}

#[test]
fn test_expressions() {
    assert_eq!(
        print_source("a ? b.c[d](...e, f) : !(g || h) && typeof i"),
        "a ? b.c[d](...e, f) : !(g || h) && typeof i;\n"
    );
    assert_eq!(print_source("- -x; + +y; -+z"), "- -x;\n+ +y;\n-+z;\n");
}

#[test]
fn test_array_holes() {
    assert_eq!(print_source("[a, , b]"), "[a,, b];\n");
    assert_eq!(print_source("[a, ,]"), "[a,,];\n");
    assert_eq!(print_source("[,]"), "[,];\n");
    assert_eq!(print_source("[]"), "[];\n");
}

#[test]
fn test_templates_print_raw_text() {
    assert_eq!(
        print_source("t = `a\\n${x}\\u0041${`in${y}`}end`; tag`raw\\d`"),
        "t = `a\\n${x}\\u0041${`in${y}`}end`;\ntag`raw\\d`;\n"
    );
}

#[test]
fn test_synthesized_string_escaping() {
    let mut arena = NodeArena::new();
    let lit = arena.create_string_literal("a\"b'c\\\n\t\u{1}\0\u{2028}");
    assert_eq!(
        print_node(&arena, lit, PrinterOptions::default()),
        "\"a\\\"b'c\\\\\\n\\t\\u0001\\0\\u2028\""
    );
    assert_eq!(
        print_node(&arena, lit, PrinterOptions { single_quote: true }),
        "'a\"b\\'c\\\\\\n\\t\\u0001\\0\\u2028'"
    );
}

#[test]
fn test_nul_before_digit_is_not_octal() {
    let mut arena = NodeArena::new();
    let lit = arena.create_string_literal("\u{0}1");
    assert_eq!(
        print_node(&arena, lit, PrinterOptions::default()),
        "\"\\x001\""
    );
}

#[test]
fn test_synthesized_template() {
    let mut arena = NodeArena::new();
    let head = arena.create_template_element(
        QuasiValue::Cooked {
            raw: "a\\`".into(),
            cooked: "a`".into(),
        },
        false,
    );
    let tail = arena.create_template_element(QuasiValue::Plain("b".into()), true);
    let x = arena.create_identifier("x");
    let template = arena.create_template(vec![head, tail], vec![x]).unwrap();
    assert_eq!(
        print_node(&arena, template, PrinterOptions::default()),
        "`a\\`${x}b`"
    );
}

#[test]
fn test_replaced_literal_is_printed_from_data() {
    let source = "x = 'a' + 'b';";
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    let mut arena = parser.into_arena();

    let sf = arena.get_source_file_at(root).unwrap();
    let stmt = arena.get(sf.statements.nodes[0]).unwrap();
    let assign = arena.get_wrapped_expr(stmt).unwrap().expression;
    let plus = arena.get_binary_expr(arena.get(assign).unwrap()).unwrap().right;

    let folded = arena.create_string_literal("ab");
    assert!(arena.replace(plus, folded));

    let mut printer = Printer::new(&arena, PrinterOptions::default()).with_source_text(source);
    printer.emit(root);
    assert_eq!(printer.get_output(), "x = \"ab\";\n");
}

#[test]
fn test_folded_string_in_prologue_is_parenthesized() {
    let source = "'use ' + 'strict'; 'a' + 'b';";
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    let mut arena = parser.into_arena();

    let sf = arena.get_source_file_at(root).unwrap();
    let statements = sf.statements.nodes.clone();
    for stmt in statements {
        let expr = arena
            .get_wrapped_expr(arena.get(stmt).unwrap())
            .unwrap()
            .expression;
        let folded = arena.create_string_literal("use strict");
        arena.replace(expr, folded);
    }

    let mut printer = Printer::new(&arena, PrinterOptions::default()).with_source_text(source);
    printer.emit(root);
    assert_eq!(
        printer.get_output(),
        "(\"use strict\");\n(\"use strict\");\n"
    );
}

#[test]
fn test_prologue_ends_at_first_other_statement() {
    let source = "x; 'a' + 'b';";
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    let mut arena = parser.into_arena();

    let sf = arena.get_source_file_at(root).unwrap();
    let second = sf.statements.nodes[1];
    let expr = arena
        .get_wrapped_expr(arena.get(second).unwrap())
        .unwrap()
        .expression;
    let folded = arena.create_string_literal("ab");
    arena.replace(expr, folded);

    let mut printer = Printer::new(&arena, PrinterOptions::default()).with_source_text(source);
    printer.emit(root);
    assert_eq!(printer.get_output(), "x;\n\"ab\";\n");
}

#[test]
fn test_deep_subtrees_are_copied_from_source() {
    let source = format!("x = {};", vec!["a"; MAX_AST_DEPTH as usize + 50].join("+"));
    let output = print_source(&source);
    // The part below the depth limit keeps its original spacing.
    assert!(output.starts_with("x = a+a"));
    assert!(output.ends_with("a + a;\n"));
    assert_eq!(output.matches('a').count(), MAX_AST_DEPTH as usize + 50);
}

#[test]
fn test_comments_are_kept_around_statements() {
    let source = "// head\nconst a = 1; /* same line */\n/* before b */\nb( /* inside */ c);\n{\n  // in block\n  d;\n  // block end\n}\n// tail\n";
    assert_eq!(
        print_source(source),
        "// head\nconst a = 1; /* same line */\n/* before b */\nb(c); /* inside */\n{\n    // in block\n    d;\n    // block end\n}\n// tail\n"
    );
}

#[test]
fn test_comments_in_empty_file_and_empty_block() {
    assert_eq!(print_source("/* only */\n// comments\n"), "/* only */\n// comments\n");
    assert_eq!(print_source("{ /* empty */ }\nx;"), "{} /* empty */\nx;\n");
}

#[test]
fn test_comments_need_source_text() {
    let source = "// gone\nx;";
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    assert_eq!(print_node(&parser.arena, root, PrinterOptions::default()), "x;\n");
}

#[test]
fn test_copied_subtree_comments_are_written_once() {
    let chain = vec!["a"; MAX_AST_DEPTH as usize + 50].join("+");
    let source = format!("x = {};", chain.replacen("a+", "a/*deep*/+", 1));
    let output = print_source(&source);
    assert_eq!(output.matches("/*deep*/").count(), 1);
    assert!(output.starts_with("x = a/*deep*/+a"));
}
