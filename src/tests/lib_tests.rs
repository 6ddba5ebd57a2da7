use super::*;

fn transform(source: &str) -> TransformOutput {
    transform_source("input.js", source, &TransformOptions::default())
}

#[test]
fn test_transform_reports_changes_and_stats() {
    let output = transform("const s = 'a' + 'b';\nconst t = ['x', 'y'].join('-');\n");
    assert_eq!(output.code, "const s = \"ab\";\nconst t = \"x-y\";\n");
    assert!(output.changed);
    assert_eq!(output.stats.binary_folds, 1);
    assert_eq!(output.stats.join_folds, 1);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_unchanged_file_is_reprinted() {
    let output = transform("let x = a+b");
    assert!(!output.changed);
    assert_eq!(output.code, "let x = a + b;\n");
}

#[test]
fn test_file_with_diagnostics_is_returned_verbatim() {
    let source = "const s = 'a' + ;\nconst t = 'b' + 'c';\n";
    let output = transform(source);
    assert_eq!(output.code, source);
    assert!(!output.changed);
    assert_eq!(output.stats, TransformStats::default());
    assert!(!output.diagnostics.is_empty());
    assert_eq!(output.diagnostics[0].file, "input.js");
}

#[test]
fn test_printer_options_are_applied() {
    let options = TransformOptions {
        printer: PrinterOptions { single_quote: true },
        ..TransformOptions::default()
    };
    let output = transform_source("a.js", "x = \"it\" + \"'s\";", &options);
    assert_eq!(output.code, "x = 'it\\'s';\n");
}

#[test]
fn test_disabled_rules_leave_code_alone() {
    let options = TransformOptions {
        rules: RuleOptions {
            fold_binary: false,
            fold_join: false,
        },
        ..TransformOptions::default()
    };
    let output = transform_source("a.js", "x = 'a' + 'b';", &options);
    assert!(!output.changed);
    assert_eq!(output.code, "x = 'a' + 'b';\n");
}

#[test]
fn test_log_format_parsing() {
    use crate::tracing_config::LogFormat;
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("fancy"), LogFormat::Text);
}

#[test]
fn test_comments_survive_a_fold() {
    let output = transform("// keep me\nconst a = 'a' + 'b'; /* note */\n");
    assert!(output.changed);
    assert_eq!(output.code, "// keep me\nconst a = \"ab\"; /* note */\n");
}

#[test]
fn test_lone_surrogate_is_not_folded() {
    let output = transform("const a = '\\uD800' + 'x';\n");
    assert!(!output.changed);
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.code, "const a = '\\uD800' + 'x';\n");
}

#[test]
fn test_parenthesized_operand_is_folded() {
    let output = transform("const a = 'a' + ('b' + 'c');\n");
    assert_eq!(output.code, "const a = \"abc\";\n");
    assert_eq!(output.stats.binary_folds, 2);
}
