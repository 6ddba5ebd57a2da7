use std::path::PathBuf;

use super::driver::{FileReport, RunReport};
use super::reporter::Reporter;
use crate::Diagnostic;

fn file_report(path: &str, changed: bool, folds: usize, errors: usize) -> FileReport {
    FileReport {
        path: PathBuf::from(path),
        output_path: None,
        changed,
        binary_folds: folds,
        join_folds: 0,
        skipped: 0,
        diagnostics: (0..errors)
            .map(|_| Diagnostic::error(path, 0, 1, "Expression expected.", 2002))
            .collect(),
        code: None,
    }
}

#[test]
fn renders_location_code_and_snippet() {
    let source = "let a = 1;\nx = 'a' + ;\n";
    let diag = Diagnostic::error("a.js", 21, 1, "Expression expected.", 2002);

    let output = Reporter::new(false).render(&[diag], source);

    assert_eq!(
        output,
        "a.js:2:11 - error SJ2002: Expression expected.\n    2   x = 'a' + ;\n                  ~\n"
    );
}

#[test]
fn columns_count_characters() {
    let source = "s = '\u{e9}\u{e9}' + ;";
    let start = source.find(';').expect("semicolon") as u32;
    let diag = Diagnostic::error("b.js", start, 1, "Expression expected.", 2002);

    let output = Reporter::new(false).render(&[diag], source);
    assert!(output.starts_with("b.js:1:12 - error"), "{output}");
}

#[test]
fn zero_length_diagnostic_still_underlines() {
    let diag = Diagnostic::error("c.js", 3, 0, "';' expected.", 2001);
    let output = Reporter::new(false).render(&[diag], "abc");
    assert!(output.ends_with("           ~\n"), "{output:?}");
}

#[test]
fn summary_counts_files_and_folds() {
    let reporter = Reporter::new(false);
    let report = RunReport {
        files: vec![
            file_report("a.js", true, 3, 0),
            file_report("b.js", false, 0, 0),
        ],
        changed_files: 1,
        total_folds: 3,
        files_with_errors: 0,
    };
    assert_eq!(reporter.format_summary(&report, false), "2 files, 1 changed, 3 folds");
    assert_eq!(
        reporter.format_summary(&report, true),
        "2 files, 1 would change, 3 folds"
    );
}

#[test]
fn summary_mentions_files_with_errors() {
    let reporter = Reporter::new(false);
    let report = RunReport {
        files: vec![file_report("bad.js", false, 0, 2)],
        changed_files: 0,
        total_folds: 0,
        files_with_errors: 1,
    };
    assert_eq!(
        reporter.format_summary(&report, false),
        "1 file, 0 changed, 0 folds, 1 file with errors"
    );
}

#[test]
fn would_change_line() {
    assert_eq!(
        Reporter::new(false).format_would_change("src/a.js"),
        "would fold src/a.js"
    );
}
