//! Fixture-driven tests: every directory under `tests/fixtures` holds an
//! `input.js` and the `expected.js` it must transform into.

use std::path::{Path, PathBuf};
use strjoin::{TransformOptions, transform_source};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()))
        .replace("\r\n", "\n")
}

fn transform(path: &Path) -> String {
    let source = read(path);
    let output = transform_source(
        &path.display().to_string(),
        &source,
        &TransformOptions::default(),
    );
    assert!(
        output.diagnostics.is_empty(),
        "{}: {:?}",
        path.display(),
        output.diagnostics
    );
    output.code
}

#[test]
fn fixtures_transform_to_expected_output() {
    let mut cases: Vec<PathBuf> = std::fs::read_dir(fixtures_dir())
        .expect("fixtures directory")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_dir())
        .collect();
    cases.sort();
    assert!(!cases.is_empty(), "no fixtures found");

    let mut failures = Vec::new();
    for case in &cases {
        let actual = transform(&case.join("input.js"));
        let expected = read(&case.join("expected.js"));
        if actual.trim() != expected.trim() {
            failures.push(format!(
                "should {}\n--- expected\n{}\n--- actual\n{}",
                case.file_name().unwrap_or_default().to_string_lossy().replace('-', " "),
                expected.trim(),
                actual.trim()
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}

#[test]
fn should_not_handle_cases() {
    let path = fixtures_dir().join("should-not-handle-cases.js");
    let output = transform_source(
        "should-not-handle-cases.js",
        &read(&path),
        &TransformOptions::default(),
    );
    assert!(!output.changed);
    assert_eq!(output.stats.total_folds(), 0);
    assert_eq!(output.code.trim(), read(&path).trim());
}

#[test]
fn expected_outputs_are_fixed_points() {
    for entry in std::fs::read_dir(fixtures_dir()).expect("fixtures directory") {
        let case = entry.expect("fixture entry").path();
        if !case.is_dir() {
            continue;
        }
        let expected_path = case.join("expected.js");
        let expected = read(&expected_path);
        assert_eq!(
            transform(&expected_path).trim(),
            expected.trim(),
            "{} is not stable",
            expected_path.display()
        );
    }
}
