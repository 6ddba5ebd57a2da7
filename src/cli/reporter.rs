use colored::Colorize;
use std::fmt::Write as _;

use crate::cli::driver::RunReport;
use crate::{Diagnostic, DiagnosticCategory};

/// Byte offsets of line starts, for offset to line/column conversion.
struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    fn build(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            memchr::memchr_iter(b'\n', source.as_bytes()).map(|pos| (pos + 1) as u32),
        );
        LineMap { line_starts }
    }

    /// Zero-based (line, column) for `offset`; the column counts chars.
    fn position(&self, offset: u32, source: &str) -> (usize, usize) {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let start = self.line_starts[line] as usize;
        let end = (offset as usize).min(source.len());
        let column = source
            .get(start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (line, column)
    }
}

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// Render the diagnostics of one file whose text is `source`.
    pub fn render(&self, diagnostics: &[Diagnostic], source: &str) -> String {
        let line_map = LineMap::build(source);
        let mut out = String::new();
        for diagnostic in diagnostics {
            out.push_str(&self.format_diagnostic(diagnostic, source, &line_map));
            out.push('\n');
        }
        out
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic, source: &str, map: &LineMap) -> String {
        let (line, column) = map.position(diagnostic.start, source);
        let mut output = format!("{}:{}:{}", diagnostic.file, line + 1, column + 1);
        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        output.push(' ');
        output.push_str(&self.format_code(diagnostic.code));
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        if let Some(line_text) = source.lines().nth(line) {
            let width = (diagnostic.length as usize).clamp(1, line_text.len().max(1));
            let underline = "~".repeat(width);
            let underline = if self.color {
                underline.red().to_string()
            } else {
                underline
            };
            let _ = write!(
                output,
                "\n  {:>3}   {}\n        {}{}",
                line + 1,
                line_text,
                " ".repeat(column),
                underline
            );
        }
        output
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = match category {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Message => "message",
        };
        if !self.color {
            return label.to_string();
        }
        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        let label = format!("SJ{code}");
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }

    /// One-line summary of a run, e.g. `3 files, 1 changed, 4 folds`.
    pub fn format_summary(&self, report: &RunReport, check: bool) -> String {
        let files = plural(report.files.len(), "file");
        let changed = if check {
            format!("{} would change", report.changed_files)
        } else {
            format!("{} changed", report.changed_files)
        };
        let folds = plural(report.total_folds, "fold");
        let mut summary = if self.color && report.changed_files > 0 {
            format!("{files}, {}, {folds}", changed.green().bold())
        } else {
            format!("{files}, {changed}, {folds}")
        };
        if report.files_with_errors > 0 {
            let errors = format!("{} with errors", plural(report.files_with_errors, "file"));
            summary.push_str(", ");
            if self.color {
                summary.push_str(&errors.red().to_string());
            } else {
                summary.push_str(&errors);
            }
        }
        summary
    }

    /// Line printed for each file `--check` finds would change.
    pub fn format_would_change(&self, path: &str) -> String {
        if self.color {
            format!("{} {path}", "would fold".yellow())
        } else {
            format!("would fold {path}")
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
