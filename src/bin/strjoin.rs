#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use strjoin::cli::args::CliArgs;
use strjoin::cli::driver::{self, RunReport};
use strjoin::cli::reporter::Reporter;

const EXIT_SUCCESS: i32 = 0;
/// `--check` found files that would change.
const EXIT_CHANGES_PENDING: i32 = 1;
/// Some files had parse diagnostics and were left untouched.
const EXIT_DIAGNOSTICS: i32 = 2;

fn main() -> Result<()> {
    // Initialize tracing if STRJOIN_LOG or RUST_LOG is set (zero cost otherwise).
    strjoin::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let report = driver::run(&args, &cwd)?;
    let pretty = args
        .pretty
        .unwrap_or_else(|| std::io::stderr().is_terminal());
    let reporter = Reporter::new(pretty);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
    } else {
        print_diagnostics(&reporter, &report);
        if args.stdout {
            print_code(&report);
        }
        if args.check {
            for file in report.files.iter().filter(|f| f.changed) {
                eprintln!("{}", reporter.format_would_change(&file.path.display().to_string()));
            }
        }
        if !args.stdout {
            eprintln!("{}", reporter.format_summary(&report, args.check));
        }
    }

    let code = if report.files_with_errors > 0 {
        EXIT_DIAGNOSTICS
    } else if args.check && report.changed_files > 0 {
        EXIT_CHANGES_PENDING
    } else {
        EXIT_SUCCESS
    };
    std::process::exit(code);
}

fn print_diagnostics(reporter: &Reporter, report: &RunReport) {
    for file in report.files.iter().filter(|f| !f.diagnostics.is_empty()) {
        let source = std::fs::read_to_string(&file.path).unwrap_or_default();
        // render() already ends every diagnostic with a newline
        eprint!("{}", reporter.render(&file.diagnostics, &source));
    }
}

fn print_code(report: &RunReport) {
    let several = report.files.len() > 1;
    for file in &report.files {
        let Some(code) = &file.code else {
            continue;
        };
        if several {
            println!("// {}", file.path.display());
        }
        print!("{code}");
    }
}
