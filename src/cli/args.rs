use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the strjoin binary.
#[derive(Parser, Debug)]
#[command(
    name = "strjoin",
    version,
    about = "Fold string concatenations and array joins of literals into single literals"
)]
pub struct CliArgs {
    // ==================== Project ====================
    /// Path to strjoin.json or a directory containing it.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,

    // ==================== Output ====================
    /// Write transformed files under this directory instead of in place.
    #[arg(long = "outDir", alias = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Print transformed code to stdout instead of writing files.
    #[arg(long)]
    pub stdout: bool,

    /// Report files that would change without writing them; exits with 1 if any would.
    #[arg(long)]
    pub check: bool,

    /// Print a JSON report of every processed file.
    #[arg(long)]
    pub json: bool,

    /// Enable color in diagnostics and the summary.
    #[arg(long)]
    pub pretty: Option<bool>,

    // ==================== Rules ====================
    /// Do not fold `+` chains of string literals and templates.
    #[arg(long = "no-binary", alias = "noBinary")]
    pub no_binary: bool,

    /// Do not fold `[...].join(separator)` calls.
    #[arg(long = "no-join", alias = "noJoin")]
    pub no_join: bool,

    /// Quote folded string literals with `'`.
    #[arg(long = "single-quote", alias = "singleQuote")]
    pub single_quote: bool,

    // ==================== Input Files ====================
    /// Files or directories to transform.
    #[arg(value_name = "PATH")]
    pub inputs: Vec<PathBuf>,
}
