//! File discovery, parallel transformation and output writing.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::cli::args::CliArgs;
use crate::cli::config::{ResolvedConfig, StrjoinConfig, find_config, load_config, resolve_config};
use crate::{Diagnostic, TransformOutput, transform_source};

/// Outcome for one input file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    pub changed: bool,
    pub binary_folds: usize,
    pub join_folds: usize,
    pub skipped: usize,
    pub diagnostics: Vec<Diagnostic>,
    /// Transformed text, kept only for `--stdout`.
    #[serde(skip)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub changed_files: usize,
    pub total_folds: usize,
    pub files_with_errors: usize,
}

impl RunReport {
    fn from_files(files: Vec<FileReport>) -> Self {
        let changed_files = files.iter().filter(|f| f.changed).count();
        let total_folds = files.iter().map(|f| f.binary_folds + f.join_folds).sum();
        let files_with_errors = files.iter().filter(|f| !f.diagnostics.is_empty()).count();
        RunReport {
            files,
            changed_files,
            total_folds,
            files_with_errors,
        }
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.files.iter().flat_map(|f| f.diagnostics.iter())
    }
}

/// How transformed files leave the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputMode {
    InPlace,
    OutDir,
    Stdout,
    Check,
}

pub fn run(args: &CliArgs, cwd: &Path) -> Result<RunReport> {
    let resolved = load_resolved_config(args, cwd)?;
    let mode = if args.check {
        OutputMode::Check
    } else if args.stdout {
        OutputMode::Stdout
    } else if resolved.out_dir.is_some() {
        OutputMode::OutDir
    } else {
        OutputMode::InPlace
    };

    let inputs: Vec<PathBuf> = if args.inputs.is_empty() {
        vec![resolved.base_dir.clone()]
    } else {
        args.inputs.iter().map(|input| cwd.join(input)).collect()
    };
    let files = collect_files(&inputs, &resolved)?;
    info!(files = files.len(), mode = ?mode, "transforming");

    let reports = files
        .par_iter()
        .map(|path| process_file(path, &resolved, mode))
        .collect::<Result<Vec<_>>>()?;

    Ok(RunReport::from_files(reports))
}

pub fn load_resolved_config(args: &CliArgs, cwd: &Path) -> Result<ResolvedConfig> {
    let (config, base_dir) = match find_config(args.project.as_deref(), cwd) {
        Some(path) => {
            debug!(config = %path.display(), "loading config");
            let config = load_config(&path)?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            (config, base_dir)
        }
        None => (StrjoinConfig::default(), cwd.to_path_buf()),
    };
    Ok(resolve_config(&config, &base_dir, args, cwd)?)
}

/// Expand inputs into a sorted, de-duplicated file list. Explicit file
/// arguments are always kept; directory contents are filtered by the
/// config's extensions and include/exclude globs.
pub fn collect_files(inputs: &[PathBuf], config: &ResolvedConfig) -> Result<Vec<PathBuf>> {
    let mut seen = FxHashSet::default();
    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            if seen.insert(input.clone()) {
                files.push(input.clone());
            }
            continue;
        }
        if !input.is_dir() {
            bail!("input path does not exist: {}", input.display());
        }
        for entry in WalkDir::new(input).follow_links(true) {
            let entry =
                entry.with_context(|| format!("failed to walk {}", input.display()))?;
            let path = entry.path();
            if entry.file_type().is_file()
                && config.accepts(path)
                && !is_inside_out_dir(path, config)
                && seen.insert(path.to_path_buf())
            {
                files.push(path.to_path_buf());
            }
        }
    }
    files.sort();
    Ok(files)
}

fn is_inside_out_dir(path: &Path, config: &ResolvedConfig) -> bool {
    config
        .out_dir
        .as_deref()
        .is_some_and(|out_dir| path.starts_with(out_dir))
}

fn process_file(path: &Path, config: &ResolvedConfig, mode: OutputMode) -> Result<FileReport> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path.display().to_string();
    let TransformOutput {
        code,
        changed,
        stats,
        diagnostics,
    } = transform_source(&file_name, &source, &config.options);

    let output_path = match mode {
        OutputMode::InPlace if changed => Some(path.to_path_buf()),
        OutputMode::OutDir => config
            .out_dir
            .as_deref()
            .map(|out_dir| output_path_for(path, &config.base_dir, out_dir)),
        _ => None,
    };
    if let Some(output_path) = &output_path {
        write_output(output_path, &code)?;
        debug!(input = %path.display(), output = %output_path.display(), "wrote");
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        output_path,
        changed,
        binary_folds: stats.binary_folds,
        join_folds: stats.join_folds,
        skipped: stats.skipped,
        diagnostics,
        code: (mode == OutputMode::Stdout).then_some(code),
    })
}

/// Mirror `path` under `out_dir`, relative to `base_dir` when it lies
/// inside it.
pub fn output_path_for(path: &Path, base_dir: &Path, out_dir: &Path) -> PathBuf {
    match path.strip_prefix(base_dir) {
        Ok(relative) => out_dir.join(relative),
        Err(_) => out_dir.join(path.file_name().unwrap_or(path.as_os_str())),
    }
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
