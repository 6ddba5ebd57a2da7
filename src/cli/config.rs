use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cli::args::CliArgs;
use crate::{PrinterOptions, RuleOptions, TransformOptions};

pub const CONFIG_FILE_NAME: &str = "strjoin.json";
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];
pub const DEFAULT_EXCLUDE: &[&str] = &["**/node_modules/**"];

/// Accepts `true` as well as `"true"` for boolean options.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

/// Contents of a `strjoin.json` file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StrjoinConfig {
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
    #[serde(default)]
    pub out_dir: Option<String>,
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub rules: Option<RulesConfig>,
    #[serde(default)]
    pub printer: Option<PrinterConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub fold_binary: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub fold_join: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PrinterConfig {
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub single_quote: Option<bool>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, .. } => {
                write!(f, "failed to read config: {}", path.display())
            }
            ConfigError::Parse {
                path: Some(path), ..
            } => write!(f, "failed to parse config: {}", path.display()),
            ConfigError::Parse { path: None, .. } => write!(f, "failed to parse config JSON"),
            ConfigError::InvalidGlob { pattern, .. } => {
                write!(f, "invalid glob pattern '{pattern}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::InvalidGlob { source, .. } => Some(source),
        }
    }
}

pub fn parse_config(source: &str) -> Result<StrjoinConfig, ConfigError> {
    serde_json::from_str(source).map_err(|source| ConfigError::Parse { path: None, source })
}

pub fn load_config(path: &Path) -> Result<StrjoinConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: Some(path.to_path_buf()),
        source,
    })
}

/// Locate the config file: `--project` (a file, or a directory holding
/// `strjoin.json`), else `strjoin.json` in `cwd` if present.
pub fn find_config(project: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    match project {
        Some(project) => {
            let project = cwd.join(project);
            if project.is_dir() {
                Some(project.join(CONFIG_FILE_NAME))
            } else {
                Some(project)
            }
        }
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    }
}

/// Config merged with command-line overrides, with globs compiled.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Directory relative paths and globs are resolved against.
    pub base_dir: PathBuf,
    pub include: Option<GlobSet>,
    pub exclude: GlobSet,
    pub extensions: Vec<String>,
    pub out_dir: Option<PathBuf>,
    pub options: TransformOptions,
}

impl ResolvedConfig {
    /// Whether a file found by walking a directory should be transformed.
    /// `path` is relative to `base_dir` when possible.
    pub fn accepts(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext));
        if !has_extension {
            return false;
        }
        let relative = path.strip_prefix(&self.base_dir).unwrap_or(path);
        if self.exclude.is_match(relative) {
            return false;
        }
        self.include
            .as_ref()
            .is_none_or(|include| include.is_match(relative))
    }
}

pub fn resolve_config(
    config: &StrjoinConfig,
    base_dir: &Path,
    args: &CliArgs,
    cwd: &Path,
) -> Result<ResolvedConfig, ConfigError> {
    let include = config
        .include
        .as_deref()
        .map(|patterns| build_glob_set(patterns))
        .transpose()?;
    let exclude = match config.exclude.as_deref() {
        Some(patterns) => build_glob_set(patterns)?,
        None => build_glob_set(DEFAULT_EXCLUDE)?,
    };

    let extensions = config
        .extensions
        .as_ref()
        .map(|exts| {
            exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect()
        })
        .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect());

    let out_dir = match (&args.out_dir, &config.out_dir) {
        (Some(cli), _) => Some(cwd.join(cli)),
        (None, Some(configured)) => Some(base_dir.join(configured)),
        (None, None) => None,
    };

    let mut rules = RuleOptions::default();
    if let Some(configured) = &config.rules {
        if let Some(fold_binary) = configured.fold_binary {
            rules.fold_binary = fold_binary;
        }
        if let Some(fold_join) = configured.fold_join {
            rules.fold_join = fold_join;
        }
    }
    if args.no_binary {
        rules.fold_binary = false;
    }
    if args.no_join {
        rules.fold_join = false;
    }

    let mut printer = PrinterOptions::default();
    if let Some(single_quote) = config.printer.as_ref().and_then(|p| p.single_quote) {
        printer.single_quote = single_quote;
    }
    if args.single_quote {
        printer.single_quote = true;
    }

    Ok(ResolvedConfig {
        base_dir: base_dir.to_path_buf(),
        include,
        exclude,
        extensions,
        out_dir,
        options: TransformOptions { rules, printer },
    })
}

fn build_glob_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = Glob::new(pattern).map_err(|source| ConfigError::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ConfigError::InvalidGlob {
        pattern: patterns
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join(", "),
        source,
    })
}
