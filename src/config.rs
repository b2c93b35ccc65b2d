use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::Deserialize;

use crate::core::file_scanner::compile_patterns;

pub const CONFIG_FILE_NAME: &str = ".contextrc.json";

pub const DEFAULT_OUTPUT: &str = "context.md";

pub const DEFAULT_INCLUDE: &[&str] = &["**/*.js", "**/*.jsx", "**/*.ts", "**/*.tsx"];

pub const DEFAULT_EXCLUDE: &[&str] = &[
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/.git/**",
    "**/coverage/**",
    "**/*.test.*",
    "**/*.spec.*",
];

pub const DEFAULT_MAX_IMPORT_DEPTH: usize = 3;

/// Project configuration file contents. Every field is optional in the file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_include")]
    pub include: Vec<String>,
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_true")]
    pub follow_imports: bool,
    #[serde(default = "default_true")]
    pub include_comments: bool,
    #[serde(default = "default_max_import_depth")]
    pub max_import_depth: usize,
    #[serde(default = "default_true")]
    pub include_file_structure: bool,
}

fn default_include() -> Vec<String> {
    DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect()
}

fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_import_depth() -> usize {
    DEFAULT_MAX_IMPORT_DEPTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude: default_exclude(),
            output: default_output(),
            follow_imports: true,
            include_comments: true,
            max_import_depth: default_max_import_depth(),
            include_file_structure: true,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `include` or `exclude` is invalid.
    pub fn validate(&self) -> Result<()> {
        compile_patterns(&self.include, "include")?;
        compile_patterns(&self.exclude, "exclude")?;

        if self.output.trim().is_empty() {
            anyhow::bail!("'output' must not be empty");
        }

        Ok(())
    }
}

/// Walk up from `start_dir` looking for the config file, stopping at the
/// first directory that contains `.git`.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from; `None` when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}

/// Fully resolved settings for one run: defaults, then the config file, then
/// command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Absolute directory to scan.
    pub directory: PathBuf,
    /// Absolute path of the document to write.
    pub output_file: PathBuf,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub follow_imports: bool,
    pub include_comments: bool,
    pub max_import_depth: usize,
    pub include_file_structure: bool,
}

impl Options {
    /// Options from `config` for `directory`, with a relative `output` taken
    /// relative to `cwd`.
    pub fn from_config(config: Config, directory: PathBuf, cwd: &Path) -> Self {
        let output_file = cwd.join(&config.output);
        Self {
            directory,
            output_file,
            include: config.include,
            exclude: config.exclude,
            follow_imports: config.follow_imports,
            include_comments: config.include_comments,
            max_import_depth: config.max_import_depth,
            include_file_structure: config.include_file_structure,
        }
    }
}
