use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::Options;

pub const CONFIG_FILE_NAME: &str = ".decommentrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Keep `/*! ... */` comments.
    #[serde(default)]
    pub safe: bool,
    /// Drop every blank line following a removed comment line.
    #[serde(default)]
    pub trim: bool,
    /// Glob patterns for paths skipped while walking directories.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// File extensions picked up while walking directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_extensions() -> Vec<String> {
    [
        "js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx", "css", "scss", "less", "html", "htm",
        "xml", "svg", "vue", "json", "jsonc",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            safe: false,
            trim: false,
            ignores: default_ignores(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if let Some(ext) = self.extensions.iter().find(|e| e.is_empty() || e.contains('/')) {
            anyhow::bail!("Invalid extension in 'extensions': \"{}\"", ext);
        }

        Ok(())
    }

    pub fn options(&self) -> Options {
        Options {
            safe: self.safe,
            trim: self.trim,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` looking for a config file, stopping at the repository root.
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
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Load and validate a config file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            path: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
