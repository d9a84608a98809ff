//! Configuration file support for textor
//!
//! Loads `.textor.toml` from current directory or parent directories.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: RulesConfig,
    pub paths: PathsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Apply the structural rule set (default: true)
    pub structural: Option<bool>,
    /// Apply the translation table (default: true)
    pub lexical: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Glob patterns to exclude from processing
    pub exclude: Vec<String>,
    /// File extensions to process when walking directories (default: rs)
    pub extensions: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text", "json" or "diff"
    pub format: Option<String>,
}

impl Config {
    /// Load config from `.textor.toml` searching from current directory upward
    pub fn load() -> Result<Option<(Config, PathBuf)>> {
        Self::load_from(std::env::current_dir()?)
    }

    /// Load config searching from the given directory upward
    pub fn load_from(start_dir: PathBuf) -> Result<Option<(Config, PathBuf)>> {
        let mut current = Some(start_dir.as_path());

        while let Some(dir) = current {
            let config_path = dir.join(".textor.toml");
            if config_path.exists() {
                let config = Self::load_path(&config_path)?;
                return Ok(Some((config, config_path)));
            }
            current = dir.parent();
        }

        Ok(None)
    }

    /// Load config from a specific path
    pub fn load_path(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Check whether a walked file has one of the configured extensions
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };

        if self.paths.extensions.is_empty() {
            ext == "rs"
        } else {
            self.paths.extensions.iter().any(|e| e == ext)
        }
    }

    /// Check if a path should be excluded based on config patterns
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.paths.exclude {
            // Try glob matching
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
                // Also try matching against just the file/dir name
                if let Some(file_name) = path.file_name() {
                    if glob_pattern.matches(&file_name.to_string_lossy()) {
                        return true;
                    }
                }
            }

            // Also do simple prefix/contains matching for directory patterns
            if pattern.ends_with('/') {
                let dir_pattern = pattern.trim_end_matches('/');
                if path_str.contains(&format!("/{}/", dir_pattern))
                    || path_str.starts_with(&format!("{}/", dir_pattern))
                {
                    return true;
                }
            }
        }

        false
    }
}
