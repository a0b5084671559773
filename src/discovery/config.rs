//! Project configuration (gly.yaml) parsing.
//!
//! The config supplies defaults for command-line options. Every field is
//! optional; flags given on the command line win.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GlyError, Result};

/// Project configuration loaded from gly.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Syllable separator (default `--`).
    pub separator: Option<String>,

    /// Directory for generated gabc and LaTeX files.
    pub output_directory: Option<PathBuf>,

    /// Custom LaTeX template for previews.
    pub template: Option<PathBuf>,

    /// Print all score headers in previews.
    pub full_headers: bool,

    /// Patterns skipped when scanning directories.
    pub excludes: Vec<String>,
}

impl Config {
    /// Load config from a gly.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GlyError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content).map_err(|e| GlyError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check gly.yaml syntax".to_string()),
        })?;

        if config.separator.as_deref() == Some("") {
            return Err(GlyError::Config {
                message: "separator must not be empty".to_string(),
                help: Some("Remove the separator key to use the default --".to_string()),
            });
        }
        Ok(config)
    }

    /// Check if a path should be skipped based on exclude patterns.
    ///
    /// `*.ext` matches a suffix, `dir/*` anything below a directory named
    /// `dir`; any other pattern matches a path containing it.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }
}

fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix('*') {
        return path.ends_with(suffix);
    }
    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
    }
    path.contains(pattern)
}
