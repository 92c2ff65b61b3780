//! Conversion config (asciify.yaml) parsing.
//!
//! The config file supplies default conversion options. Command-line flags
//! take precedence over it, and it takes precedence over built-in defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::{AsciiError, Result};
use crate::pipeline::{ConvertOptions, DEFAULT_WIDTH};

/// Config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "asciify.yaml";

/// Conversion defaults loaded from asciify.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output width in characters.
    pub width: Option<u32>,

    /// Reverse the brightness ramp.
    pub reverse: Option<bool>,
}

impl Config {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AsciiError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `asciify.yaml` from a directory, or defaults if there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| AsciiError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        if config.width == Some(0) {
            return Err(AsciiError::Config {
                message: "width must be a positive integer".to_string(),
                help: None,
            });
        }

        Ok(config)
    }

    /// Merge command-line values over this config.
    ///
    /// `reverse` is a flag, so it can only switch reversal on.
    pub fn resolve(&self, width: Option<u32>, reverse: bool) -> ConvertOptions {
        ConvertOptions {
            width: width.or(self.width).unwrap_or(DEFAULT_WIDTH),
            reverse: reverse || self.reverse.unwrap_or(false),
        }
    }
}
