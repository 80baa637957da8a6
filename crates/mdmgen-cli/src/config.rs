//! mdmgen.toml configuration

use anyhow::{Context, Result};
use mdmgen_codegen::GeneratorOptions;
use mdmgen_codegen::refs::DEFAULT_VAR_NAME;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file picked up from the working directory when no
/// `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "mdmgen.toml";

/// Contents of an `mdmgen.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Options for the `commands` subcommand.
    pub generator: GeneratorOptions,

    /// Options for the `ddm-refs` subcommand.
    pub refs: RefsConfig,
}

/// The `[refs]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RefsConfig {
    /// Go package name of the generated file.
    pub package: String,

    /// Name of the generated map variable.
    pub name: String,
}

impl Default for RefsConfig {
    fn default() -> Self {
        Self {
            package: "main".to_string(),
            name: DEFAULT_VAR_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
            .with_context(|| format!("Invalid config: {:?}", path.as_ref()))
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load the explicit config file, or `mdmgen.toml` if it exists, or the
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    tracing::info!(path = %default.display(), "using default config file");
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
