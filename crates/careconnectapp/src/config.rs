//! # Configuration
//!
//! CareConnect configuration is loaded with [`confique`], layering environment
//! variables over a TOML file over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `CARECONNECT_SEED_FILE`, `CARECONNECT_OUTPUT`.
//! 2. **Config file**: `careconnect.toml` in the OS config directory (via the
//!    `directories` crate), or an explicit path passed to [`CareConfig::load_from`].
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Command-line flags are applied by the CLI on top of the loaded value.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `seed_file` | none | JSON array of patients to start the session registry with |
//! | `output` | `text` | Output mode: `text` or `json` |

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{CareError, Result};

pub const CONFIG_FILENAME: &str = "careconnect.toml";

/// Read from a plain string so the TOML file and environment variables share one
/// parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputMode {
    type Err = CareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            other => Err(CareError::Config(format!(
                "unknown output mode '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for OutputMode {
    type Error = CareError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Text => f.write_str("text"),
            OutputMode::Json => f.write_str("json"),
        }
    }
}

/// Configuration for careconnect, stored in `careconnect.toml`.
#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct CareConfig {
    /// JSON file holding the patients the session starts with.
    #[config(env = "CARECONNECT_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// How results are written: "text" or "json".
    #[config(env = "CARECONNECT_OUTPUT", default = "text")]
    pub output: OutputMode,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            output: OutputMode::Text,
        }
    }
}

impl CareConfig {
    /// Default location of the config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "careconnect", "careconnect")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Loads from the environment and the default config file.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::builder().env().load()?),
        }
    }

    /// Loads from the environment and `path`. A missing file is not an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::builder().env().file(path.as_ref()).load()?)
    }
}
