//! Configuration schema for rootdigits
//!
//! Configuration is stored at `~/.config/rootdigits/config.toml`

use crate::memo::DEFAULT_CHUNK_SIZE;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Digit buffer settings
    pub memo: MemoConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_format: "text".to_string(),
        }
    }
}

/// Digit buffer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoConfig {
    /// Digits computed per background cycle
    pub chunk_size: usize,
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Digits printed per line in plain output (0 = one line)
    pub digits_per_line: usize,

    /// Digits printed when no count is given
    pub default_count: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            digits_per_line: 50,
            default_count: 100,
        }
    }
}
