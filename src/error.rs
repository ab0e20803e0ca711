//! Error types for rootdigits
//!
//! All fallible operations return `RootResult<T>`. Probing a digit past the
//! end of a finite sequence is not an error; those lookups return `None`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rootdigits operations
pub type RootResult<T> = Result<T, RootError>;

/// All errors that can occur in rootdigits
#[derive(Error, Debug)]
pub enum RootError {
    // Radicand preconditions
    #[error("Radicand numerator must be non-negative, got {0}")]
    NegativeNumerator(String),

    #[error("Radicand denominator must be positive, got {0}")]
    NonPositiveDenominator(String),

    // Query input errors
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid positions: {0}")]
    InvalidPositions(String),

    // Decode errors
    #[error("Encoded digits are empty")]
    EmptyEncoding,

    #[error("Unsupported digits encoding version: {0}")]
    UnsupportedVersion(u8),

    #[error("Encoded digits truncated at byte {0}")]
    Truncated(usize),

    #[error("Invalid byte {byte} at offset {offset} in encoded digits")]
    InvalidByte { offset: usize, byte: u8 },

    #[error("Invalid text encoding: {0}")]
    InvalidText(#[from] hex::FromHexError),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl RootError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Check if the error came from decoding a serialized digit set
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyEncoding
                | Self::UnsupportedVersion(_)
                | Self::Truncated(_)
                | Self::InvalidByte { .. }
                | Self::InvalidText(_)
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NegativeNumerator(_) => Some("Roots are only computed for non-negative radicands"),
            Self::InvalidPattern(_) => Some("Patterns are decimal digits, e.g. 1414"),
            Self::InvalidPositions(_) => Some("Use ranges like 0..10,15,20..25"),
            Self::ConfigInvalid { .. } => Some("Run: rootdigits config init --force"),
            _ => None,
        }
    }
}
