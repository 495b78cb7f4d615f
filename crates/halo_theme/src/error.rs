//! Theme error types

use crate::conformance::ContrastCheck;
use std::path::PathBuf;
use thiserror::Error;

/// Theme construction and loading errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// One or more color pairs fall below WCAG contrast thresholds
    #[error("theme {theme:?} fails contrast requirements: {}", summarize(.violations))]
    InvalidTheme {
        theme: String,
        violations: Vec<ContrastCheck>,
    },

    /// A non-color token is out of range
    #[error("invalid token {token}: {reason}")]
    InvalidToken { token: &'static str, reason: String },

    /// Preset id not recognized
    #[error("unknown theme preset {0:?}")]
    UnknownPreset(String),

    /// Theme config is not valid TOML or has the wrong shape
    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Theme could not be written as TOML
    #[error("failed to serialize theme config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Theme file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn summarize(violations: &[ContrastCheck]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
