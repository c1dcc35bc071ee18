//! Color error types

use thiserror::Error;

/// Errors raised while reading color input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not a hex color the engine can split into three channels
    #[error("invalid color format {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },

    /// Unknown color scheme name
    #[error("unknown color scheme {0:?} (expected \"light\" or \"dark\")")]
    UnknownScheme(String),
}

impl ColorError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;
