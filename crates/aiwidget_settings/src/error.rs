//! Settings error types

use thiserror::Error;

/// Errors raised while bootstrapping widget settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The widget cannot start without both identifiers
    #[error("applicationId or botId is not defined")]
    MissingIdentity,

    /// The settings backend reported a failure
    #[error("settings backend failed: {0}")]
    Backend(String),

    /// The backend answered without a part this strategy needs
    #[error("settings response is missing the {0}")]
    IncompleteResponse(&'static str),

    /// A session was requested before one was resolved
    #[error(
        "widget session is not initialized; resolve settings before reading the session"
    )]
    SessionNotInitialized,

    /// A session could not be written to the cache
    #[error("failed to encode session cache: {0}")]
    CacheEncode(#[from] serde_json::Error),
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;
