//! Error handling module
//!
//! Defines error types and handling logic used in the project

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// The VK API could not be reached or returned a malformed body
    #[error("VK API unavailable: {0}")]
    ServiceUnavailable(String),

    /// The VK API accepted the call but reported a logical failure
    #[error("VK method error {code}: {message}")]
    Method {
        /// Error code reported by the service
        code: i64,
        /// Error message reported by the service
        message: String,
    },

    /// A success payload did not match the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Caller tried to supply an injected authentication parameter
    #[error("Parameter name is reserved: {0}")]
    ReservedParameter(String),

    /// A user lookup returned no record
    #[error("No user record returned for {0}")]
    UserNotFound(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
