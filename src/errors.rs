//! Unified error types for `spendlog`.
//!
//! Field validation failures and import rejections carry the exact
//! user-facing message; everything else wraps the underlying failure.

use thiserror::Error;

/// All error conditions the crate can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing/invalid config file or value)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// A single field failed validation; `message` is user-facing
    #[error("{message}")]
    Validation {
        /// Human-readable reason, surfaced per-field
        message: String,
    },

    /// An import payload was rejected as a whole; nothing was applied
    #[error("{message}")]
    Import {
        /// Single aggregate reason for rejecting the payload
        message: String,
    },

    /// Database error from the persistence layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a [`Error::Import`] with the given message.
    pub fn import(message: impl Into<String>) -> Self {
        Self::Import {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
