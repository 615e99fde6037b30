//! Place Vault error types

use thiserror::Error;

/// Place Vault error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Nearby enrichment lookup failed as a whole (transport or decode)
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Place Vault operations
pub type Result<T> = std::result::Result<T, Error>;
