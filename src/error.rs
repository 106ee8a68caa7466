//! Error types for the gallery renderer

use thiserror::Error;

/// Result type alias for gallery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or rendering a gallery
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to fetch the project data
    #[error("Failed to fetch project data: {0}")]
    FetchError(String),

    /// Response body was not valid JSON
    #[error("Failed to decode project data: {0}")]
    DecodeError(String),

    /// The host page could not be parsed or queried
    #[error("Page error: {0}")]
    PageError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
