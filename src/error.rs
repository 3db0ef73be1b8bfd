//! Error types for the read-aloud extraction library.
//!
//! The text-reconstruction stages themselves never fail; these errors come from
//! the edges of the crate: page sources, JSON input/output and configuration.

/// Result type alias for read-aloud library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around page text extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream page renderer failed to produce fragments
    #[error("Page source error: {0}")]
    PageSource(String),

    /// Pipeline configuration that cannot run
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
