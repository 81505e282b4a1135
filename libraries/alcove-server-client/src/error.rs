//! Error types for the Alcove server client.

use thiserror::Error;

/// Errors that can occur when interacting with an Alcove remote server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Login was rejected by the server
    #[error("Login failed ({status}): {message}")]
    AuthFailed { status: u16, message: String },

    /// The safe-mode update was rejected by the server
    #[error("Safe mode update failed ({status}): {message}")]
    SafeModeFailed { status: u16, message: String },

    /// A search query was rejected by the server
    #[error("Query \"{query}\" failed ({status}): {message}")]
    QueryFailed {
        query: String,
        status: u16,
        message: String,
    },

    /// A file download was rejected by the server
    #[error("Fetching file \"{identifier}\" failed ({status}): {message}")]
    FetchFailed {
        identifier: String,
        status: u16,
        message: String,
    },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for server client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
