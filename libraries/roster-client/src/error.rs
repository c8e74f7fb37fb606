//! Error types for the directory client.

use thiserror::Error;

/// Errors that can occur when fetching from the user directory.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint returned a non-success status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid endpoint URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Endpoint is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for roster_core::RosterError {
    fn from(err: ClientError) -> Self {
        roster_core::RosterError::network(err.to_string())
    }
}
