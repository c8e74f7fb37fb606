/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// Key/value storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Fetching users failed
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl RosterError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}
