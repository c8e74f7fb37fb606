/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory client error: {0}")]
    Client(#[from] roster_client::ClientError),

    #[error("Storage error: {0}")]
    Storage(#[from] roster_storage::StorageError),

    #[error(transparent)]
    Roster(#[from] roster_core::RosterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
