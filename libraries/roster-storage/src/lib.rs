//! Roster Storage
//!
//! `SQLite` key/value storage for Roster.
//!
//! The search history is the only thing Roster persists; it is written as a
//! JSON string under one key. This crate stays ignorant of that encoding and
//! only moves strings in and out of the `key_value` table.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{SqliteKeyValueStore, create_pool, run_migrations};
//! use roster_core::SearchableUserList;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://roster.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteKeyValueStore::new(pool);
//! let list = SearchableUserList::open(store).await?;
//! println!("{} past searches", list.state().history().len());
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

pub mod key_value;

pub use context::SqliteKeyValueStore;
pub use error::{Result, StorageError};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://roster.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    debug!(url = %database_url, "Creating pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // One session, one writer
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    debug!("Pool created");

    Ok(pool)
}

/// Create a pool and bring its schema up to date
pub async fn open(database_url: &str) -> Result<SqliteKeyValueStore> {
    let pool = create_pool(database_url).await?;
    run_migrations(&pool).await?;
    Ok(SqliteKeyValueStore::new(pool))
}
