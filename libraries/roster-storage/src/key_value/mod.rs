//! Key/value persistence
//!
//! Values are stored as plain text and returned exactly as written.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::key_value;
//! # async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//! key_value::set_value(pool, "searchHistory", r#"["ervin"]"#).await?;
//!
//! let history = key_value::get_value(pool, "searchHistory").await?;
//! # Ok(())
//! # }
//! ```

use sqlx::{Row, SqlitePool};

use crate::error::Result;

/// Get the value stored under `key`
///
/// # Returns
///
/// Returns `Ok(Some(value))` if the key exists, `Ok(None)` if not found
pub async fn get_value(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let row = sqlx::query("SELECT value FROM key_value WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| row.try_get::<String, _>("value")).transpose()?)
}

/// Set the value for `key`, replacing any previous value
pub async fn set_value(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO key_value (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete `key`
///
/// # Returns
///
/// Returns `Ok(true)` if a value was deleted, `Ok(false)` if no value was found
pub async fn delete_value(pool: &SqlitePool, key: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM key_value WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Unix timestamp of the last write to `key`
pub async fn updated_at(pool: &SqlitePool, key: &str) -> Result<Option<i64>> {
    let row = sqlx::query("SELECT updated_at FROM key_value WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| row.try_get::<i64, _>("updated_at")).transpose()?)
}
