use crate::key_value;
use async_trait::async_trait;
use roster_core::{error::Result, KeyValueStore};
use sqlx::SqlitePool;

/// Key/value store backed by `SQLite`
#[derive(Debug, Clone)]
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(key_value::get_value(&self.pool, key).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        Ok(key_value::set_value(&self.pool, key, value).await?)
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(key_value::delete_value(&self.pool, key).await?)
    }
}
