/// Core traits for Roster
use crate::error::Result;
use crate::types::UserRecord;
use async_trait::async_trait;

/// Source of the user collection
///
/// Implementers fetch the full collection in one call. The session calls
/// this exactly once, with no retry.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch every user record
    ///
    /// # Errors
    /// Returns an error if the transport fails or the payload cannot be decoded
    async fn fetch_users(&self) -> Result<Vec<UserRecord>>;
}

/// String key/value storage primitive
///
/// Values are opaque strings; callers own the encoding.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; returns whether a value was present
    async fn remove(&self, key: &str) -> Result<bool>;
}

#[async_trait]
impl<T: UserSource + ?Sized> UserSource for std::sync::Arc<T> {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        (**self).fetch_users().await
    }
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        (**self).remove(key).await
    }
}
