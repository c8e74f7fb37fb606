//! Search history
//!
//! An insertion-ordered, duplicate-free list of submitted search terms,
//! persisted as a JSON array of strings under [`SEARCH_HISTORY_KEY`].

use crate::error::Result;
use crate::traits::KeyValueStore;
use serde::Serialize;
use tracing::{debug, warn};

/// Storage key holding the encoded history
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";

/// Previously submitted search terms, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchHistory {
    terms: Vec<String>,
}

impl SearchHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from stored terms, keeping the first occurrence of
    /// each term
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::new();
        for term in terms {
            history.record(term);
        }
        history
    }

    /// Append `term` unless already present
    ///
    /// Returns `true` if the history changed.
    pub fn record(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.contains(&term) {
            return false;
        }
        self.terms.push(term);
        true
    }

    /// Exact (case-sensitive) membership test
    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Entry at `index` (0-based, oldest first)
    pub fn get(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Encode as a JSON array of strings
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.terms)?)
    }

    /// Decode a stored value
    ///
    /// Anything that is not a JSON array of strings yields `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str::<Vec<String>>(raw)
            .ok()
            .map(Self::from_terms)
    }
}

/// Load the persisted history
///
/// A missing or malformed value yields an empty history. Only a failing
/// store is reported as an error.
pub async fn load_history<K: KeyValueStore + ?Sized>(store: &K) -> Result<SearchHistory> {
    let Some(raw) = store.get(SEARCH_HISTORY_KEY).await? else {
        debug!("No stored search history");
        return Ok(SearchHistory::new());
    };

    match SearchHistory::from_json(&raw) {
        Some(history) => {
            debug!(entries = history.len(), "Loaded search history");
            Ok(history)
        }
        None => {
            warn!(value = %raw, "Ignoring malformed search history");
            Ok(SearchHistory::new())
        }
    }
}

/// Overwrite the persisted history with `history`
pub async fn save_history<K: KeyValueStore + ?Sized>(
    store: &K,
    history: &SearchHistory,
) -> Result<()> {
    let encoded = history.to_json()?;
    store.set(SEARCH_HISTORY_KEY, &encoded).await?;
    debug!(entries = history.len(), "Saved search history");
    Ok(())
}

/// Remove the persisted history
pub async fn erase_history<K: KeyValueStore + ?Sized>(store: &K) -> Result<()> {
    let removed = store.remove(SEARCH_HISTORY_KEY).await?;
    debug!(removed, "Erased search history");
    Ok(())
}
