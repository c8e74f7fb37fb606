//! Searchable user list session
//!
//! [`SearchableUserList`] wires a [`UserListState`] to a key/value store:
//! it loads the history at startup, runs the single user fetch, and writes
//! the history back whenever an operation changes it.

use crate::error::Result;
use crate::history::{erase_history, load_history, save_history};
use crate::state::{HistoryChange, UserListState};
use crate::traits::{KeyValueStore, UserSource};
use crate::types::FetchStatus;
use tracing::{debug, info, warn};

/// One user-list session backed by `K`
///
/// In-memory state is updated before anything is persisted. If a write
/// fails the error is returned, but the state keeps the change.
pub struct SearchableUserList<K> {
    state: UserListState,
    store: K,
}

impl<K: KeyValueStore> SearchableUserList<K> {
    /// Start a session, loading the persisted history from `store`
    pub async fn open(store: K) -> Result<Self> {
        let history = load_history(&store).await?;
        Ok(Self {
            state: UserListState::new(history),
            store,
        })
    }

    /// Fetch the user collection once
    ///
    /// A failed fetch is not an error for the caller: the view stays empty
    /// and the status becomes [`FetchStatus::Failed`].
    pub async fn load_users<S: UserSource + ?Sized>(&mut self, source: &S) -> &FetchStatus {
        match source.fetch_users().await {
            Ok(users) => {
                info!(count = users.len(), "Loaded users");
                self.state.users_loaded(users);
            }
            Err(e) => {
                warn!(error = %e, "Failed to load users");
                self.state.users_failed(e.to_string());
            }
        }
        self.state.fetch_status()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text);
    }

    pub async fn search(&mut self, term: &str) -> Result<()> {
        let change = self.state.search(term);
        debug!(term, matches = self.state.filtered().len(), "Search");
        self.persist(change).await
    }

    pub async fn submit_search(&mut self) -> Result<()> {
        let change = self.state.submit_search();
        debug!(
            term = self.state.search_text(),
            matches = self.state.filtered().len(),
            "Search submitted"
        );
        self.persist(change).await
    }

    pub fn toggle_sort(&mut self) {
        let direction = self.state.sort_direction();
        self.state.toggle_sort();
        debug!(%direction, "Sorted view");
    }

    pub async fn clear(&mut self) -> Result<()> {
        let change = self.state.clear();
        debug!("Cleared search state");
        self.persist(change).await
    }

    pub async fn select_past_search(&mut self, term: &str) -> Result<()> {
        let change = self.state.select_past_search(term);
        debug!(term, matches = self.state.filtered().len(), "Replayed past search");
        self.persist(change).await
    }

    pub fn state(&self) -> &UserListState {
        &self.state
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    async fn persist(&self, change: HistoryChange) -> Result<()> {
        match change {
            HistoryChange::Unchanged => Ok(()),
            HistoryChange::Appended => save_history(&self.store, self.state.history()).await,
            HistoryChange::Cleared => erase_history(&self.store).await,
        }
    }
}
