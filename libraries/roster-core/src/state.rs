//! Search state container
//!
//! All session state lives in [`UserListState`]. Operations are synchronous
//! and never touch storage; each one that can affect the search history
//! reports a [`HistoryChange`] so the caller knows what to persist.

use crate::filter::{filter_by_name, sort_by_name};
use crate::history::SearchHistory;
use crate::types::{FetchStatus, SortDirection, UserRecord};

/// What happened to the search history during an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryChange {
    Unchanged,
    /// A new term was appended
    Appended,
    /// The history was emptied
    Cleared,
}

/// Full state of one searchable user list
#[derive(Debug, Clone, Default)]
pub struct UserListState {
    users: Vec<UserRecord>,
    filtered: Vec<UserRecord>,
    search_text: String,
    sort_direction: SortDirection,
    history: SearchHistory,
    fetch_status: FetchStatus,
}

impl UserListState {
    /// Fresh state with a previously persisted history, before any fetch
    pub fn new(history: SearchHistory) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    /// Install the fetched collection as both the full set and the view
    pub fn users_loaded(&mut self, users: Vec<UserRecord>) {
        self.filtered.clone_from(&users);
        self.users = users;
        self.fetch_status = FetchStatus::Loaded;
    }

    /// Record a failed fetch; the view stays as it is (empty)
    pub fn users_failed(&mut self, reason: impl Into<String>) {
        self.fetch_status = FetchStatus::Failed(reason.into());
    }

    /// Replace the pending search text without filtering
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Filter the full set by `term` and record the term
    ///
    /// The view is rebuilt from the full set in fetch order, discarding any
    /// earlier sort. The sort direction itself is left alone.
    pub fn search(&mut self, term: &str) -> HistoryChange {
        self.search_text = term.to_string();
        self.filtered = filter_by_name(&self.users, term);

        if self.history.record(term) {
            HistoryChange::Appended
        } else {
            HistoryChange::Unchanged
        }
    }

    /// Run [`search`](Self::search) with the pending search text
    pub fn submit_search(&mut self) -> HistoryChange {
        let term = self.search_text.clone();
        self.search(&term)
    }

    /// Sort the current view by name in the current direction, then flip
    /// the direction for the next call
    pub fn toggle_sort(&mut self) {
        sort_by_name(&mut self.filtered, self.sort_direction);
        self.sort_direction = self.sort_direction.flipped();
    }

    /// Reset search text, view, direction and history
    ///
    /// The fetched users are kept.
    pub fn clear(&mut self) -> HistoryChange {
        self.search_text.clear();
        self.filtered.clone_from(&self.users);
        self.sort_direction = SortDirection::Ascending;
        self.history.clear();
        HistoryChange::Cleared
    }

    /// Re-run a search for a history entry as if it had been typed
    pub fn select_past_search(&mut self, term: &str) -> HistoryChange {
        self.search(term)
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Users currently displayed
    pub fn filtered(&self) -> &[UserRecord] {
        &self.filtered
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Direction the next [`toggle_sort`](Self::toggle_sort) applies
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn fetch_status(&self) -> &FetchStatus {
        &self.fetch_status
    }
}
