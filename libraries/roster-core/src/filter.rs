//! Name filtering and ordering
//!
//! Names are compared by their lowercased form. Results depend only on the
//! input slice and its order.

use crate::types::{SortDirection, UserRecord};
use std::cmp::Reverse;

/// Users whose name contains `term`, ignoring case, in input order
///
/// An empty `term` matches every user.
pub fn filter_by_name(users: &[UserRecord], term: &str) -> Vec<UserRecord> {
    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|user| user.name_key().contains(&needle))
        .cloned()
        .collect()
}

/// Sort `users` in place by lowercased name
///
/// The sort is stable in both directions, so users with equal names keep
/// their relative order.
pub fn sort_by_name(users: &mut [UserRecord], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => users.sort_by_cached_key(UserRecord::name_key),
        SortDirection::Descending => users.sort_by_cached_key(|user| Reverse(user.name_key())),
    }
}
