//! Plain-text rendering of the user list
//!
//! Layout mirrors the screen: title, search text, sort trigger label, past
//! searches, then one block per user in view.

use roster_core::{FetchStatus, SearchHistory, UserListState, UserRecord};
use std::fmt::Write;

pub const TITLE: &str = "User Info";
pub const NO_USERS: &str = "No users found";

/// One user as a block of labelled lines
pub fn render_user(user: &UserRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Name: {}", user.name);
    let _ = writeln!(out, "Username: {}", user.username);
    let _ = writeln!(out, "Email: {}", user.email);
    let _ = writeln!(out, "Address: {}", user.address.one_line());
    let _ = writeln!(out, "Phone: {}", user.phone);
    let _ = writeln!(out, "Website: {}", user.website);
    let _ = writeln!(out, "Company: {}", user.company.name);
    out
}

/// User blocks separated by blank lines, or the empty-view message
pub fn render_users(users: &[UserRecord]) -> String {
    if users.is_empty() {
        return format!("{}\n", NO_USERS);
    }

    users
        .iter()
        .map(render_user)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Past searches, numbered from 1 the way `past <n>` selects them
pub fn render_history(history: &SearchHistory) -> String {
    let mut out = String::from("Past Searches:");
    if history.is_empty() {
        out.push_str(" (none)");
    }
    for (i, term) in history.terms().iter().enumerate() {
        let _ = write!(out, " [{}] {:?}", i + 1, term);
    }
    out.push('\n');
    out
}

/// Failure line for a fetch that did not complete, empty otherwise
pub fn render_fetch_failure(status: &FetchStatus) -> String {
    match status {
        FetchStatus::Failed(reason) => format!("Failed to load users: {}\n", reason),
        _ => String::new(),
    }
}

/// Whole screen for `state`
pub fn render_view(state: &UserListState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(
        out,
        "Search: {:?}    [{}]",
        state.search_text(),
        state.sort_direction().label()
    );
    out.push_str(&render_history(state.history()));
    out.push('\n');

    out.push_str(&render_fetch_failure(state.fetch_status()));
    out.push_str(&render_users(state.filtered()));
    out
}
