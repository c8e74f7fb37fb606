/// Session wiring: configuration to a loaded user list, plus the one-shot
/// commands
use crate::config::RosterConfig;
use crate::error::Result;
use crate::render::{render_fetch_failure, render_history, render_users};
use roster_client::DirectoryClient;
use roster_core::{history, KeyValueStore, SearchableUserList};
use roster_storage::SqliteKeyValueStore;

/// Open the history store described by `config`
pub async fn open_store(config: &RosterConfig) -> Result<SqliteKeyValueStore> {
    let store = roster_storage::open(&config.storage.database_url).await?;
    tracing::debug!(url = %config.storage.database_url, "History store ready");
    Ok(store)
}

/// Start a session: load history, then fetch users once
///
/// A failed fetch does not fail the session; it shows up in the state's
/// fetch status instead.
pub async fn start_session(config: &RosterConfig) -> Result<SearchableUserList<SqliteKeyValueStore>> {
    let store = open_store(config).await?;
    let mut list = SearchableUserList::open(store).await?;

    let client = DirectoryClient::new(config.client_config())?;
    tracing::info!(url = %client.users_url(), "Fetching users");
    list.load_users(&client).await;

    Ok(list)
}

/// Run one search on a loaded list, optionally sorted once, and render the
/// matches preceded by the fetch failure line if there is one
pub async fn search_once<K: KeyValueStore>(
    list: &mut SearchableUserList<K>,
    term: &str,
    sort: bool,
) -> Result<String> {
    list.search(term).await?;
    if sort {
        list.toggle_sort();
    }

    let mut out = render_fetch_failure(list.state().fetch_status());
    out.push_str(&render_users(list.state().filtered()));
    Ok(out)
}

/// Persisted past searches, rendered
pub async fn history_report<K: KeyValueStore + ?Sized>(store: &K) -> Result<String> {
    let history = history::load_history(store).await?;
    Ok(render_history(&history))
}

/// Erase persisted past searches and report how many there were
pub async fn clear_history<K: KeyValueStore>(store: K) -> Result<String> {
    let mut list = SearchableUserList::open(store).await?;
    let erased = list.state().history().len();

    list.clear().await?;

    tracing::info!(erased, "Search history erased");
    Ok(format!("Erased {} past searches\n", erased))
}
