//! Interactive browser driven with scripted input

use async_trait::async_trait;
use roster_cli::browser::{Browser, Command, Flow};
use roster_cli::render::{render_view, NO_USERS};
use roster_core::{
    Address, Company, KeyValueStore, MemoryStore, Result, RosterError, SearchableUserList,
    UserRecord, UserSource, SEARCH_HISTORY_KEY,
};
use std::sync::Arc;

fn user(id: i64, name: &str, username: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: format!("{}@example.com", username.to_lowercase()),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: None,
        },
        phone: "1-770-736-8031".to_string(),
        website: "hildegard.org".to_string(),
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: None,
            bs: None,
        },
    }
}

struct StaticSource(Vec<UserRecord>);

#[async_trait]
impl UserSource for StaticSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.0.clone())
    }
}

struct FailingSource;

#[async_trait]
impl UserSource for FailingSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        Err(RosterError::network("connection refused"))
    }
}

async fn browser(store: Arc<MemoryStore>) -> Browser<Arc<MemoryStore>> {
    let mut list = SearchableUserList::open(store).await.unwrap();
    list.load_users(&StaticSource(vec![
        user(1, "Leanne Graham", "Bret"),
        user(2, "Ervin Howell", "Antonette"),
    ]))
    .await;
    Browser::new(list)
}

fn view_names(browser: &Browser<Arc<MemoryStore>>) -> Vec<String> {
    browser
        .list()
        .state()
        .filtered()
        .iter()
        .map(|u| u.name.clone())
        .collect()
}

#[tokio::test]
async fn test_search_renders_matches() {
    let mut browser = browser(Arc::new(MemoryStore::new())).await;

    let (flow, out) = browser.execute(Command::Search("ervin".to_string())).await;

    assert_eq!(flow, Flow::Continue);
    assert!(out.contains("Name: Ervin Howell"));
    assert!(out.contains("Username: Antonette"));
    assert!(out.contains("Address: Kulas Light, Apt. 556, Gwenborough, 92998-3874"));
    assert!(!out.contains("Leanne Graham"));
    assert!(out.contains("Past Searches: [1] \"ervin\""));
}

#[tokio::test]
async fn test_no_match_renders_message() {
    let mut browser = browser(Arc::new(MemoryStore::new())).await;

    let (_, out) = browser.execute(Command::Search("zzz".to_string())).await;

    assert!(out.contains(NO_USERS));
    assert!(out.contains("[1] \"zzz\""));
}

#[tokio::test]
async fn test_sort_label_flips() {
    let mut browser = browser(Arc::new(MemoryStore::new())).await;
    assert!(render_view(browser.list().state()).contains("[Sort A-Z]"));

    let (_, out) = browser.execute(Command::Sort).await;
    assert!(out.contains("[Sort Z-A]"));
    assert_eq!(view_names(&browser), vec!["Ervin Howell", "Leanne Graham"]);

    let (_, out) = browser.execute(Command::Sort).await;
    assert!(out.contains("[Sort A-Z]"));
    assert_eq!(view_names(&browser), vec!["Leanne Graham", "Ervin Howell"]);
}

#[tokio::test]
async fn test_past_search_replays_term() {
    let mut browser = browser(Arc::new(MemoryStore::new())).await;
    browser.execute(Command::Search("leanne".to_string())).await;
    browser.execute(Command::Search("ervin".to_string())).await;

    browser.execute(Command::Past(1)).await;
    assert_eq!(view_names(&browser), vec!["Leanne Graham"]);

    let (_, out) = browser.execute(Command::Past(3)).await;
    assert_eq!(out, "No past search #3\n");
}

#[tokio::test]
async fn test_past_zero_is_not_an_entry() {
    let mut browser = browser(Arc::new(MemoryStore::new())).await;
    browser.execute(Command::Search("ervin".to_string())).await;

    let (flow, out) = browser.execute(Command::Past(0)).await;

    assert_eq!(flow, Flow::Continue);
    assert_eq!(out, "No past search #0\n");
    assert_eq!(view_names(&browser), vec!["Ervin Howell"]);
}

#[tokio::test]
async fn test_trailing_space_is_part_of_the_term() {
    let store = Arc::new(MemoryStore::new());
    let mut browser = browser(Arc::clone(&store)).await;

    let mut output: Vec<u8> = Vec::new();
    browser
        .run(&b"search ervin \nsearch ervin\nquit\n"[..], &mut output)
        .await
        .unwrap();

    assert_eq!(browser.list().state().history().terms(), &["ervin ", "ervin"]);
    assert_eq!(
        store.get(SEARCH_HISTORY_KEY).await.unwrap().as_deref(),
        Some(r#"["ervin ","ervin"]"#)
    );
}

#[tokio::test]
async fn test_type_then_submit() {
    let mut browser = browser(Arc::new(MemoryStore::new())).await;

    let (_, out) = browser.execute(Command::Type("howell".to_string())).await;
    assert!(out.contains("Search: \"howell\""));
    assert_eq!(view_names(&browser).len(), 2);

    browser.execute(Command::Submit).await;
    assert_eq!(view_names(&browser), vec!["Ervin Howell"]);
}

#[tokio::test]
async fn test_clear_erases_stored_history() {
    let store = Arc::new(MemoryStore::new());
    let mut browser = browser(Arc::clone(&store)).await;
    browser.execute(Command::Search("ervin".to_string())).await;
    assert!(store.get(SEARCH_HISTORY_KEY).await.unwrap().is_some());

    let (_, out) = browser.execute(Command::Clear).await;

    assert!(out.contains("Past Searches: (none)"));
    assert_eq!(store.get(SEARCH_HISTORY_KEY).await.unwrap(), None);
    assert_eq!(view_names(&browser).len(), 2);
}

#[tokio::test]
async fn test_failed_fetch_is_shown() {
    let mut list = SearchableUserList::open(MemoryStore::new()).await.unwrap();
    list.load_users(&FailingSource).await;

    let out = render_view(list.state());

    assert!(out.contains("Failed to load users: Network error: connection refused"));
    assert!(out.contains(NO_USERS));
}

#[tokio::test]
async fn test_run_scripted_session() {
    let store = Arc::new(MemoryStore::new());
    let mut browser = browser(Arc::clone(&store)).await;

    let script = b"search ervin\nbogus\nsort\nhistory\nquit\nsearch leanne\n";
    let mut output: Vec<u8> = Vec::new();
    browser.run(&script[..], &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("User Info\n"));
    assert!(output.contains("Unknown command: bogus"));
    assert!(output.contains("[Sort Z-A]"));

    // Input after quit is never read
    assert_eq!(browser.list().state().history().terms(), &["ervin"]);
    assert_eq!(
        store.get(SEARCH_HISTORY_KEY).await.unwrap().as_deref(),
        Some(r#"["ervin"]"#)
    );
}

#[tokio::test]
async fn test_run_stops_at_end_of_input() {
    let mut browser = browser(Arc::new(MemoryStore::new())).await;

    let mut output: Vec<u8> = Vec::new();
    browser.run(&b"search graham"[..], &mut output).await.unwrap();

    assert_eq!(view_names(&browser), vec!["Leanne Graham"]);
}
