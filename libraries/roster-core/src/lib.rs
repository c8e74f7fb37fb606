//! Roster Core
//!
//! Platform-agnostic types, search state, and storage seams for Roster, a
//! searchable user directory.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `SortDirection`, `FetchStatus`
//! - **State**: `UserListState`, a plain container whose operations never do I/O
//! - **Session**: `SearchableUserList`, which persists history changes
//! - **Core Traits**: `UserSource`, `KeyValueStore`
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::{MemoryStore, SearchableUserList};
//!
//! # async fn example() -> roster_core::Result<()> {
//! let mut list = SearchableUserList::open(MemoryStore::new()).await?;
//! list.search("ervin").await?;
//! list.toggle_sort();
//! assert_eq!(list.state().history().terms(), &["ervin"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod history;
pub mod memory;
pub mod session;
pub mod state;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use history::{SearchHistory, SEARCH_HISTORY_KEY};
pub use memory::MemoryStore;
pub use session::SearchableUserList;
pub use state::{HistoryChange, UserListState};
pub use traits::{KeyValueStore, UserSource};
pub use types::{Address, Company, FetchStatus, Geo, SortDirection, UserRecord};
