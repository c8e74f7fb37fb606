//! Roster Directory Client
//!
//! HTTP client for the remote user directory Roster reads from.
//!
//! The client performs one request, `GET {base}/users`, and decodes the JSON
//! array into [`roster_core::UserRecord`]s. It implements
//! [`roster_core::UserSource`], so a session can use it directly.
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ClientConfig, DirectoryClient};
//! use roster_core::{MemoryStore, SearchableUserList};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DirectoryClient::new(ClientConfig::default())?;
//!
//!     let mut list = SearchableUserList::open(MemoryStore::new()).await?;
//!     list.load_users(&client).await;
//!     list.search("ervin").await?;
//!
//!     println!("{} matches", list.state().filtered().len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::DirectoryClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, DEFAULT_BASE_URL, USERS_PATH};
