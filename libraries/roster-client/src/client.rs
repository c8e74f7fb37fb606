//! Main directory client.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, USERS_PATH};
use async_trait::async_trait;
use reqwest::Client;
use roster_core::{UserRecord, UserSource};
use tracing::{debug, info};
use url::Url;

/// Client for a remote user directory.
///
/// The directory exposes one read-only collection, `GET {url}/users`,
/// returning a JSON array of user objects. No auth, no paging.
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, DirectoryClient};
///
/// let client = DirectoryClient::new(ClientConfig::default())?;
/// let users = client.fetch_users().await?;
/// println!("Fetched {} users", users.len());
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: Client,
    base_url: String,
    users_url: Url,
}

impl DirectoryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // The trailing slash makes `join` append instead of replacing the last segment
        let users_url = Url::parse(&format!("{}/", base_url))
            .and_then(|base| base.join(USERS_PATH))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            users_url,
        })
    }

    /// Base URL, without trailing slash.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the user collection.
    pub fn users_url(&self) -> &Url {
        &self.users_url
    }

    /// Fetch the whole user collection.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        debug!(url = %self.users_url, "Fetching users");

        let response = self
            .http
            .get(self.users_url.as_str())
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            let users: Vec<UserRecord> = serde_json::from_slice(&body).map_err(|e| {
                ClientError::ParseError(format!("Failed to parse users response: {}", e))
            })?;

            info!(count = users.len(), "Fetched users");

            Ok(users)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl UserSource for DirectoryClient {
    async fn fetch_users(&self) -> roster_core::Result<Vec<UserRecord>> {
        Ok(DirectoryClient::fetch_users(self).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(DirectoryClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(DirectoryClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(DirectoryClient::new(ClientConfig::new("")).is_err());
        assert!(DirectoryClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(DirectoryClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_users_url_keeps_base_path() {
        let client =
            DirectoryClient::new(ClientConfig::new("https://example.com/api/v1/")).expect("valid url");

        assert_eq!(client.url(), "https://example.com/api/v1");
        assert_eq!(client.users_url().as_str(), "https://example.com/api/v1/users");
    }
}
