//! Configuration types for the directory client.

use std::time::Duration;

/// Public demo directory the client talks to unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Path of the user collection, relative to the base URL
pub const USERS_PATH: &str = "users";

/// Configuration for connecting to a user directory.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the directory (e.g., "https://jsonplaceholder.typicode.com")
    pub url: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a config for `url` with default timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Override both timeouts.
    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
