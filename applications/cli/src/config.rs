/// Roster configuration
use crate::error::{CliError, Result};
use roster_client::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default = "default_client")]
    pub client: ClientSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

impl RosterConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `roster.toml` is read if
    /// present. Variables prefixed with `ROSTER_` override file values, with
    /// `__` separating sections (e.g. `ROSTER_CLIENT__BASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, environment())
    }

    /// Load with an explicit environment source
    pub fn load_from(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(env);

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = &self.client.base_url;
        if url.is_empty() {
            return Err(CliError::Config(
                "Directory URL is required (set ROSTER_CLIENT__BASE_URL)".to_string(),
            ));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CliError::Config(format!(
                "Directory URL must start with http:// or https://, got {}",
                url
            )));
        }

        if self.client.timeout_secs == 0 || self.client.connect_timeout_secs == 0 {
            return Err(CliError::Config("Timeouts must be at least 1 second".to_string()));
        }

        if self.storage.database_url.is_empty() {
            return Err(CliError::Config("Database URL is required".to_string()));
        }

        Ok(())
    }

    /// Settings for the directory client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.client.base_url.clone()).with_timeouts(
            Duration::from_secs(self.client.timeout_secs),
            Duration::from_secs(self.client.connect_timeout_secs),
        )
    }
}

/// Environment source for `ROSTER_*` variables
pub fn environment() -> config::Environment {
    config::Environment::with_prefix("ROSTER")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// Default values
fn default_client() -> ClientSettings {
    ClientSettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://roster.db".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            client: default_client(),
            storage: default_storage(),
        }
    }
}
