use std::time::Duration;

use log::debug;

use crate::clients::{
    CatalogClient,
    errors::{Error, Result},
};

/// Catalog endpoint used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://ubeat.herokuapp.com/unsecure";
/// Environment variable overriding the catalog base URL
pub const BASE_URL_ENV: &str = "UBEAT_BASE_URL";
/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "UBEAT_TIMEOUT_SECS";

/// Resolved configuration holding ready-to-use clients
pub struct Config {
    pub catalog: CatalogClient,
    // Timeout applied to the catalog's HTTP client, None for caller-supplied clients
    pub timeout: Option<Duration>,
}

/// Builds a [`Config`]. Explicit values win over the environment, which wins
/// over the defaults.
#[derive(Default)]
pub struct ConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None, // No timeout unless configured
            http: None,
        }
    }

    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    // A supplied client is used as-is, the timeout setting does not apply to it
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<Config> {
        self.build_with(env_var)
    }

    fn build_with(self, lookup: impl Fn(&str) -> Result<Option<String>>) -> Result<Config> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => lookup(BASE_URL_ENV)?.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };
        let timeout = match self.timeout {
            Some(t) => Some(t),
            None => lookup(TIMEOUT_ENV)?
                .map(|secs| secs.trim().parse::<u64>())
                .transpose()?
                .map(Duration::from_secs),
        };
        let (http, timeout) = match self.http {
            Some(h) => (h, None),
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = timeout {
                    builder = builder.timeout(timeout);
                }
                let http = builder.build().map_err(|e| {
                    Error::ConfigurationError(format!("Failed to build HTTP client: {e}"))
                })?;
                (http, timeout)
            }
        };

        debug!("Using catalog at {base_url} (timeout: {timeout:?})");
        Ok(Config {
            catalog: CatalogClient::new(http, &base_url)?,
            timeout,
        })
    }
}

// Unset and empty variables both count as absent
fn env_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
