use std::{env, time::Duration};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

pub const SERVER_URL_VAR: &str = "MINESWEEPER_SERVER_URL";
pub const TIMEOUT_VAR: &str = "MINESWEEPER_TIMEOUT_SECONDS";

/// Connection settings for [`crate::HttpTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl ClientConfig {
    /// Read `MINESWEEPER_SERVER_URL` and `MINESWEEPER_TIMEOUT_SECONDS`,
    /// falling back to the defaults for unset, unparsable or zero values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let server_url = lookup(SERVER_URL_VAR).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let timeout_secs: u64 = lookup(TIMEOUT_VAR)
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECONDS.to_string())
            .parse()
            .ok()
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Self {
            server_url,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}
