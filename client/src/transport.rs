use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::{ClientConfig, Error, Result};

/// Performs one JSON request against the game server and returns the raw body.
///
/// Implementations report connection-level failures as [`crate::Error::Transport`].
/// The HTTP status is not interpreted; decoding the body is up to the caller.
pub trait Transport {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: &Value,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP transport for the minesweeper server API
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport for the configured server URL and timeout.
    ///
    /// The URL must be `http` or `https`. A path prefix such as
    /// `http://host/api` is kept and requests go to `http://host/api/newgame`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.server_url)?;
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

fn parse_base_url(server_url: &str) -> Result<Url> {
    let mut base_url = Url::parse(server_url)?;

    // `localhost:3000` parses with scheme `localhost` and no host
    if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
        return Err(Error::UnsupportedUrl(server_url.to_string()));
    }

    // Joins replace the last segment unless the base ends in a slash
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }

    Ok(base_url)
}

impl Transport for HttpTransport {
    async fn send(&self, method: Method, path: &str, body: &Value) -> Result<String> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        debug!("Sending {} {} with body {}", method, url, body);

        let response = self.client.request(method, url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Server answered {}, decoding body anyway", status);
        }

        Ok(response.text().await?)
    }
}
