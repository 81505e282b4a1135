//! Main Alcove server client.

use crate::auth::AuthClient;
use crate::download::DownloadClient;
use crate::error::{ClientError, Result};
use crate::search::SearchClient;
use crate::types::ServerConfig;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Client for one authenticated session against an Alcove remote server.
///
/// Construct it once per run; `login` establishes the session cookie, which
/// the underlying cookie jar then attaches to every subsequent call.
///
/// # Example
///
/// ```ignore
/// use alcove_server_client::{AlcoveClient, ServerConfig};
///
/// let client = AlcoveClient::new(ServerConfig::new("https://gallery.example.com/api"))?;
/// client.login("service", "secret").await?;
/// client.set_safe_mode(false).await?;
/// let items = client.search("tag:landscape").await?;
/// ```
#[derive(Debug)]
pub struct AlcoveClient {
    http: Client,
    base_url: String,
}

impl AlcoveClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Normalize, then validate scheme and shape
        let base_url = config.url.trim_end_matches('/').to_string();
        let parsed =
            Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Alcove/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the server base URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Login with username and password.
    ///
    /// On success, the session cookie is retained for all subsequent calls
    /// on this client instance.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        AuthClient::new(&self.http, &self.base_url)
            .login(username, password)
            .await
    }

    /// Set the session's safe-for-work filter.
    pub async fn set_safe_mode(&self, enabled: bool) -> Result<()> {
        AuthClient::new(&self.http, &self.base_url)
            .set_safe_mode(enabled)
            .await
    }

    /// Run a batch search, returning file identifiers in server order.
    pub async fn search(&self, query: &str) -> Result<Vec<String>> {
        SearchClient::new(&self.http, &self.base_url)
            .batch_search(query)
            .await
    }

    /// Download the raw content of a file by its identifier.
    pub async fn fetch_file(&self, identifier: &str) -> Result<Vec<u8>> {
        DownloadClient::new(&self.http, &self.base_url)
            .fetch_file(identifier)
            .await
    }
}
