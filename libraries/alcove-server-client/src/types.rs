//! Types for Alcove server API requests and responses.

use serde::{Deserialize, Serialize};

/// Configuration for connecting to an Alcove remote server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the API (e.g., "https://gallery.example.com/api")
    pub url: String,
}

impl ServerConfig {
    /// Create a new server config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for the session safe-mode endpoint.
#[derive(Debug, Serialize)]
pub struct SafeModeRequest {
    #[serde(rename = "sfwSession")]
    pub sfw_session: bool,
}

/// Response body of a batch search call.
///
/// `items` is ordered as the server returned it; duplicates are possible and
/// left to the caller to resolve.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchSearchResponse {
    pub items: Vec<String>,
}
