//! Batch search operations for the Alcove remote server.

use crate::error::{ClientError, Result};
use crate::types::BatchSearchResponse;
use reqwest::Client;
use tracing::debug;

/// Search client for the Alcove remote server.
pub struct SearchClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> SearchClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Run a batch search and return the matching file identifiers.
    ///
    /// Order is the server's; the list may contain duplicates.
    pub async fn batch_search(&self, query: &str) -> Result<Vec<String>> {
        let url = format!("{}/search/batch", self.base_url);
        debug!(url = %url, query = %query, "Running batch search");

        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let body: BatchSearchResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse search response: {}", e))
            })?;

            debug!(query = %query, items = body.items.len(), "Batch search returned");

            Ok(body.items)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::QueryFailed {
                query: query.to_string(),
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
