//! File download operations for the Alcove remote server.

use crate::error::{ClientError, Result};
use reqwest::Client;
use tracing::debug;

/// Download client for the Alcove remote server.
pub struct DownloadClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> DownloadClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Download the raw content of a file by its identifier.
    pub async fn fetch_file(&self, identifier: &str) -> Result<Vec<u8>> {
        let url = format!("{}/files/{}", self.base_url, identifier);
        debug!(url = %url, identifier = %identifier, "Fetching file");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            debug!(identifier = %identifier, size = bytes.len(), "File fetched");
            Ok(bytes.to_vec())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::FetchFailed {
                identifier: identifier.to_string(),
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
