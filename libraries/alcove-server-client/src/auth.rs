//! Session setup for the Alcove remote server: login and safe-mode control.

use crate::error::{ClientError, Result};
use crate::types::{LoginRequest, SafeModeRequest};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Authentication client for the Alcove remote server.
///
/// The session credential is a cookie set by the server on login; it is
/// retained by the shared `reqwest` cookie jar, so every later call on the
/// same client rides the same session.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with username and password.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let url = format!("{}/login", self.base_url);
        debug!(url = %url, username = %username, "Attempting login");

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
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
            info!(username = %username, "Login successful");
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Login failed");
            Err(ClientError::AuthFailed {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Set the session's safe-for-work filter.
    ///
    /// Lifting the filter (`false`) is required before queries that match
    /// filtered content return their full result set.
    pub async fn set_safe_mode(&self, enabled: bool) -> Result<()> {
        let url = format!("{}/sfw", self.base_url);
        debug!(url = %url, enabled = enabled, "Updating session safe mode");

        let request = SafeModeRequest {
            sfw_session: enabled,
        };

        let response = self
            .http
            .patch(&url)
            .json(&request)
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
            debug!(enabled = enabled, "Session safe mode updated");
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Safe mode update failed");
            Err(ClientError::SafeModeFailed {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
