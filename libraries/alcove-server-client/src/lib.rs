//! Alcove Server Client
//!
//! HTTP client library for the Alcove remote gallery API.
//!
//! # Features
//!
//! - **Session setup**: cookie-based login, session safe-mode control
//! - **Search**: batch search returning file identifiers
//! - **Download**: raw file content by identifier
//!
//! # Example
//!
//! ```ignore
//! use alcove_server_client::{AlcoveClient, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::new("https://gallery.example.com/api");
//!     let client = AlcoveClient::new(config)?;
//!
//!     client.login("service", "secret").await?;
//!     client.set_safe_mode(false).await?;
//!
//!     let items = client.search("tag:landscape").await?;
//!     println!("Query matched {} files", items.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod download;
mod error;
mod search;
mod types;

// Re-export main types
pub use client::AlcoveClient;
pub use error::{ClientError, Result};
pub use types::{BatchSearchResponse, LoginRequest, SafeModeRequest, ServerConfig};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use download::DownloadClient;
pub use search::SearchClient;
