/// Mirror configuration
use crate::error::{CliError, Result};
use alcove_sync::{Credentials, QueryEntry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MirrorConfig {
    /// Optional DSN for an external crash reporter; consumed by the
    /// deployment environment, not by the sync core.
    #[serde(default)]
    pub sentry_dsn: Option<String>,

    pub server: ServerSettings,

    pub credentials: Credentials,

    pub target_folder: PathBuf,

    pub queries: Vec<QueryEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub url: String,
}

impl MirrorConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("config.toml"));

        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        } else if path.is_some() {
            return Err(CliError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        // Override with environment variables (prefixed with ALCOVE_)
        settings = settings.add_source(
            config::Environment::with_prefix("ALCOVE")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.url.is_empty() {
            return Err(CliError::Config("server.url is required".to_string()));
        }

        if self.credentials.user.is_empty() || self.credentials.password.is_empty() {
            return Err(CliError::Config(
                "credentials.user and credentials.password are required".to_string(),
            ));
        }

        if self.target_folder.as_os_str().is_empty() {
            return Err(CliError::Config("target_folder is required".to_string()));
        }

        if self.queries.is_empty() {
            return Err(CliError::Config(
                "at least one query is required".to_string(),
            ));
        }

        for entry in &self.queries {
            if entry.query.is_empty() {
                return Err(CliError::Config(format!(
                    "query \"{}\" has an empty search string",
                    entry.name
                )));
            }
            if !is_valid_folder_name(&entry.name) {
                return Err(CliError::Config(format!(
                    "query name \"{}\" is not usable as a folder name",
                    entry.name
                )));
            }
        }

        Ok(())
    }
}

/// Query names become path segments under the target folder.
fn is_valid_folder_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}
