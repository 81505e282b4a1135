/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Client(#[from] alcove_server_client::ClientError),

    #[error(transparent)]
    Sync(#[from] alcove_sync::SyncError),
}

impl CliError {
    /// Process exit code for this failure.
    ///
    /// Failures before the run starts (configuration, client construction)
    /// use the generic failure code 1; run failures carry the sync contract's
    /// codes (login 1, safe mode 2, query/fetch 4, 3 reserved).
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::Client(_) => 1,
            CliError::Sync(e) => e.exit_code(),
        }
    }
}
