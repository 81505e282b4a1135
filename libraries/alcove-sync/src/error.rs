use alcove_server_client::ClientError;
use thiserror::Error;

/// Errors that can occur during a sync run
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Could not log in to remote server: {0}")]
    Auth(#[source] ClientError),

    #[error("Could not update safe mode: {0}")]
    SafeMode(#[source] ClientError),

    #[error("Query \"{name}\" ({query}) failed: {source}")]
    Query {
        name: String,
        query: String,
        #[source]
        source: ClientError,
    },

    #[error("Download failed: {0}")]
    Fetch(#[source] ClientError),

    #[error("Refusing identifier \"{identifier}\": not usable as a file name")]
    UnsafeIdentifier { identifier: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Process exit code for this failure.
    ///
    /// Login failures exit 1, safe-mode failures 2, everything that happens
    /// while running a query (search, download, filesystem) 4. Code 3 is
    /// reserved and never produced.
    pub fn exit_code(&self) -> u8 {
        match self {
            SyncError::Auth(_) => 1,
            SyncError::SafeMode(_) => 2,
            SyncError::Query { .. }
            | SyncError::Fetch(_)
            | SyncError::UnsafeIdentifier { .. }
            | SyncError::Io(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
