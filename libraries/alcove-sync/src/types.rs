use serde::{Deserialize, Serialize};

/// A named search query mapping to one target subdirectory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEntry {
    /// Subdirectory name under the target folder
    pub name: String,
    /// Search string sent to the server verbatim
    pub query: String,
}

/// Service-account credentials for the remote server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// Result of reconciling one folder against one remote result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    pub downloaded: usize,
    pub deleted: usize,
}

/// Per-query report within a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub name: String,
    pub downloaded: usize,
    pub deleted: usize,
}

/// Summary of a completed sync run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSummary {
    pub started_at: String,
    pub completed_at: String,
    pub duration_seconds: u64,
    pub queries: Vec<QueryOutcome>,
    pub files_downloaded: usize,
    pub files_deleted: usize,
}
