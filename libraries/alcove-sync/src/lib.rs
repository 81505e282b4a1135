mod error;
mod reconciler;
mod runner;
mod types;

// Public exports
pub use error::{Result, SyncError};
pub use reconciler::{reconcile, FileFetcher};
pub use runner::SyncRunner;
pub use types::{Credentials, QueryEntry, QueryOutcome, ReconcileOutcome, SyncSummary};
