use crate::error::{Result, SyncError};
use crate::reconciler;
use crate::types::{Credentials, QueryEntry, QueryOutcome, SyncSummary};
use alcove_server_client::AlcoveClient;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Drives one sync run: session setup, then every configured query in order.
///
/// The run is terminal on first error; earlier queries' filesystem effects
/// remain in place. `SyncError::exit_code` maps the failure to the process
/// exit code.
pub struct SyncRunner {
    client: AlcoveClient,
    credentials: Credentials,
    target_folder: PathBuf,
    queries: Vec<QueryEntry>,
}

impl SyncRunner {
    pub fn new(
        client: AlcoveClient,
        credentials: Credentials,
        target_folder: impl Into<PathBuf>,
        queries: Vec<QueryEntry>,
    ) -> Self {
        Self {
            client,
            credentials,
            target_folder: target_folder.into(),
            queries,
        }
    }

    /// Run the full sync once.
    pub async fn run(&self) -> Result<SyncSummary> {
        let started = chrono::Utc::now();
        let timer = Instant::now();
        info!("Starting sync at {}", started.to_rfc3339());

        info!("Setting up API connection...");
        self.client
            .login(&self.credentials.user, &self.credentials.password)
            .await
            .map_err(SyncError::Auth)?;

        // Queries must see the unfiltered result set.
        self.client
            .set_safe_mode(false)
            .await
            .map_err(SyncError::SafeMode)?;

        let mut outcomes = Vec::with_capacity(self.queries.len());
        for entry in &self.queries {
            info!("Running query \"{}\" ({})...", entry.name, entry.query);

            let identifiers =
                self.client
                    .search(&entry.query)
                    .await
                    .map_err(|e| SyncError::Query {
                        name: entry.name.clone(),
                        query: entry.query.clone(),
                        source: e,
                    })?;

            let folder = self.target_folder.join(&entry.name);
            let outcome = reconciler::reconcile(&identifiers, &folder, &self.client).await?;

            info!(
                "Downloaded {} new files, deleted {} obsolete files.",
                outcome.downloaded, outcome.deleted
            );
            outcomes.push(QueryOutcome {
                name: entry.name.clone(),
                downloaded: outcome.downloaded,
                deleted: outcome.deleted,
            });
        }

        let completed = chrono::Utc::now();
        let summary = SyncSummary {
            started_at: started.to_rfc3339(),
            completed_at: completed.to_rfc3339(),
            duration_seconds: timer.elapsed().as_secs(),
            files_downloaded: outcomes.iter().map(|o| o.downloaded).sum(),
            files_deleted: outcomes.iter().map(|o| o.deleted).sum(),
            queries: outcomes,
        };

        info!(
            "Completed synchronization at {}: {} downloaded, {} deleted across {} queries",
            summary.completed_at,
            summary.files_downloaded,
            summary.files_deleted,
            summary.queries.len()
        );

        Ok(summary)
    }
}
