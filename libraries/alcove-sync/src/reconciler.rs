use crate::error::{Result, SyncError};
use crate::types::ReconcileOutcome;
use async_trait::async_trait;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Source of raw file bytes, keyed by identifier.
///
/// The server client implements this; tests substitute an in-memory stub.
#[async_trait]
pub trait FileFetcher: Sync {
    async fn fetch_file(&self, identifier: &str) -> alcove_server_client::Result<Vec<u8>>;
}

#[async_trait]
impl FileFetcher for alcove_server_client::AlcoveClient {
    async fn fetch_file(&self, identifier: &str) -> alcove_server_client::Result<Vec<u8>> {
        alcove_server_client::AlcoveClient::fetch_file(self, identifier).await
    }
}

/// Make `local_folder` contain exactly the files named by `remote_identifiers`.
///
/// Missing files are downloaded through `fetcher`, obsolete ones deleted.
/// Duplicate identifiers are collapsed; identifiers that cannot serve as file
/// names (empty, `.`/`..`, or containing a path separator) abort the run
/// before any side effect. Downloads fully precede deletions, so a failed
/// download leaves every pre-existing file in place.
pub async fn reconcile<F>(
    remote_identifiers: &[String],
    local_folder: &Path,
    fetcher: &F,
) -> Result<ReconcileOutcome>
where
    F: FileFetcher + ?Sized,
{
    fs::create_dir_all(local_folder).await?;

    // Dedup, keeping first-seen order for the download pass.
    let mut wanted = HashSet::new();
    let mut download_order = Vec::new();
    for identifier in remote_identifiers {
        validate_identifier(identifier)?;
        if wanted.insert(identifier.as_str()) {
            download_order.push(identifier.as_str());
        }
    }

    let local = snapshot_local(local_folder).await?;
    let present: HashSet<&str> = local.iter().filter_map(|name| name.to_str()).collect();

    let mut downloaded = 0;
    for identifier in &download_order {
        // If it exists locally, don't download it.
        if present.contains(identifier) {
            continue;
        }

        let bytes = fetcher
            .fetch_file(identifier)
            .await
            .map_err(SyncError::Fetch)?;
        fs::write(local_folder.join(identifier), &bytes).await?;
        downloaded += 1;
    }

    // Deletions only start once every download has landed. A name that is
    // not valid UTF-8 can never match a remote identifier, so it is obsolete.
    let mut deleted = 0;
    for name in &local {
        let keep = name.to_str().is_some_and(|n| wanted.contains(n));
        if !keep {
            fs::remove_file(local_folder.join(name)).await?;
            deleted += 1;
        }
    }

    debug!(
        folder = %local_folder.display(),
        downloaded,
        deleted,
        "Folder reconciled"
    );

    Ok(ReconcileOutcome {
        downloaded,
        deleted,
    })
}

/// Snapshot the basenames of plain files currently in `folder`.
async fn snapshot_local(folder: &Path) -> Result<Vec<OsString>> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(folder).await?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            names.push(entry.file_name());
        }
    }
    Ok(names)
}

fn validate_identifier(identifier: &str) -> Result<()> {
    let unusable = identifier.is_empty()
        || identifier == "."
        || identifier == ".."
        || identifier.contains('/')
        || identifier.contains('\\');

    if unusable {
        return Err(SyncError::UnsafeIdentifier {
            identifier: identifier.to_string(),
        });
    }

    Ok(())
}
