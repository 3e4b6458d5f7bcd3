//! Sync operations
//!
//! One pass fetches the remote list, merges it into the local book and then
//! uploads the whole local list, whether or not anything changed. There is
//! no versioning: the last upload wins.

use chrono::{DateTime, Utc};
use quotebook_core::book::messages;
use quotebook_core::storage::KeyValueStore;
use quotebook_core::{MergeReport, Notice, Notifier, QuoteBook};

use crate::client::RemoteQuotes;
use crate::error::SyncError;

/// Result of one sync pass
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Quotes received from the remote
    pub fetched: usize,
    /// Local changes made by the merge
    pub merge: MergeReport,
    /// Quotes uploaded afterwards
    pub pushed: usize,
    /// When the pass finished
    pub synced_at: DateTime<Utc>,
}

/// Fetch, merge, persist on change, then push the full list
///
/// The synced notice goes out as soon as a changed list is persisted, so a
/// later upload failure does not hide it.
///
/// # Errors
/// Returns an error if the fetch, the local save or the push fails
pub async fn sync_quotes<S, R, N>(
    book: &mut QuoteBook<S>,
    remote: &R,
    notifier: &mut N,
) -> Result<SyncReport, SyncError>
where
    S: KeyValueStore,
    R: RemoteQuotes + ?Sized,
    N: Notifier + ?Sized,
{
    let incoming = remote.fetch_quotes().await?;
    let merge = book.apply_remote(&incoming)?;
    if merge.changed() {
        notifier.notify(Notice::success(messages::SYNCED));
    }

    remote.push_quotes(book.quotes()).await?;

    Ok(SyncReport {
        fetched: incoming.len(),
        merge,
        pushed: book.quotes().len(),
        synced_at: Utc::now(),
    })
}

/// Run one sync pass and turn the outcome into a notice
///
/// Failures are logged and reported as a notice only; the next tick is
/// the only retry.
pub async fn sync_tick<S, R, N>(
    book: &mut QuoteBook<S>,
    remote: &R,
    notifier: &mut N,
) -> Option<SyncReport>
where
    S: KeyValueStore,
    R: RemoteQuotes + ?Sized,
    N: Notifier + ?Sized,
{
    match sync_quotes(book, remote, notifier).await {
        Ok(report) => {
            log::info!(
                "Sync: fetched {}, added {}, updated {}, pushed {}",
                report.fetched,
                report.merge.added,
                report.merge.updated,
                report.pushed
            );
            Some(report)
        }
        Err(e) => {
            log::warn!("Sync failed: {e}");
            notifier.notify(Notice::error(messages::SYNC_FAILED));
            None
        }
    }
}
