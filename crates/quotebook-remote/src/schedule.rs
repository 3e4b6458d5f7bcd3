//! Periodic sync schedule
//!
//! Fixed period, first run after one full period, no backoff or jitter.
//! A pass always completes before the next tick is awaited.

use std::future::Future;
use std::time::Duration;

use quotebook_core::storage::KeyValueStore;
use quotebook_core::{Notifier, QuoteBook};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::client::RemoteQuotes;
use crate::sync::sync_tick;

/// Interval whose first tick fires one period from now
#[must_use]
pub fn sync_interval(period: Duration) -> Interval {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Sync on every tick until `shutdown` resolves, returning the pass count
pub async fn watch<S, R, N, F>(
    book: &mut QuoteBook<S>,
    remote: &R,
    notifier: &mut N,
    period: Duration,
    shutdown: F,
) -> usize
where
    S: KeyValueStore,
    R: RemoteQuotes + ?Sized,
    N: Notifier + ?Sized,
    F: Future<Output = ()>,
{
    let mut interval = sync_interval(period);
    let mut passes = 0;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            () = &mut shutdown => break,
            _ = interval.tick() => {
                sync_tick(book, remote, notifier).await;
                passes += 1;
            }
        }
    }

    log::info!("Stopped periodic sync after {passes} passes");
    passes
}
