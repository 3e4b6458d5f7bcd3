//! Sync command
//!
//! Handles: quotebook sync [--watch]

use quotebook_remote::{sync_tick, watch, PostsClient, SyncReport};

use super::{ConsoleNotifier, Context};

pub fn execute(ctx: &Context, watch_mode: bool) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = PostsClient::from_config(&ctx.config);
    let mut book = ctx.book()?;
    let mut notifier = ConsoleNotifier;

    runtime.block_on(async {
        if watch_mode {
            let period = ctx.config.sync_interval();
            println!(
                "Syncing with {} every {}s (Ctrl-C to stop)",
                client.url(),
                period.as_secs()
            );
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log::warn!("Cannot listen for Ctrl-C: {e}");
                }
            };
            watch(&mut book, &client, &mut notifier, period, shutdown).await;
        } else if let Some(report) = sync_tick(&mut book, &client, &mut notifier).await {
            print_report(&report);
        }
    });

    Ok(())
}

pub fn print_report(report: &SyncReport) {
    println!(
        "Fetched {}, added {}, updated {}, uploaded {} ({})",
        report.fetched,
        report.merge.added,
        report.merge.updated,
        report.pushed,
        report.synced_at.format("%Y-%m-%d %H:%M:%S")
    );
}
