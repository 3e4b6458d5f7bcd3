//! Quotebook Remote - posts endpoint client and sync loop
//!
//! Fetches the remote post list, merges it into the local quote book by
//! exact text match and pushes the full local list back.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod client;
pub mod error;
pub mod schedule;
pub mod sync;

pub use client::{PostsClient, RemoteQuotes};
pub use error::{RemoteError, SyncError};
pub use schedule::{sync_interval, watch};
pub use sync::{sync_quotes, sync_tick, SyncReport};
