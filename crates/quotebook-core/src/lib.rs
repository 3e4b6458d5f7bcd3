//! Quotebook Core - quote list, filtering, merge and storage
//!
//! This crate provides the quote model, the pure list operations
//! (category filter, random pick, remote merge), JSON import/export,
//! key/value storage backed by `SQLite`, and the `QuoteBook` state object
//! that ties them together.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod book;
pub mod config;
pub mod error;
pub mod filter;
pub mod merge;
pub mod notice;
pub mod quote;
pub mod storage;
pub mod transfer;

pub use book::QuoteBook;
pub use config::Config;
pub use error::{QuoteError, QuoteResult};
pub use filter::CategoryFilter;
pub use merge::MergeReport;
pub use notice::{Notice, NoticeLevel, Notifier, RecordingNotifier};
pub use quote::Quote;
pub use transfer::ImportMode;
