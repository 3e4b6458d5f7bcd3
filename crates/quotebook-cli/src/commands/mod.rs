//! CLI command handlers
//!
//! Each group of subcommands has its own module. `Context` opens the data
//! directory, configuration and database shared by all of them.

pub mod quotes;
pub mod session;
pub mod shell;
pub mod sync;
pub mod transfer;

use anyhow::{anyhow, Context as _};
use quotebook_core::config::{defaults, resolve_data_dir};
use quotebook_core::storage::{Database, ItemStore};
use quotebook_core::{Config, Notice, NoticeLevel, Notifier, QuoteBook};
use std::path::{Path, PathBuf};

/// Resources opened once per invocation
pub struct Context {
    pub data_dir: PathBuf,
    pub config: Config,
    db: Database,
}

impl Context {
    /// Open the data directory, creating it if needed
    pub fn open(data_dir: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir(data_dir)
            .ok_or_else(|| anyhow!("Cannot determine data directory; set QUOTEBOOK_HOME"))?;
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create {}", data_dir.display()))?;

        let config = Config::load(&data_dir)?;
        let db = Database::open(&data_dir.join(defaults::DATABASE_FILE))?;
        log::debug!("Using data directory {}", data_dir.display());

        Ok(Self {
            data_dir,
            config,
            db,
        })
    }

    /// Load the quote book with the saved filter applied as recorded
    pub fn book(&self) -> anyhow::Result<QuoteBook<ItemStore<'_>>> {
        let mut book = QuoteBook::load(ItemStore::new(self.db.connection()))?;
        book.apply_saved_filter()?;
        Ok(book)
    }
}

/// Prints notices to the terminal
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => eprintln!("{notice}"),
            NoticeLevel::Info | NoticeLevel::Success => println!("{notice}"),
        }
    }
}
