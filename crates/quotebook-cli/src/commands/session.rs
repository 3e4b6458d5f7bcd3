//! Session-scoped state commands
//!
//! Handles: quotebook session clear/last

use clap::Subcommand;
use quotebook_core::storage::{KeyValueStore, Scope};

use super::Context;

/// Session commands
#[derive(Subcommand)]
pub enum SessionCommands {
    /// Forget session-scoped state such as the last viewed quote
    Clear,
    /// Print the last viewed quote of this session
    Last,
}

pub fn execute(ctx: &Context, action: SessionCommands) -> anyhow::Result<()> {
    let book = ctx.book()?;
    match action {
        SessionCommands::Clear => {
            let mut store = book.into_store();
            let cleared = store.clear(Scope::Session)?;
            println!("Cleared {cleared} session items.");
        }
        SessionCommands::Last => match book.last_viewed()? {
            Some(quote) => println!("{quote}"),
            None => println!("No quote viewed in this session."),
        },
    }
    Ok(())
}
