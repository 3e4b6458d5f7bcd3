//! Export/import commands
//!
//! Handles: quotebook export/import

use quotebook_core::book::messages;
use quotebook_core::ImportMode;
use std::path::Path;

use super::Context;

/// Write all quotes to a JSON file
pub fn export(ctx: &Context, output: &Path) -> anyhow::Result<()> {
    let book = ctx.book()?;
    book.export_to_file(output)?;
    println!("Exported {} quotes to {}", book.quotes().len(), output.display());
    Ok(())
}

/// Import quotes from a JSON file
pub fn import(ctx: &Context, file: &Path, replace: bool) -> anyhow::Result<()> {
    let mode = if replace {
        ImportMode::Replace
    } else {
        ImportMode::Append
    };

    let mut book = ctx.book()?;
    let count = book.import_file(file, mode)?;
    println!("{}", messages::imported(count));
    Ok(())
}
