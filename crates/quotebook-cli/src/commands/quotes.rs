//! Quote list commands
//!
//! Handles: quotebook status/show/add/list/categories/filter

use quotebook_core::book::messages;
use quotebook_core::CategoryFilter;

use super::Context;

/// Print the restored display, filter and quote count
pub fn status(ctx: &Context) -> anyhow::Result<()> {
    let mut book = ctx.book()?;
    book.restore_display()?;

    println!("{}", book.display());
    println!("Filter: {}", book.filter());
    println!("Quotes: {} ({} in filter)", book.quotes().len(), book.filtered().len());
    Ok(())
}

/// Show a random quote honouring the active filter
pub fn show(ctx: &Context) -> anyhow::Result<()> {
    let mut book = ctx.book()?;
    book.show_random(&mut rand::thread_rng())?;
    println!("{}", book.display());
    Ok(())
}

/// Add a quote
pub fn add(ctx: &Context, text: &str, category: &str) -> anyhow::Result<()> {
    let mut book = ctx.book()?;
    let quote = book.add_quote(text, category)?;
    log::debug!("Added {quote}");
    println!("{}", messages::QUOTE_ADDED);
    Ok(())
}

/// List quotes, filtered unless `all` is set
pub fn list(ctx: &Context, all: bool, json: bool) -> anyhow::Result<()> {
    let book = ctx.book()?;
    let quotes: Vec<_> = if all {
        book.quotes().iter().collect()
    } else {
        book.filtered()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&quotes)?);
        return Ok(());
    }

    if quotes.is_empty() {
        println!("{}", messages::NO_QUOTES_FOUND);
        return Ok(());
    }

    if !all && !book.filter().is_all() {
        println!("Category: {}", book.filter());
    }
    for quote in quotes {
        println!("  {quote}");
    }
    Ok(())
}

/// List categories, marking the active filter
pub fn categories(ctx: &Context) -> anyhow::Result<()> {
    let book = ctx.book()?;
    let active = book.filter();

    let marker = |selected: bool| if selected { "*" } else { " " };
    println!("{} all", marker(active.is_all()));
    for category in book.categories() {
        let selected = *active == CategoryFilter::Category(category.clone());
        println!("{} {category}", marker(selected));
    }
    Ok(())
}

/// Set the active filter and print the resulting display
pub fn filter(ctx: &Context, category: &str) -> anyhow::Result<()> {
    let mut book = ctx.book()?;
    book.set_filter(CategoryFilter::from(category.trim()))?;
    println!("{}", book.display());
    Ok(())
}
