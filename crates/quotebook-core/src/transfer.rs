//! Quote list export/import
//!
//! Exports are a pretty-printed JSON array of `{text, category}` objects.
//! Imports accept the same shape; elements without string `text` and
//! `category` values are skipped rather than failing the whole file.

use crate::error::{QuoteError, QuoteResult};
use crate::quote::Quote;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Default export file name
pub const DEFAULT_EXPORT_FILE: &str = "quotes.json";

/// How imported quotes combine with the current list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Append after the existing quotes
    #[default]
    Append,
    /// Discard the existing quotes
    Replace,
}

/// Serialize quotes as a pretty-printed JSON array
///
/// # Errors
/// Returns an error if serialization fails
pub fn export_json(quotes: &[Quote]) -> QuoteResult<String> {
    Ok(serde_json::to_string_pretty(quotes)?)
}

/// Write quotes to a JSON file
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn export_to_file(quotes: &[Quote], path: &Path) -> QuoteResult<()> {
    let json = export_json(quotes)?;
    fs::write(path, json).map_err(|e| QuoteError::io(path, &e))?;
    log::debug!("Exported {} quotes to {}", quotes.len(), path.display());
    Ok(())
}

/// Parse import content into the valid quotes it contains
///
/// # Errors
/// Returns `InvalidImport` if the content is not JSON or not an array
pub fn parse_import(content: &str) -> QuoteResult<Vec<Quote>> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| QuoteError::InvalidImport(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(QuoteError::InvalidImport(
            "expected a JSON array of quotes".to_string(),
        ));
    };

    let total = items.len();
    let quotes: Vec<Quote> = items.iter().filter_map(quote_from_value).collect();
    if quotes.len() < total {
        log::warn!("Skipped {} invalid import entries", total - quotes.len());
    }

    Ok(quotes)
}

/// Read and parse an import file
///
/// # Errors
/// Returns an error if the file cannot be read or is not a quote array
pub fn read_import_file(path: &Path) -> QuoteResult<Vec<Quote>> {
    let content = fs::read_to_string(path).map_err(|e| QuoteError::io(path, &e))?;
    parse_import(&content)
}

/// Parse the quotes stored under the `quotes` key
///
/// Returns `None` when the value is not a JSON array.
#[must_use]
pub fn parse_stored(content: &str) -> Option<Vec<Quote>> {
    let Value::Array(items) = serde_json::from_str::<Value>(content).ok()? else {
        return None;
    };

    let quotes: Vec<Quote> = items.iter().filter_map(quote_from_value).collect();
    if quotes.len() < items.len() {
        log::warn!(
            "Dropped {} unreadable stored quotes; they are removed on the next save",
            items.len() - quotes.len()
        );
    }
    Some(quotes)
}

fn quote_from_value(value: &Value) -> Option<Quote> {
    let text = value.get("text")?.as_str()?;
    let category = value.get("category")?.as_str()?;
    let quote = Quote::new(text, category);
    quote.is_valid().then_some(quote)
}
