//! The quote book: owned list state plus its persistence
//!
//! `QuoteBook` holds the quote list, the active category filter and the
//! current display text. All reads and writes of the `quotes`,
//! `selectedCategory` and `lastViewedQuote` items go through the injected
//! [`KeyValueStore`].

use crate::error::{QuoteError, QuoteResult};
use crate::filter::{self, CategoryFilter};
use crate::merge::{self, MergeReport};
use crate::quote::{default_quotes, Quote};
use crate::storage::items::{KeyValueStore, Scope};
use crate::storage::keys;
use crate::transfer::{self, ImportMode};
use rand::Rng;
use std::path::Path;

/// Display and notice texts
pub mod messages {
    pub const BEGIN: &str = "Click 'Show New Quote' to begin.";
    pub const SHOWING_ALL: &str = "Showing all categories. Click 'Show New Quote'.";
    pub const NO_QUOTES_FOUND: &str = "No quotes found for this category.";
    pub const NO_QUOTES_AVAILABLE: &str = "No quotes available for this category.";
    pub const QUOTE_ADDED: &str = "Quote added successfully!";
    pub const SYNCED: &str = "Quotes synced with server!";
    pub const SYNC_FAILED: &str = "Server sync failed.";

    /// Notice after a successful import
    #[must_use]
    pub fn imported(count: usize) -> String {
        format!("Imported {count} quotes successfully")
    }
}

/// Quote list state bound to a store
pub struct QuoteBook<S> {
    store: S,
    quotes: Vec<Quote>,
    filter: CategoryFilter,
    display: String,
}

impl<S: KeyValueStore> QuoteBook<S> {
    /// Load the quote list from the store
    ///
    /// Falls back to the default seed when nothing is stored or the stored
    /// value is not a JSON array.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub fn load(store: S) -> QuoteResult<Self> {
        let quotes = match store.get(Scope::Local, keys::QUOTES)? {
            Some(raw) => transfer::parse_stored(&raw).unwrap_or_else(|| {
                log::warn!("Stored quotes are not a JSON array, using defaults");
                default_quotes()
            }),
            None => default_quotes(),
        };
        log::debug!("Loaded {} quotes", quotes.len());

        Ok(Self {
            store,
            quotes,
            filter: CategoryFilter::All,
            display: String::new(),
        })
    }

    /// Current quote list in insertion order
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Active category filter
    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Underlying store
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the book and return its store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Sorted, de-duplicated categories of the current list
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        filter::categories(&self.quotes)
    }

    /// Quotes passing the active filter
    #[must_use]
    pub fn filtered(&self) -> Vec<&Quote> {
        filter::filter_by_category(&self.quotes, &self.filter)
    }

    /// Restore the filter and the last viewed quote
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or written
    pub fn initialize(&mut self) -> QuoteResult<()> {
        self.restore_filter()?;
        self.restore_display()
    }

    /// Show the last viewed quote, or the start prompt when there is none
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub fn restore_display(&mut self) -> QuoteResult<()> {
        match self.store.get(Scope::Session, keys::LAST_VIEWED_QUOTE)? {
            Some(raw) => match serde_json::from_str::<Quote>(&raw) {
                Ok(quote) => self.display = quote.to_string(),
                Err(e) => log::debug!("Ignoring unreadable last viewed quote: {e}"),
            },
            None => self.display = messages::BEGIN.to_string(),
        }

        Ok(())
    }

    /// Apply the saved filter as recorded, even if no quote matches it
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub fn apply_saved_filter(&mut self) -> QuoteResult<()> {
        if let Some(raw) = self.store.get(Scope::Local, keys::SELECTED_CATEGORY)? {
            self.filter = CategoryFilter::from(raw.as_str());
        }
        Ok(())
    }

    /// Re-apply the stored filter if it still names a known category
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or written
    pub fn restore_filter(&mut self) -> QuoteResult<()> {
        let stored = self
            .store
            .get(Scope::Local, keys::SELECTED_CATEGORY)?
            .map(|raw| CategoryFilter::from(raw.as_str()));

        match stored {
            Some(CategoryFilter::All) => self.set_filter(CategoryFilter::All),
            Some(CategoryFilter::Category(name)) if self.categories().contains(&name) => {
                self.set_filter(CategoryFilter::Category(name))
            }
            _ => {
                self.filter = CategoryFilter::All;
                Ok(())
            }
        }
    }

    /// Set and persist the active filter, updating the display
    ///
    /// The filter is recorded even when no quote matches it.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written
    pub fn set_filter(&mut self, filter: CategoryFilter) -> QuoteResult<()> {
        self.store
            .set(Scope::Local, keys::SELECTED_CATEGORY, &filter.to_string())?;

        self.display = if filter.is_all() {
            messages::SHOWING_ALL.to_string()
        } else {
            self.quotes
                .iter()
                .find(|q| filter.matches(q))
                .map_or_else(|| messages::NO_QUOTES_FOUND.to_string(), ToString::to_string)
        };
        self.filter = filter;

        Ok(())
    }

    /// Show a uniformly random quote from the filtered set
    ///
    /// # Errors
    /// Returns `NoQuotes` if nothing passes the filter, or a storage error
    pub fn show_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> QuoteResult<Quote> {
        let Some(quote) = filter::pick_random(&self.quotes, &self.filter, rng).cloned() else {
            self.display = messages::NO_QUOTES_AVAILABLE.to_string();
            return Err(QuoteError::NoQuotes {
                filter: self.filter.to_string(),
            });
        };

        self.display = quote.to_string();
        let json = serde_json::to_string(&quote)?;
        self.store
            .set(Scope::Session, keys::LAST_VIEWED_QUOTE, &json)?;

        Ok(quote)
    }

    /// The quote last shown in this session, if any
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub fn last_viewed(&self) -> QuoteResult<Option<Quote>> {
        Ok(self
            .store
            .get(Scope::Session, keys::LAST_VIEWED_QUOTE)?
            .and_then(|raw| serde_json::from_str(&raw).ok()))
    }

    /// Add a quote from user input
    ///
    /// Both fields are trimmed and must be non-empty.
    ///
    /// # Errors
    /// Returns `MissingField` on empty input, or a storage error
    pub fn add_quote(&mut self, text: &str, category: &str) -> QuoteResult<&Quote> {
        let (text, category) = (text.trim(), category.trim());
        if text.is_empty() || category.is_empty() {
            return Err(QuoteError::MissingField);
        }

        self.quotes.push(Quote::new(text, category));
        self.save()?;
        self.restore_filter()?;

        Ok(&self.quotes[self.quotes.len() - 1])
    }

    /// Pretty-printed JSON export of the list
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn export_json(&self) -> QuoteResult<String> {
        transfer::export_json(&self.quotes)
    }

    /// Export the list to a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn export_to_file(&self, path: &Path) -> QuoteResult<()> {
        transfer::export_to_file(&self.quotes, path)
    }

    /// Import quotes from JSON content, returning how many were taken
    ///
    /// The list is untouched when the content is rejected.
    ///
    /// # Errors
    /// Returns `InvalidImport` if the content is not a quote array
    pub fn import_json(&mut self, content: &str, mode: ImportMode) -> QuoteResult<usize> {
        let imported = transfer::parse_import(content)?;
        self.take_imported(imported, mode)
    }

    /// Import quotes from a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a quote array
    pub fn import_file(&mut self, path: &Path, mode: ImportMode) -> QuoteResult<usize> {
        let imported = transfer::read_import_file(path)?;
        self.take_imported(imported, mode)
    }

    fn take_imported(&mut self, imported: Vec<Quote>, mode: ImportMode) -> QuoteResult<usize> {
        let count = imported.len();
        match mode {
            ImportMode::Append => self.quotes.extend(imported),
            ImportMode::Replace => self.quotes = imported,
        }
        self.save()?;
        self.restore_filter()?;
        log::info!("Imported {count} quotes ({mode:?})");
        Ok(count)
    }

    /// Merge a remote list into the local one
    ///
    /// Persists and refreshes the filter only when something changed.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written
    pub fn apply_remote(&mut self, remote: &[Quote]) -> QuoteResult<MergeReport> {
        let report = merge::merge(&mut self.quotes, remote);
        if report.changed() {
            self.save()?;
            self.restore_filter()?;
        }
        Ok(report)
    }

    /// Persist the list under the `quotes` key
    ///
    /// # Errors
    /// Returns an error if the store cannot be written
    pub fn save(&mut self) -> QuoteResult<()> {
        let json = serde_json::to_string(&self.quotes)?;
        self.store.set(Scope::Local, keys::QUOTES, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn book() -> QuoteBook<MemoryStore> {
        QuoteBook::load(MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_load_seeds_defaults() {
        let book = book();
        assert_eq!(book.quotes(), default_quotes().as_slice());
        assert_eq!(book.filter(), &CategoryFilter::All);
    }

    #[test]
    fn test_load_non_array_falls_back() {
        let mut store = MemoryStore::new();
        store.set(Scope::Local, keys::QUOTES, r#"{"a":1}"#).unwrap();
        let book = QuoteBook::load(store).unwrap();
        assert_eq!(book.quotes().len(), 3);
    }

    #[test]
    fn test_load_stored_list() {
        let mut store = MemoryStore::new();
        store
            .set(Scope::Local, keys::QUOTES, r#"[{"text":"x","category":"y"}]"#)
            .unwrap();
        let book = QuoteBook::load(store).unwrap();
        assert_eq!(book.quotes(), [Quote::new("x", "y")]);
    }

    #[test]
    fn test_initialize_without_session() {
        let mut book = book();
        book.initialize().unwrap();
        assert_eq!(book.display(), messages::BEGIN);
    }

    #[test]
    fn test_initialize_restores_filter_and_last_quote() {
        let mut store = MemoryStore::new();
        store
            .set(Scope::Local, keys::SELECTED_CATEGORY, "Success")
            .unwrap();
        store
            .set(
                Scope::Session,
                keys::LAST_VIEWED_QUOTE,
                r#"{"text":"t","category":"c"}"#,
            )
            .unwrap();

        let mut book = QuoteBook::load(store).unwrap();
        book.initialize().unwrap();

        assert_eq!(book.filter(), &CategoryFilter::from("Success"));
        assert_eq!(book.display(), "\"t\" — c");
    }

    #[test]
    fn test_restore_ignores_unknown_category() {
        let mut store = MemoryStore::new();
        store
            .set(Scope::Local, keys::SELECTED_CATEGORY, "Vanished")
            .unwrap();
        let mut book = QuoteBook::load(store).unwrap();
        book.restore_filter().unwrap();
        assert!(book.filter().is_all());
    }

    #[test]
    fn test_saved_filter_applies_without_matches() {
        let mut book = book();
        book.set_filter("Nothing".into()).unwrap();

        let mut book = QuoteBook::load(book.into_store()).unwrap();
        book.apply_saved_filter().unwrap();
        assert_eq!(book.filter(), &CategoryFilter::from("Nothing"));

        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            book.show_random(&mut rng),
            Err(QuoteError::NoQuotes { .. })
        ));
    }

    #[test]
    fn test_add_falls_back_to_all_for_unknown_saved_filter() {
        let mut store = MemoryStore::new();
        store
            .set(Scope::Local, keys::SELECTED_CATEGORY, "Nothing")
            .unwrap();
        let mut book = QuoteBook::load(store).unwrap();
        book.apply_saved_filter().unwrap();

        book.add_quote("fresh", "Other").unwrap();
        assert!(book.filter().is_all());
    }

    #[test]
    fn test_set_filter_shows_first_match() {
        let mut book = book();
        book.set_filter("Mindset".into()).unwrap();
        assert_eq!(
            book.display(),
            "\"Believe you can and you're halfway there.\" — Mindset"
        );
    }

    #[test]
    fn test_set_filter_with_no_matches_is_still_recorded() {
        let mut book = book();
        book.set_filter("Nothing".into()).unwrap();

        assert_eq!(book.display(), messages::NO_QUOTES_FOUND);
        assert_eq!(
            book.store()
                .get(Scope::Local, keys::SELECTED_CATEGORY)
                .unwrap()
                .as_deref(),
            Some("Nothing")
        );
    }

    #[test]
    fn test_set_filter_all() {
        let mut book = book();
        book.set_filter(CategoryFilter::All).unwrap();
        assert_eq!(book.display(), messages::SHOWING_ALL);
    }

    #[test]
    fn test_show_random_records_session_quote() {
        let mut book = book();
        let mut rng = StdRng::seed_from_u64(3);
        let shown = book.show_random(&mut rng).unwrap();

        assert_eq!(book.display(), shown.to_string());
        assert_eq!(book.last_viewed().unwrap(), Some(shown));
    }

    #[test]
    fn test_show_random_empty_filter() {
        let mut book = book();
        book.set_filter("Nothing".into()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let err = book.show_random(&mut rng).unwrap_err();
        assert!(matches!(err, QuoteError::NoQuotes { .. }));
        assert_eq!(book.display(), messages::NO_QUOTES_AVAILABLE);
        assert_eq!(book.last_viewed().unwrap(), None);
    }

    #[test]
    fn test_add_quote_trims_and_saves() {
        let mut book = book();
        let added = book.add_quote("  New one  ", " Fresh ").unwrap().clone();
        assert_eq!(added, Quote::new("New one", "Fresh"));

        let reloaded = QuoteBook::load(book.into_store()).unwrap();
        assert_eq!(reloaded.quotes().last(), Some(&added));
        assert!(reloaded.categories().contains(&"Fresh".to_string()));
    }

    #[test]
    fn test_add_quote_requires_both_fields() {
        let mut book = book();
        assert!(matches!(
            book.add_quote("text", "   "),
            Err(QuoteError::MissingField)
        ));
        assert!(matches!(
            book.add_quote("", "cat"),
            Err(QuoteError::MissingField)
        ));
        assert_eq!(book.quotes().len(), 3);
    }

    #[test]
    fn test_import_rejects_non_array_without_mutation() {
        let mut book = book();
        let before = book.quotes().to_vec();

        let err = book.import_json(r#""just a string""#, ImportMode::Append);
        assert!(matches!(err, Err(QuoteError::InvalidImport(_))));
        assert_eq!(book.quotes(), before.as_slice());
    }

    #[test]
    fn test_import_append_and_replace() {
        let mut book = book();
        let content = r#"[{"text":"a","category":"b"}]"#;

        assert_eq!(book.import_json(content, ImportMode::Append).unwrap(), 1);
        assert_eq!(book.quotes().len(), 4);

        assert_eq!(book.import_json(content, ImportMode::Replace).unwrap(), 1);
        assert_eq!(book.quotes(), [Quote::new("a", "b")]);
    }

    #[test]
    fn test_apply_remote_persists_only_on_change() {
        let mut book = book();
        let remote = vec![Quote::new(
            "Believe you can and you're halfway there.",
            "Growth",
        )];

        let report = book.apply_remote(&remote).unwrap();
        assert_eq!(report.updated, 1);
        assert!(book
            .store()
            .get(Scope::Local, keys::QUOTES)
            .unwrap()
            .unwrap()
            .contains("Growth"));

        assert!(!book.apply_remote(&remote).unwrap().changed());
    }

    #[test]
    fn test_apply_remote_keeps_filter_when_category_survives() {
        let mut book = book();
        book.set_filter("Success".into()).unwrap();
        book.apply_remote(&[Quote::new("new", "Other")]).unwrap();
        assert_eq!(book.filter(), &CategoryFilter::from("Success"));
    }
}
