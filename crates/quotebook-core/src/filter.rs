//! Category filtering and random selection

use crate::quote::Quote;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Value stored for the "all categories" filter
pub const ALL_CATEGORIES: &str = "all";

/// Active category constraint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No constraint
    #[default]
    All,
    /// Only quotes with exactly this category
    Category(String),
}

impl CategoryFilter {
    /// Whether a quote passes the filter
    #[must_use]
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => quote.category == *name,
        }
    }

    /// Whether this is the `All` filter
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{ALL_CATEGORIES}"),
            Self::Category(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(s.to_string())
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

/// Quotes passing the filter, in list order
#[must_use]
pub fn filter_by_category<'a>(quotes: &'a [Quote], filter: &CategoryFilter) -> Vec<&'a Quote> {
    quotes.iter().filter(|q| filter.matches(q)).collect()
}

/// Uniformly pick one quote that passes the filter
pub fn pick_random<'a, R: Rng + ?Sized>(
    quotes: &'a [Quote],
    filter: &CategoryFilter,
    rng: &mut R,
) -> Option<&'a Quote> {
    filter_by_category(quotes, filter).choose(rng).copied()
}

/// Sorted, de-duplicated, non-empty categories
#[must_use]
pub fn categories(quotes: &[Quote]) -> Vec<String> {
    quotes
        .iter()
        .map(|q| q.category.as_str())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
