//! Quote type and default seed

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single quote with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote text
    pub text: String,
    /// Category label
    pub category: String,
}

impl Quote {
    /// Create a new quote
    #[must_use]
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Whether both fields are non-empty
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.text.is_empty() && !self.category.is_empty()
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.category)
    }
}

/// Quotes used when nothing usable is stored
#[must_use]
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The best way to predict the future is to create it.",
            "Motivation",
        ),
        Quote::new("Success is not final; failure is not fatal.", "Success"),
        Quote::new("Believe you can and you're halfway there.", "Mindset"),
    ]
}
