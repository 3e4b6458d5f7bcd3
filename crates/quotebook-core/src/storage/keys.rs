//! Storage key names

/// Full quote list as a JSON array
pub const QUOTES: &str = "quotes";

/// Last selected category filter
pub const SELECTED_CATEGORY: &str = "selectedCategory";

/// Last displayed quote as a JSON object (session scope)
pub const LAST_VIEWED_QUOTE: &str = "lastViewedQuote";
