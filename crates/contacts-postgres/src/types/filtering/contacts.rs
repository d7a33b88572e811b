//! Filtering options for contact queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Filter options for contacts.
///
/// An empty filter matches every live contact.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ContactFilter {
    /// Case-insensitive substring matched against name, email and company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ContactFilter {
    /// Creates a new empty filter.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by a search term.
    #[inline]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns whether any filter is active.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
    }

    /// Returns the `ILIKE` pattern for the search term, if any.
    ///
    /// `%`, `_` and `\` in the term are escaped so they match literally.
    pub fn search_pattern(&self) -> Option<String> {
        let search = self.search.as_deref().filter(|s| !s.is_empty())?;

        let mut pattern = String::with_capacity(search.len() + 2);
        pattern.push('%');
        for ch in search.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');

        Some(pattern)
    }
}
