//! Pagination query parameters.
//!
//! Page numbers and page sizes are parsed leniently: a value that is not an
//! integer is treated as missing, and out-of-range values are normalized by
//! [`OffsetPagination::from_page`] instead of being rejected.

use contacts_postgres::types::{ContactFilter, DEFAULT_LIMIT, OffsetPagination};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Parses an optional integer, treating anything unparsable as absent.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.trim().parse().ok()))
}

/// Page-based pagination parameters.
#[must_use]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageQuery {
    /// 1-based page number, defaults to 1.
    #[serde(default, deserialize_with = "lenient_i64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Items per page, between 1 and 100, defaults to 10.
    #[serde(default, deserialize_with = "lenient_i64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl PageQuery {
    /// Creates a query for the given page and page size.
    #[inline]
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Returns the normalized pagination, always requesting a total count.
    pub fn pagination(&self) -> OffsetPagination {
        OffsetPagination::from_page(self.page.unwrap_or(1), self.limit.unwrap_or(DEFAULT_LIMIT))
            .with_count()
    }
}

impl From<PageQuery> for OffsetPagination {
    #[inline]
    fn from(query: PageQuery) -> Self {
        query.pagination()
    }
}

/// Search query parameters.
#[must_use]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchQuery {
    /// Case-insensitive term matched against name, email and company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Pagination parameters.
    #[serde(flatten)]
    pub page: PageQuery,
}

impl SearchQuery {
    /// Returns the search term, or `None` when it is missing or empty.
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    /// Returns the filter for the search term.
    pub fn filter(&self) -> Option<ContactFilter> {
        self.term().map(|q| ContactFilter::new().with_search(q))
    }

    /// Returns the normalized pagination.
    #[inline]
    pub fn pagination(&self) -> OffsetPagination {
        self.page.pagination()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(query: &str) -> anyhow::Result<T> {
        let value: serde_json::Map<String, serde_json::Value> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_owned(), serde_json::Value::String(v.to_owned())))
            .collect();
        Ok(serde_json::from_value(serde_json::Value::Object(value))?)
    }

    #[test]
    fn defaults_to_first_page() -> anyhow::Result<()> {
        let query: PageQuery = parse("")?;
        let pagination = query.pagination();

        assert_eq!(pagination.page_number(), 1);
        assert_eq!(pagination.page_size(), DEFAULT_LIMIT);
        assert!(pagination.include_count);
        Ok(())
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() -> anyhow::Result<()> {
        let query: PageQuery = parse("page=abc&limit=xyz")?;
        assert_eq!(query, PageQuery::default());

        let query: PageQuery = parse("page=0&limit=500")?;
        let pagination = query.pagination();
        assert_eq!(pagination.page_number(), 1);
        assert_eq!(pagination.page_size(), DEFAULT_LIMIT);

        let query: PageQuery = parse("page=-3&limit=0")?;
        assert_eq!(query.pagination().offset, 0);
        Ok(())
    }

    #[test]
    fn valid_values_are_kept() -> anyhow::Result<()> {
        let query: PageQuery = parse("page=3&limit=25")?;
        let pagination = query.pagination();

        assert_eq!(pagination.page_number(), 3);
        assert_eq!(pagination.page_size(), 25);
        assert_eq!(pagination.offset, 50);
        Ok(())
    }

    #[test]
    fn empty_search_term_is_missing() -> anyhow::Result<()> {
        let query: SearchQuery = parse("q=&page=2")?;
        assert_eq!(query.term(), None);
        assert!(query.filter().is_none());
        assert_eq!(query.pagination().page_number(), 2);

        let query: SearchQuery = parse("q=silva")?;
        assert_eq!(query.term(), Some("silva"));
        Ok(())
    }
}
