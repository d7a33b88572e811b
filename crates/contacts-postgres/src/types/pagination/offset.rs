//! Offset-based pagination for database queries.
//!
//! Page numbers and page sizes arrive from untrusted query strings, so every
//! constructor normalizes its input instead of rejecting it: a page below one
//! becomes the first page and a page size outside `1..=MAX_LIMIT` falls back
//! to [`DEFAULT_LIMIT`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of items per page when none (or an invalid one) is requested.
pub const DEFAULT_LIMIT: i64 = 10;

/// Maximum number of items per page.
pub const MAX_LIMIT: i64 = 100;

/// A normalized `LIMIT`/`OFFSET` window over an ordered query.
///
/// Built from a 1-based page number with [`OffsetPagination::from_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OffsetPagination {
    /// 1-based page number, never below one.
    pub page: i64,
    /// Rows per page, always within `1..=MAX_LIMIT`.
    pub limit: i64,
    /// Rows skipped before the page starts.
    pub offset: i64,
    /// Whether the query also counts every matching row.
    #[serde(default)]
    pub include_count: bool,
}

impl OffsetPagination {
    /// Creates the window for `page` of `page_size` rows.
    ///
    /// Pages below one select the first page and page sizes outside
    /// `1..=MAX_LIMIT` select [`DEFAULT_LIMIT`].
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let limit = if (1..=MAX_LIMIT).contains(&page_size) {
            page_size
        } else {
            DEFAULT_LIMIT
        };

        let page = page.max(1);
        Self {
            page,
            limit,
            offset: (page - 1).saturating_mul(limit),
            include_count: false,
        }
    }

    /// Requests the total number of matching rows alongside the page.
    pub fn with_count(mut self) -> Self {
        self.include_count = true;
        self
    }

    /// Returns the 1-based page number this window selects.
    ///
    /// Kept apart from `offset`, which saturates for pages past the last row.
    pub fn page_number(&self) -> i64 {
        self.page
    }

    /// Returns the number of rows per page.
    pub fn page_size(&self) -> i64 {
        self.limit
    }
}

impl Default for OffsetPagination {
    fn default() -> Self {
        Self::from_page(1, DEFAULT_LIMIT)
    }
}

/// Rows of one page and, when requested, the number of rows across all pages.
#[derive(Debug, Clone)]
pub struct OffsetPage<T> {
    /// Rows of the requested page.
    pub items: Vec<T>,
    /// Count of every matching row, `None` unless `include_count` was set.
    pub total: Option<i64>,
}

impl<T> OffsetPage<T> {
    /// Creates a page from its rows and optional total.
    pub fn new(items: Vec<T>, total: Option<i64>) -> Self {
        Self { items, total }
    }

    /// Creates a page with no rows and a total of zero.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Some(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let pagination = OffsetPagination::from_page(1, 20);
        assert_eq!((pagination.limit, pagination.offset), (20, 0));
        assert!(!pagination.include_count);
        assert!(pagination.with_count().include_count);
    }

    #[test]
    fn later_pages_skip_previous_rows() {
        assert_eq!(OffsetPagination::from_page(2, 20).offset, 20);
        assert_eq!(OffsetPagination::from_page(3, 10).offset, 20);
        assert_eq!(OffsetPagination::from_page(3, 10).page_number(), 3);
    }

    #[test]
    fn page_below_one_is_first_page() {
        for page in [0, -1, i64::MIN] {
            let pagination = OffsetPagination::from_page(page, 20);
            assert_eq!(pagination.offset, 0);
            assert_eq!(pagination.page_number(), 1);
        }
    }

    #[test]
    fn out_of_range_page_size_is_default() {
        for page_size in [0, -3, MAX_LIMIT + 1] {
            assert_eq!(OffsetPagination::from_page(1, page_size).limit, DEFAULT_LIMIT);
        }

        assert_eq!(OffsetPagination::from_page(1, 1).limit, 1);
        assert_eq!(OffsetPagination::from_page(1, MAX_LIMIT).limit, MAX_LIMIT);
    }

    #[test]
    fn huge_page_saturates() {
        let pagination = OffsetPagination::from_page(i64::MAX, MAX_LIMIT);
        assert_eq!(pagination.offset, i64::MAX);
        assert_eq!(pagination.page_number(), i64::MAX);

        let pagination = OffsetPagination::from_page(1_000_000_000_000_000_000, 100);
        assert_eq!(pagination.page_number(), 1_000_000_000_000_000_000);
    }

    #[test]
    fn default_is_first_page_of_ten() {
        let pagination = OffsetPagination::default();
        assert_eq!(pagination.page_size(), 10);
        assert_eq!(pagination.page_number(), 1);
    }

    #[test]
    fn empty_page_counts_zero() {
        let page: OffsetPage<i32> = OffsetPage::empty();
        assert!(page.items.is_empty());
        assert_eq!(page.total, Some(0));
    }
}
