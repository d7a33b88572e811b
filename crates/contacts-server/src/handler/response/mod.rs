//! Response types for HTTP handlers.

use contacts_postgres::types::{OffsetPage, OffsetPagination};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod contacts;
mod errors;
mod monitors;

pub use contacts::*;
pub use errors::*;
pub use monitors::*;

/// Generic paginated response envelope.
///
/// Serialized as `{data, total, page, limit, total_pages}`. `data` is always
/// an array, empty when the requested page lies past the last match.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(rename = "{T}sPage")]
pub struct Page<T> {
    /// Items in this page.
    pub data: Vec<T>,
    /// Total number of matching items across all pages.
    pub total: i64,
    /// Current 1-based page number.
    pub page: i64,
    /// Maximum number of items per page.
    pub limit: i64,
    /// Total number of pages, zero when nothing matched.
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Creates a page, deriving `total_pages` from `total` and `limit`.
    pub fn new(data: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        let total_pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Maps items from one type to another.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }

    /// Creates a page from an offset page, mapping items using the provided function.
    pub fn from_offset_page<M, F>(page: OffsetPage<M>, pagination: &OffsetPagination, f: F) -> Self
    where
        F: FnMut(M) -> T,
    {
        let total = page
            .total
            .unwrap_or(pagination.offset.saturating_add(page.items.len() as i64));
        let data = page.items.into_iter().map(f).collect();

        Self::new(
            data,
            total,
            pagination.page_number(),
            pagination.page_size(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Page::<()>::new(Vec::new(), 0, 1, 10).total_pages, 0);
        assert_eq!(Page::<()>::new(Vec::new(), 1, 1, 10).total_pages, 1);
        assert_eq!(Page::<()>::new(Vec::new(), 10, 1, 10).total_pages, 1);
        assert_eq!(Page::<()>::new(Vec::new(), 11, 1, 10).total_pages, 2);
        assert_eq!(Page::<()>::new(Vec::new(), 250, 1, 100).total_pages, 3);
    }

    #[test]
    fn from_offset_page_uses_normalized_pagination() {
        let pagination = OffsetPagination::from_page(3, 500).with_count();
        let page = OffsetPage::new(vec![1, 2, 3], Some(23));
        let page = Page::from_offset_page(page, &pagination, |n| n * 2);

        assert_eq!(page.data, vec![2, 4, 6]);
        assert_eq!(page.total, 23);
        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn huge_page_is_echoed_unchanged() {
        let pagination = OffsetPagination::from_page(1_000_000_000_000_000_000, 100).with_count();
        let page = Page::<i64>::from_offset_page(OffsetPage::new(Vec::new(), Some(3)), &pagination, |n| n);

        assert_eq!(page.page, 1_000_000_000_000_000_000);
        assert_eq!(page.limit, 100);
        assert_eq!(page.total_pages, 1);
        assert!(page.data.is_empty());
    }

    #[test]
    fn empty_page_serializes_data_as_array() -> anyhow::Result<()> {
        let pagination = OffsetPagination::default();
        let page = Page::<i64>::from_offset_page(OffsetPage::empty(), &pagination, |n| n);
        let value = serde_json::to_value(&page)?;

        assert_eq!(
            value,
            serde_json::json!({
                "data": [],
                "total": 0,
                "page": 1,
                "limit": 10,
                "total_pages": 0,
            })
        );
        Ok(())
    }
}
