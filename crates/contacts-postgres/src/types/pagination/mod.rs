//! Pagination types for database queries.

mod offset;

pub use offset::{DEFAULT_LIMIT, MAX_LIMIT, OffsetPage, OffsetPagination};
