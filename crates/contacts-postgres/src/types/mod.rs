//! Contains constraints, pagination, filtering and other custom types.

mod constraints;
mod filtering;
mod pagination;

pub use constraints::{ConstraintCategory, ConstraintViolation, ContactConstraints};
pub use filtering::ContactFilter;
pub use pagination::{DEFAULT_LIMIT, MAX_LIMIT, OffsetPage, OffsetPagination};
