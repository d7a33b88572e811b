//! Filtering options for database queries.

mod contacts;

pub use contacts::ContactFilter;
