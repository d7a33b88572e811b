//! [`Error`], [`ErrorKind`] and [`Result`].

mod http_error;
mod pg_contact;
mod pg_error;

pub use http_error::{Error, ErrorKind, Result};
pub use pg_error::PgResultExt;
