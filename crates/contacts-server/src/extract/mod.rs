//! Request extractors used by the contact handlers.
//!
//! - [`Json`]: JSON bodies, rejected with "Invalid request body"
//! - [`ValidateJson`]: JSON bodies checked with `validator`
//! - [`Path`]: path parameters, rejected with a message naming the parameter
//! - [`Query`]: query strings

pub mod reject;

pub use crate::extract::reject::{Json, Path, Query, ValidateJson};
