//! Request types for HTTP handlers.

mod contacts;
mod paginations;
mod paths;
mod validations;

pub use contacts::*;
pub use paginations::*;
pub use paths::*;
pub use validations::*;
