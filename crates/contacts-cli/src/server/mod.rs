//! HTTP server startup with graceful shutdown and lifecycle logging.

mod error;
mod http_server;
mod lifecycle;
mod shutdown;

pub use self::error::{Result, ServerError};
pub use self::http_server::serve;
