//! Request extractors with consistent JSON rejections.
//!
//! Each extractor wraps its axum counterpart and turns rejections into the
//! server's [`Error`] so clients always receive `{"error": ...}` bodies.
//!
//! [`Error`]: crate::handler::Error

pub mod enhanced_json;
pub mod enhanced_path;
pub mod enhanced_query;
pub mod validated_json;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
pub use self::enhanced_query::Query;
pub use self::validated_json::ValidateJson;
