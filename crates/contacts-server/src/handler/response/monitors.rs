//! Monitor response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Liveness payload returned by the health endpoint.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Health {
    /// Always `ok` while the process is serving requests.
    pub status: String,
    /// Human-readable status message.
    pub message: String,
    /// API version.
    pub version: String,
    /// Timestamp when this status was generated.
    pub timestamp: Timestamp,
}

impl Health {
    /// API version reported by the health endpoint.
    pub const API_VERSION: &'static str = "1.0.0";
}

impl Default for Health {
    fn default() -> Self {
        Self {
            status: "ok".to_owned(),
            message: "API is healthy".to_owned(),
            version: Self::API_VERSION.to_owned(),
            timestamp: Timestamp::now(),
        }
    }
}
