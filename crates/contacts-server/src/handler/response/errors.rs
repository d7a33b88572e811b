use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// HTTP error response body.
///
/// Serialized as `{"error": "..."}`, with `details` present only when there is
/// something more specific to report, such as failed validation rules.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse<'a> {
    /// User-facing error message.
    pub error: Cow<'a, str>,
    /// Additional details, such as which validation rules failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Cow<'a, str>>,

    /// Internal context for debugging, logged but never sent to the client.
    #[serde(skip)]
    pub context: Option<Cow<'a, str>>,
    /// HTTP status code (not serialized in JSON).
    #[serde(skip, default = "default_status")]
    #[schemars(skip)]
    pub status: StatusCode,
}

fn default_status() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new("Invalid request", StatusCode::BAD_REQUEST);
    // Duplicate emails are reported like any other storage failure.
    pub const CONFLICT: Self =
        Self::new("Internal server error", StatusCode::INTERNAL_SERVER_ERROR);
    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self =
        Self::new("Internal server error", StatusCode::INTERNAL_SERVER_ERROR);
    pub const NOT_FOUND: Self = Self::new("Not found", StatusCode::NOT_FOUND);
    pub const REQUEST_TIMEOUT: Self = Self::new("Request timeout", StatusCode::REQUEST_TIMEOUT);
    pub const VALIDATION_FAILED: Self = Self::new("Validation failed", StatusCode::BAD_REQUEST);

    /// Creates a new error response.
    #[inline]
    pub const fn new(error: &'a str, status: StatusCode) -> Self {
        Self {
            error: Cow::Borrowed(error),
            details: None,
            context: None,
            status,
        }
    }

    /// Replaces the user-facing error message.
    pub fn with_error(mut self, error: impl Into<Cow<'a, str>>) -> Self {
        self.error = error.into();
        self
    }

    /// Attaches details to the error response.
    pub fn with_details(mut self, details: impl Into<Cow<'a, str>>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attaches context to the error response.
    /// If context already exists, it merges them with a separator.
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        let new_context = context.into();
        self.context = Some(match self.context {
            Some(existing) => Cow::Owned(format!("{}; {}", existing, new_context)),
            None => new_context,
        });
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                error = %self.error,
                context = ?self.context,
                "HTTP error response"
            );
        } else {
            tracing::warn!(
                status = %self.status,
                error = %self.error,
                details = ?self.details,
                context = ?self.context,
                "HTTP error response"
            );
        }

        (self.status, Json(self)).into_response()
    }
}
