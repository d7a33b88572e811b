use axum::extract::path::ErrorKind as PathErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Enhanced path parameter extractor with improved error handling.
///
/// A parameter that fails to parse produces a 400 response naming the
/// parameter, so `/contacts/abc` against `{contact_id}` yields
/// "Invalid contact ID" rather than a plain-text axum rejection.
///
/// [`Path`]: AxumPath
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    /// Creates a new instance of [`Path`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner path parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extractor =
            <AxumPath<T> as FromRequestParts<S>>::from_request_parts(parts, state).await;
        extractor.map(|x| Self(x.0)).map_err(Into::into)
    }
}

impl From<PathRejection> for Error<'static> {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                let context = sanitize_error_message(&err.body_text());
                let message = match err.into_kind() {
                    PathErrorKind::ParseErrorAtKey { key, .. }
                    | PathErrorKind::InvalidUtf8InPathParam { key } => invalid_param_message(&key),
                    _ => "Invalid path parameter".to_owned(),
                };

                ErrorKind::BadRequest
                    .with_message(message)
                    .with_context(context)
            }
            PathRejection::MissingPathParams(err) => ErrorKind::InternalServerError
                .with_message("Path processing failed")
                .with_context(format!(
                    "path parameters missing, route configuration is likely wrong: {}",
                    sanitize_error_message(&err.body_text())
                )),
            other => ErrorKind::InternalServerError
                .with_message("Path processing failed")
                .with_context(other.body_text()),
        }
    }
}

/// Builds a user-facing message for a path parameter that failed to parse.
///
/// `contact_id` becomes "Invalid contact ID".
pub(crate) fn invalid_param_message(key: &str) -> String {
    match key.strip_suffix("_id") {
        Some(resource) => format!("Invalid {} ID", resource.replace('_', " ")),
        None => format!("Invalid {}", key.replace('_', " ")),
    }
}

/// Keeps rejection messages short enough for a single log line.
fn sanitize_error_message(message: &str) -> String {
    message
        .lines()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(150)
        .collect()
}

impl<T> aide::OperationInput for Path<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumPath::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AxumPath::<T>::inferred_early_responses(ctx, operation)
    }
}
