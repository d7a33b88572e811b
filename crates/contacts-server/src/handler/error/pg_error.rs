//! Constraint violation and database error to HTTP error conversion.

use contacts_postgres::types::ConstraintViolation;
use contacts_postgres::{PgError, PgResult};

use crate::handler::{Error, ErrorKind, Result};

/// Tracing target for database error conversion.
const TRACING_TARGET: &str = "contacts_server::postgres_constraints";

impl From<ConstraintViolation> for Error<'static> {
    fn from(constraint: ConstraintViolation) -> Self {
        match constraint {
            ConstraintViolation::Contact(c) => c.into(),
        }
    }
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout",
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(ref query_error) => {
                if let Some(constraint_name) = error.constraint()
                    && let Some(constraint) = ConstraintViolation::new(constraint_name)
                {
                    tracing::error!(
                        target: TRACING_TARGET,
                        constraint = constraint_name,
                        error = %query_error,
                        "query error (constraint violation)"
                    );
                    return constraint.into();
                }

                if error.is_unique_violation() {
                    tracing::error!(
                        target: TRACING_TARGET,
                        error = %query_error,
                        "query error (unique violation)"
                    );
                    return ErrorKind::Conflict.into_error();
                }

                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected database error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

/// Replaces the message of a failed database result with an operation-specific one.
///
/// ```rust,ignore
/// let contact = conn
///     .create_contact(new_contact)
///     .await
///     .or_message("Failed to create contact")?;
/// ```
pub trait PgResultExt<T> {
    /// Converts the error into an [`Error`] carrying `message`.
    fn or_message(self, message: &'static str) -> Result<T>;
}

impl<T> PgResultExt<T> for PgResult<T> {
    fn or_message(self, message: &'static str) -> Result<T> {
        self.map_err(|error| Error::from(error).with_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failure_carries_operation_message() {
        let result: PgResult<()> = Err(PgError::Unexpected("pool closed".into()));
        let error = result.or_message("Failed to fetch contacts").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert_eq!(error.message(), Some("Failed to fetch contacts"));
    }

    #[test]
    fn known_constraint_maps_through_violation() {
        let violation = ConstraintViolation::new("contacts_email_unique_idx");
        let error = violation.map(Error::from);
        assert_eq!(error.map(|e| e.kind()), Some(ErrorKind::Conflict));
    }
}
