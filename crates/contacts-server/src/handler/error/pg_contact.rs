//! Contact constraint violation error handlers.

use contacts_postgres::types::ContactConstraints;

use crate::handler::{Error, ErrorKind};

impl From<ContactConstraints> for Error<'static> {
    fn from(c: ContactConstraints) -> Self {
        let context = match c {
            ContactConstraints::EmailUnique => {
                return ErrorKind::Conflict
                    .with_context("email is already used by another live contact");
            }
            ContactConstraints::NameLength => "name must be between 2 and 100 characters",
            ContactConstraints::EmailNotEmpty => "email must not be empty",
            ContactConstraints::PhoneLength => "phone must be empty or between 10 and 20 characters",
            ContactConstraints::CompanyLengthMax => "company must be at most 100 characters",
            ContactConstraints::UpdatedAfterCreated => "updated_at precedes created_at",
            ContactConstraints::DeletedAfterCreated => "deleted_at precedes created_at",
        };

        ErrorKind::InternalServerError.with_context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_is_conflict() {
        let error = Error::from(ContactConstraints::EmailUnique);
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn check_constraints_are_internal() {
        for constraint in [
            ContactConstraints::NameLength,
            ContactConstraints::PhoneLength,
            ContactConstraints::UpdatedAfterCreated,
        ] {
            let error = Error::from(constraint);
            assert_eq!(error.kind(), ErrorKind::InternalServerError);
            assert!(error.context().is_some());
        }
    }
}
