//! Contacts table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Contact table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum ContactConstraints {
    // Contact validation constraints
    #[strum(serialize = "contacts_name_length")]
    NameLength,
    #[strum(serialize = "contacts_email_not_empty")]
    EmailNotEmpty,
    #[strum(serialize = "contacts_phone_length")]
    PhoneLength,
    #[strum(serialize = "contacts_company_length_max")]
    CompanyLengthMax,

    // Contact chronological constraints
    #[strum(serialize = "contacts_updated_after_created")]
    UpdatedAfterCreated,
    #[strum(serialize = "contacts_deleted_after_created")]
    DeletedAfterCreated,

    // Contact unique constraints
    #[strum(serialize = "contacts_email_unique_idx")]
    EmailUnique,
}

impl ContactConstraints {
    /// Creates a new [`ContactConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            ContactConstraints::NameLength
            | ContactConstraints::EmailNotEmpty
            | ContactConstraints::PhoneLength
            | ContactConstraints::CompanyLengthMax => ConstraintCategory::Validation,

            ContactConstraints::UpdatedAfterCreated | ContactConstraints::DeletedAfterCreated => {
                ConstraintCategory::Chronological
            }

            ContactConstraints::EmailUnique => ConstraintCategory::Uniqueness,
        }
    }
}

impl From<ContactConstraints> for String {
    #[inline]
    fn from(val: ContactConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for ContactConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
