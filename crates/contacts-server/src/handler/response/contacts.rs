//! Contact response types.

use contacts_postgres::model;
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Page;

/// Represents a contact.
///
/// The soft-delete marker is never exposed.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Contact {
    /// Unique contact identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number, empty when not provided.
    pub phone: String,
    /// Company name, empty when not provided.
    pub company: String,
    /// Timestamp when the contact was created.
    pub created_at: Timestamp,
    /// Timestamp when the contact was last updated.
    pub updated_at: Timestamp,
}

impl Contact {
    /// Creates a Contact response from a database model.
    pub fn from_model(contact: model::Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            company: contact.company,
            created_at: contact.created_at.into(),
            updated_at: contact.updated_at.into(),
        }
    }
}

impl From<model::Contact> for Contact {
    #[inline]
    fn from(contact: model::Contact) -> Self {
        Self::from_model(contact)
    }
}

/// Paginated response for contacts.
pub type ContactsPage = Page<Contact>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletion_marker_is_not_serialized() -> anyhow::Result<()> {
        let now = Timestamp::now();
        let contact = Contact::from_model(model::Contact {
            id: 7,
            name: "Ana Costa".to_owned(),
            email: "ana.costa@example.com".to_owned(),
            phone: String::new(),
            company: String::new(),
            created_at: now.into(),
            updated_at: now.into(),
            deleted_at: Some(now.into()),
        });

        let value = serde_json::to_value(&contact)?;
        let object = value.as_object().map(|o| o.len());

        assert_eq!(object, Some(7));
        assert_eq!(value["id"], 7);
        assert_eq!(value["phone"], "");
        assert!(value.get("deleted_at").is_none());
        Ok(())
    }
}
