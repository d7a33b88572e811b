//! Contact model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::contacts;

/// Contact model representing a single address book entry.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Contact {
    /// Unique, strictly increasing contact identifier.
    pub id: i64,
    /// Full name (2-100 characters).
    pub name: String,
    /// Email address, unique among live contacts.
    pub email: String,
    /// Phone number, empty when not provided.
    pub phone: String,
    /// Company name, empty when not provided.
    pub company: String,
    /// Timestamp when the contact was created.
    pub created_at: Timestamp,
    /// Timestamp when the contact was last updated.
    pub updated_at: Timestamp,
    /// Timestamp when the contact was soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

/// Data for creating a new contact.
#[derive(Debug, Default, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewContact {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Company name.
    pub company: String,
}

/// Data for updating a contact.
///
/// `None` leaves the column untouched; `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateContact {
    /// Full name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Company name.
    pub company: Option<String>,
}

impl Contact {
    /// Returns whether the contact has a phone number.
    pub fn has_phone(&self) -> bool {
        !self.phone.is_empty()
    }

    /// Returns whether the contact has a company.
    pub fn has_company(&self) -> bool {
        !self.company.is_empty()
    }
}

impl NewContact {
    /// Creates a new contact with only the required fields set.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the company name.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Sample contacts inserted into an empty database on request.
    pub fn samples() -> Vec<Self> {
        [
            ("João Silva", "joao.silva@example.com", "+55 11 99999-1111", "Tech Corp"),
            ("Maria Santos", "maria.santos@example.com", "+55 11 99999-2222", "Design Studio"),
            ("Pedro Oliveira", "pedro.oliveira@example.com", "+55 11 99999-3333", "Marketing Agency"),
            ("Ana Costa", "ana.costa@example.com", "+55 11 99999-4444", "Consulting Group"),
            ("Carlos Ferreira", "carlos.ferreira@example.com", "+55 11 99999-5555", "Startup Inc"),
            ("Lucia Rodrigues", "lucia.rodrigues@example.com", "+55 11 99999-6666", "Finance Corp"),
            ("Roberto Alves", "roberto.alves@example.com", "+55 11 99999-7777", "Healthcare Ltd"),
            ("Fernanda Lima", "fernanda.lima@example.com", "+55 11 99999-8888", "Education Center"),
            ("Marcos Pereira", "marcos.pereira@example.com", "+55 11 99999-9999", "Real Estate"),
            ("Juliana Rocha", "juliana.rocha@example.com", "+55 11 99999-0000", "Retail Store"),
        ]
        .into_iter()
        .map(|(name, email, phone, company)| {
            Self::new(name, email).with_phone(phone).with_company(company)
        })
        .collect()
    }
}

impl UpdateContact {
    /// Returns whether no column would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.company.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_unique_and_complete() {
        let samples = NewContact::samples();
        assert_eq!(samples.len(), 10);

        let mut emails: Vec<_> = samples.iter().map(|c| c.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), 10);

        for sample in &samples {
            assert!((2..=100).contains(&sample.name.chars().count()));
            assert!((10..=20).contains(&sample.phone.chars().count()));
            assert!(!sample.company.is_empty());
        }
    }

    #[test]
    fn new_contact_defaults_optional_fields_to_empty() {
        let contact = NewContact::new("Ana Costa", "ana@example.com");
        assert!(contact.phone.is_empty());
        assert!(contact.company.is_empty());
    }

    #[test]
    fn update_contact_is_empty() {
        assert!(UpdateContact::default().is_empty());

        let changes = UpdateContact {
            phone: Some(String::new()),
            ..UpdateContact::default()
        };
        assert!(!changes.is_empty());
    }
}
