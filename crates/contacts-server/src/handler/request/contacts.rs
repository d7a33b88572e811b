//! Contact request types.

use contacts_postgres::model::{NewContact, UpdateContact as UpdateContactModel};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use super::validations::{length_error, validate_phone};

/// Maximum length of a contact name.
pub const NAME_MAX_LENGTH: u64 = 100;
/// Minimum length of a contact name.
pub const NAME_MIN_LENGTH: u64 = 2;
/// Maximum length of a company name.
pub const COMPANY_MAX_LENGTH: u64 = 100;

/// Request payload for creating a new contact.
///
/// Missing fields deserialize as empty strings, so an omitted `name` or
/// `email` is reported as a validation failure rather than a malformed body.
#[must_use]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(default)]
pub struct CreateContact {
    /// Full name (2-100 characters).
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    /// Email address, unique among live contacts.
    #[validate(email)]
    pub email: String,
    /// Phone number, empty or 10-20 characters.
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    /// Company name (at most 100 characters).
    #[validate(length(max = 100))]
    pub company: String,
}

impl CreateContact {
    /// Converts this request into a database model.
    #[inline]
    pub fn into_model(self) -> NewContact {
        NewContact::new(self.name, self.email)
            .with_phone(self.phone)
            .with_company(self.company)
    }
}

/// A request field that is either absent or present with a value.
///
/// An explicit JSON `null` is treated the same as an omitted field. A present
/// empty string is kept, so `"phone": ""` clears the phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The field was not sent.
    Absent,
    /// The field was sent with a value.
    Present(T),
}

impl<T> Field<T> {
    /// Returns whether the field was sent.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns whether the field was not sent.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns a reference to the value if present.
    #[inline]
    pub fn as_present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Converts the field into an [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> Default for Field<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Field<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

impl<T> Serialize for Field<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

/// Request payload for a partial contact update.
///
/// Only the fields that are sent are validated and written.
#[must_use]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UpdateContact {
    /// New full name (2-100 characters).
    #[serde(skip_serializing_if = "Field::is_absent")]
    #[schemars(with = "Option<String>")]
    pub name: Field<String>,
    /// New email address.
    #[serde(skip_serializing_if = "Field::is_absent")]
    #[schemars(with = "Option<String>")]
    pub email: Field<String>,
    /// New phone number, empty to clear it.
    #[serde(skip_serializing_if = "Field::is_absent")]
    #[schemars(with = "Option<String>")]
    pub phone: Field<String>,
    /// New company name, empty to clear it.
    #[serde(skip_serializing_if = "Field::is_absent")]
    #[schemars(with = "Option<String>")]
    pub company: Field<String>,
}

impl UpdateContact {
    /// Converts this request into a database changeset.
    pub fn into_model(self) -> UpdateContactModel {
        UpdateContactModel {
            name: self.name.into_option(),
            email: self.email.into_option(),
            phone: self.phone.into_option(),
            company: self.company.into_option(),
        }
    }
}

impl Validate for UpdateContact {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(name) = self.name.as_present() {
            let length = name.chars().count() as u64;
            if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
                errors.add(
                    "name",
                    length_error(Some(NAME_MIN_LENGTH), Some(NAME_MAX_LENGTH)),
                );
            }
        }

        if let Some(email) = self.email.as_present()
            && !email.validate_email()
        {
            errors.add("email", ValidationError::new("email"));
        }

        if let Some(phone) = self.phone.as_present()
            && let Err(error) = validate_phone(phone)
        {
            errors.add("phone", error);
        }

        if let Some(company) = self.company.as_present()
            && company.chars().count() as u64 > COMPANY_MAX_LENGTH
        {
            errors.add("company", length_error(None, Some(COMPANY_MAX_LENGTH)));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateContact {
        CreateContact {
            name: "João Silva".to_owned(),
            email: "joao.silva@example.com".to_owned(),
            phone: "+55 11 99999-1111".to_owned(),
            company: "Tech Corp".to_owned(),
        }
    }

    #[test]
    fn create_contact_is_valid() {
        assert!(create_request().validate().is_ok());

        let minimal = CreateContact {
            name: "Al".to_owned(),
            email: "al@example.com".to_owned(),
            ..CreateContact::default()
        };
        assert!(minimal.validate().is_ok());
    }

    #[test]
    fn create_contact_reports_every_field() {
        let request = CreateContact {
            name: "A".to_owned(),
            email: "not-an-email".to_owned(),
            phone: "123".to_owned(),
            company: "c".repeat(101),
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("company"));
    }

    #[test]
    fn create_contact_missing_fields_fail_validation() -> anyhow::Result<()> {
        let request: CreateContact = serde_json::from_str("{}")?;
        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
        assert!(!errors.field_errors().contains_key("phone"));
        Ok(())
    }

    #[test]
    fn create_contact_into_model() {
        let model = create_request().into_model();
        assert_eq!(model.name, "João Silva");
        assert_eq!(model.company, "Tech Corp");
    }

    #[test]
    fn field_distinguishes_absent_from_empty() -> anyhow::Result<()> {
        let request: UpdateContact = serde_json::from_str(r#"{"phone": "", "company": null}"#)?;

        assert_eq!(request.name, Field::Absent);
        assert_eq!(request.phone, Field::Present(String::new()));
        assert_eq!(request.company, Field::Absent);

        let model = request.into_model();
        assert_eq!(model.name, None);
        assert_eq!(model.phone, Some(String::new()));
        assert_eq!(model.company, None);
        Ok(())
    }

    #[test]
    fn update_contact_validates_present_fields_only() -> anyhow::Result<()> {
        let request: UpdateContact = serde_json::from_str(r#"{"name": "Updated Name"}"#)?;
        assert!(request.validate().is_ok());

        let request = UpdateContact::default();
        assert!(request.validate().is_ok());

        let request: UpdateContact =
            serde_json::from_str(r#"{"name": "A", "email": "bad", "phone": "1"}"#)?;
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
        assert!(!fields.contains_key("company"));
        Ok(())
    }

    #[test]
    fn update_contact_rejects_empty_name() -> anyhow::Result<()> {
        let request: UpdateContact = serde_json::from_str(r#"{"name": ""}"#)?;
        assert!(request.validate().is_err());
        Ok(())
    }

    #[test]
    fn update_contact_skips_absent_fields_when_serialized() -> anyhow::Result<()> {
        let value = serde_json::to_value(UpdateContact {
            name: Field::Present("Updated Name".to_owned()),
            ..UpdateContact::default()
        })?;
        assert_eq!(value, serde_json::json!({ "name": "Updated Name" }));
        Ok(())
    }
}
