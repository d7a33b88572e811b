//! Path parameter types for HTTP handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::handler::{ErrorKind, Result};

/// Path parameters for single-contact operations.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct ContactPathParams {
    /// Unique identifier of the contact.
    pub contact_id: u64,
}

impl ContactPathParams {
    /// Returns the contact id as stored in the database.
    ///
    /// Ids that do not fit a signed 64-bit integer can never exist, so they
    /// are rejected the same way as unparsable ones.
    pub fn contact_id(&self) -> Result<i64> {
        i64::try_from(self.contact_id).map_err(|_| {
            ErrorKind::BadRequest
                .with_message("Invalid contact ID")
                .with_context(format!("contact_id={} is out of range", self.contact_id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_id_in_range() -> anyhow::Result<()> {
        let params = ContactPathParams { contact_id: 42 };
        assert_eq!(params.contact_id()?, 42);
        Ok(())
    }

    #[test]
    fn contact_id_out_of_range() {
        let params = ContactPathParams {
            contact_id: u64::MAX,
        };
        let error = params.contact_id().unwrap_err();

        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.message(), Some("Invalid contact ID"));
    }
}
