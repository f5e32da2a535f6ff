//! Customer contact details collected at checkout.

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Minimum accepted phone number length.
pub const MIN_PHONE_LEN: usize = 8;

/// Minimum accepted delivery address length.
pub const MIN_ADDRESS_LEN: usize = 5;

/// Contact and delivery details for an order.
///
/// Copied into the order at assembly time; orders never reference shared
/// customer records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    /// Full name.
    pub name: String,
    /// Phone number, at least [`MIN_PHONE_LEN`] characters.
    pub phone: String,
    /// Delivery address, at least [`MIN_ADDRESS_LEN`] characters.
    pub address: String,
}

impl CustomerInfo {
    /// Validate all fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the name is empty or the phone or
    /// address falls below its minimum length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.phone.trim().chars().count() < MIN_PHONE_LEN {
            return Err(ValidationError::InvalidPhone);
        }
        if self.address.trim().chars().count() < MIN_ADDRESS_LEN {
            return Err(ValidationError::InvalidAddress);
        }
        Ok(())
    }
}
