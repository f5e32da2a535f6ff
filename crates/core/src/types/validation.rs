//! Validation errors for user-supplied input.
//!
//! Validation failures are always surfaced to the caller and are kept
//! distinct from "not found" so the HTTP layer can map them to different
//! status codes.

use thiserror::Error;

/// A rejected field in user-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Product or customer name is empty.
    #[error("name is required")]
    MissingName,

    /// Product description is empty.
    #[error("description is required")]
    MissingDescription,

    /// Product has no images.
    #[error("at least one image is required")]
    MissingImages,

    /// Category value outside the fixed enumeration.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Phone number shorter than the minimum length.
    #[error("valid phone number is required")]
    InvalidPhone,

    /// Delivery address shorter than the minimum length.
    #[error("address is required")]
    InvalidAddress,

    /// Order line quantity of zero.
    #[error("quantity must be positive")]
    InvalidQuantity,

    /// Order total of zero (empty order or all lines dropped).
    #[error("order total must be positive")]
    InvalidTotal,

    /// Submitted order total disagrees with the sum of its items.
    #[error("order total does not match items")]
    TotalMismatch,
}
