//! Order domain models.
//!
//! Orders are append-only: once stored they never change except for their
//! status, which follows the single forward path
//! `pending -> confirmed -> delivered`. Nothing in this system advances an
//! order past `pending`; the later states exist so stored data can express
//! them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customer::CustomerInfo;
use super::id::{OrderId, ProductId};
use super::validation::ValidationError;

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Delivered,
}

/// One order line: a snapshot of the product at assembly time.
///
/// Name and price are copied, not referenced, so later catalog edits never
/// change what the customer agreed to pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// The product this line was assembled from.
    pub product_id: ProductId,
    /// Product name at assembly time.
    pub product_name: String,
    /// Unit price in whole FCFA at assembly time.
    pub price: u32,
    /// Units ordered.
    pub quantity: u32,
}

impl OrderItem {
    /// Line subtotal (price x quantity).
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

/// An order draft awaiting storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Contact and delivery details.
    pub customer_info: CustomerInfo,
    /// Snapshot lines.
    pub items: Vec<OrderItem>,
    /// Grand total in whole FCFA.
    pub total: u64,
}

impl NewOrder {
    /// Sum of line subtotals.
    #[must_use]
    pub fn computed_total(&self) -> u64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Validate the draft.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the customer details are malformed,
    /// any line has a zero quantity, the total is zero, or the submitted
    /// total disagrees with the sum of the lines.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.customer_info.validate()?;
        if self.items.iter().any(|item| item.quantity == 0) {
            return Err(ValidationError::InvalidQuantity);
        }
        if self.total == 0 {
            return Err(ValidationError::InvalidTotal);
        }
        if self.total != self.computed_total() {
            return Err(ValidationError::TotalMismatch);
        }
        Ok(())
    }

    /// Build the stored record under a freshly assigned ID.
    ///
    /// New orders always start out `pending`.
    #[must_use]
    pub fn into_order(self, id: OrderId, created_at: DateTime<Utc>) -> Order {
        Order {
            id,
            customer_info: self.customer_info,
            items: self.items,
            total: self.total,
            status: OrderStatus::Pending,
            created_at,
        }
    }
}

/// A stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Contact and delivery details, copied at assembly time.
    pub customer_info: CustomerInfo,
    /// Snapshot lines.
    pub items: Vec<OrderItem>,
    /// Grand total in whole FCFA, fixed at creation.
    pub total: u64,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::customer::tests::sample_customer;

    fn sample_draft() -> NewOrder {
        NewOrder {
            customer_info: sample_customer(),
            items: vec![
                OrderItem {
                    product_id: ProductId::new("p-1"),
                    product_name: "African Print Dress".to_string(),
                    price: 25_000,
                    quantity: 2,
                },
                OrderItem {
                    product_id: ProductId::new("p-2"),
                    product_name: "Leather Sandals".to_string(),
                    price: 15_000,
                    quantity: 1,
                },
            ],
            total: 65_000,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(sample_draft().validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut draft = sample_draft();
        draft.items[0].quantity = 0;
        draft.total = draft.computed_total();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidQuantity));
    }

    #[test]
    fn test_zero_total_rejected() {
        let draft = NewOrder {
            customer_info: sample_customer(),
            items: Vec::new(),
            total: 0,
        };
        assert_eq!(draft.validate(), Err(ValidationError::InvalidTotal));
    }

    #[test]
    fn test_mismatched_total_rejected() {
        let mut draft = sample_draft();
        draft.total = 1_000;
        assert_eq!(draft.validate(), Err(ValidationError::TotalMismatch));
    }

    #[test]
    fn test_into_order_starts_pending() {
        let created_at = Utc::now();
        let order = sample_draft().into_order(OrderId::new("o-1"), created_at);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.created_at, created_at);
        assert_eq!(order.total, 65_000);
        assert_eq!(order.items.len(), 2);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Delivered).unwrap(),
            "\"delivered\""
        );
    }
}
