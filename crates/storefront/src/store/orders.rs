//! The append-only in-memory order store.

use std::sync::RwLock;

use chrono::Utc;

use afrishop_core::{NewOrder, Order, OrderId};

use super::{read_guard, write_guard};

/// Owns submitted orders behind a lock.
///
/// Orders are append-only: there is no update or delete, and nothing here
/// ever mutates a stored record. Status transitions past `pending` are
/// driven out of band and have no endpoint.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
}

impl OrderStore {
    /// Create an empty order store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a validated draft: assigns a fresh identifier, the `pending`
    /// status, and the creation timestamp, then appends.
    pub fn create(&self, draft: NewOrder) -> Order {
        let order = draft.into_order(OrderId::generate(), Utc::now());
        write_guard(&self.orders).push(order.clone());
        order
    }

    /// All orders, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Order> {
        read_guard(&self.orders).clone()
    }

    /// Look up one order.
    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<Order> {
        read_guard(&self.orders)
            .iter()
            .find(|order| order.id == *id)
            .cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use afrishop_core::{CustomerInfo, OrderItem, OrderStatus, ProductId};

    fn draft() -> NewOrder {
        NewOrder {
            customer_info: CustomerInfo {
                name: "Ama Mensah".to_string(),
                phone: "+22912345678".to_string(),
                address: "12 Rue des Cocotiers, Cotonou".to_string(),
            },
            items: vec![OrderItem {
                product_id: ProductId::new("p-1"),
                product_name: "Shea Butter".to_string(),
                price: 5_000,
                quantity: 2,
            }],
            total: 10_000,
        }
    }

    #[test]
    fn test_create_assigns_id_status_and_timestamp() {
        let store = OrderStore::new();
        let before = Utc::now();
        let order = store.create(draft());

        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.created_at >= before);
        assert_eq!(store.get(&order.id), Some(order));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = OrderStore::new();
        let first = store.create(draft());
        let second = store.create(draft());

        let ids: Vec<OrderId> = store.list().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, [first.id, second.id]);
    }

    #[test]
    fn test_get_absent_id_is_none() {
        let store = OrderStore::new();
        assert_eq!(store.get(&OrderId::new("ghost")), None);
    }

    #[test]
    fn test_stored_order_is_a_copy() {
        let store = OrderStore::new();
        let mut order = store.create(draft());
        let id = order.id.clone();

        // Mutating the returned record must not touch the stored one.
        order.total = 0;
        assert_eq!(store.get(&id).map(|o| o.total), Some(10_000));
    }
}
