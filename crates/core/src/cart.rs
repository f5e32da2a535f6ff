//! The client-scoped shopping cart aggregate.
//!
//! A cart is an ordered sequence of `{productId, quantity}` lines holding
//! weak references into the catalog: products are always resolved by lookup
//! at read time, and a line whose product has since been deleted contributes
//! nothing to totals and is dropped from rendered views. Order assembly
//! relies on that skip policy matching [`Cart::total`] exactly, so it must
//! not be "fixed" to raise on missing products.
//!
//! The serialized form (`#[serde(transparent)]`, camelCase line fields) is
//! the persisted representation stored under the fixed `afrishop-cart` key;
//! it round-trips without loss.

use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Weak reference to a catalog product.
    pub product_id: ProductId,
    /// Units requested, always at least one.
    pub quantity: u32,
}

/// An ordered collection of cart lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` units of a product.
    ///
    /// Merge-on-add: if a line for the product exists its quantity is
    /// incremented, otherwise a new line is appended. A zero quantity is
    /// ignored so no line ever drops below one unit. Stock is deliberately
    /// not checked here; whether to block adding an out-of-stock product is
    /// a presentation decision.
    pub fn add_item(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem {
                product_id,
                quantity,
            });
        }
    }

    /// Remove the line for a product. No-op when absent.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.items.retain(|item| item.product_id != *product_id);
    }

    /// Set a line's quantity to exactly `quantity`.
    ///
    /// A quantity of zero removes the line. Absent lines are left alone;
    /// this never creates one.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == *product_id) {
            item.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total units across all lines (not the number of lines).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Cart total in whole FCFA against the given catalog.
    ///
    /// Lines whose product is missing from `products` contribute zero.
    #[must_use]
    pub fn total(&self, products: &[Product]) -> u64 {
        self.items
            .iter()
            .filter_map(|item| {
                products
                    .iter()
                    .find(|product| product.id == item.product_id)
                    .map(|product| u64::from(product.price) * u64::from(item.quantity))
            })
            .sum()
    }
}
