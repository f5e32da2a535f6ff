//! The authoritative in-memory product catalog.

use std::sync::RwLock;

use afrishop_core::{NewProduct, Product, ProductId, ProductUpdate, ValidationError};

use super::{read_guard, seed, write_guard};

/// Owns the full set of products behind a lock.
///
/// `list` returns products in insertion order. Mutations validate input
/// first, then take the write lock once, so each call is atomic.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl CatalogStore {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-loaded with the launch products.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::new();
        for input in seed::sample_products() {
            let id = ProductId::generate();
            write_guard(&store.products).push(input.into_product(id));
        }
        store
    }

    /// All products, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        read_guard(&self.products).clone()
    }

    /// Look up one product.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<Product> {
        read_guard(&self.products)
            .iter()
            .find(|product| product.id == *id)
            .cloned()
    }

    /// Validate and store a new product under a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the input fields are malformed;
    /// nothing is stored in that case.
    pub fn create(&self, input: NewProduct) -> Result<Product, ValidationError> {
        input.validate()?;
        let product = input.into_product(ProductId::generate());
        write_guard(&self.products).push(product.clone());
        Ok(product)
    }

    /// Merge the provided fields over an existing product.
    ///
    /// Validation applies only to the provided fields. Returns `Ok(None)`
    /// when no product has the given id, so callers can distinguish a bad
    /// payload from a bad identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when a provided field is malformed; the
    /// stored record is untouched in that case.
    pub fn update(
        &self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<Option<Product>, ValidationError> {
        update.validate()?;
        let mut products = write_guard(&self.products);
        match products.iter_mut().find(|product| product.id == *id) {
            Some(product) => {
                product.apply(update);
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    /// Remove a product. Returns whether a record was removed; deleting an
    /// absent id is a no-op that reports `false`, every time.
    pub fn delete(&self, id: &ProductId) -> bool {
        let mut products = write_guard(&self.products);
        let before = products.len();
        products.retain(|product| product.id != *id);
        products.len() < before
    }
}
