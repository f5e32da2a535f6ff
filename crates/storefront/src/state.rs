//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::store::{CatalogStore, OrderStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and owns the in-memory
/// stores; it is the single store instance for the process, created at
/// startup and dropped at shutdown. There is no hidden global state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
    orders: OrderStore,
}

impl AppState {
    /// Create application state with the launch catalog loaded.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_stores(config, CatalogStore::seeded(), OrderStore::new())
    }

    /// Create application state over explicit stores.
    #[must_use]
    pub fn with_stores(config: StorefrontConfig, catalog: CatalogStore, orders: OrderStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                orders,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }
}
