//! In-memory stores for catalog and orders.
//!
//! Everything here is memory-only and resets on restart; there is no
//! database. Each store owns its collection behind a lock so every
//! create/update/delete is applied as one atomic step - two concurrent
//! writers can never interleave field-level writes to the same record,
//! and concurrent updates to the same id resolve last-writer-wins.
//!
//! Collections are plain vectors: `list` order is insertion order, and
//! lookups are linear scans over catalog-sized data.

mod catalog;
mod orders;
pub mod seed;

pub use catalog::CatalogStore;
pub use orders::OrderStore;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Acquire a read guard, recovering from a poisoned lock.
///
/// Store values are plain data, valid after any panic mid-write.
pub(crate) fn read_guard<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Acquire a write guard, recovering from a poisoned lock.
pub(crate) fn write_guard<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
