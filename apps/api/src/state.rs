//! # Application State
//!
//! Shared state for the API handlers.
//!
//! ## Why One Struct?
//! The API owns exactly two pieces of shared state: the read-only catalog
//! and the append-only order store. Both are cheap cloneable handles, so
//! every connection task carries its own `AppState` clone and handlers
//! borrow the piece they need.

use savor_store::{Catalog, OrderStore};

/// State shared by all handlers.
///
/// ## Thread Safety
/// - `Catalog`: read-only after construction
/// - `OrderStore`: appends serialized by its internal mutex
#[derive(Debug, Clone)]
pub struct AppState {
    /// The seeded, read-only catalog.
    pub catalog: Catalog,

    /// Placed orders, process lifetime.
    pub orders: OrderStore,
}

impl AppState {
    /// Creates state over an explicit catalog with a fresh order store.
    ///
    /// Tests use this with fixture catalogs for full isolation.
    pub fn new(catalog: Catalog) -> Self {
        AppState {
            catalog,
            orders: OrderStore::new(),
        }
    }

    /// Creates state over the deterministic demo catalog.
    pub fn seeded() -> Self {
        AppState::new(Catalog::seeded())
    }
}
