//! # Order Store
//!
//! Process-lifetime storage for placed orders.
//!
//! ## Append-Only By Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Store Contract                                 │
//! │                                                                         │
//! │   ✅ insert(order)   - append a freshly materialized order             │
//! │   ✅ get(id)         - read back a stored order                        │
//! │   ❌ update          - orders are immutable once placed                │
//! │   ❌ delete          - nothing is ever removed                         │
//! │                                                                         │
//! │   Lifetime: as long as the hosting process. Durability is explicitly   │
//! │   out of scope; a restart starts from an empty store.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Not a Global?
//! The store is an explicit value handed to whoever needs it, so every test
//! gets a fresh, isolated store and the hosting process decides the
//! lifetime. Cloning the handle shares the same underlying map.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use savor_core::Order;
use tracing::info;

/// Append-only, in-memory order storage.
///
/// ## Thread Safety
/// Appends and reads are serialized by an internal mutex, so concurrent
/// handler tasks can share a cloned handle without a write-write race.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Arc<Mutex<HashMap<String, Order>>>,
}

impl OrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        OrderStore::default()
    }

    /// Appends a placed order.
    ///
    /// Ids are UUID v4, assigned by the pipeline; a collision would mean the
    /// pipeline handed out the same id twice, which is a programming error.
    pub fn insert(&self, order: Order) {
        info!(order_id = %order.id, total = order.total, "Order stored");
        let mut orders = self.orders.lock().expect("order store mutex poisoned");
        orders.insert(order.id.clone(), order);
    }

    /// Reads an order back by id. No side effects.
    pub fn get(&self, id: &str) -> Option<Order> {
        let orders = self.orders.lock().expect("order store mutex poisoned");
        orders.get(id).cloned()
    }

    /// Number of orders stored (for diagnostics).
    pub fn count(&self) -> usize {
        let orders = self.orders.lock().expect("order store mutex poisoned");
        orders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use savor_core::{Order, OrderStatus};

    fn test_order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            user_id: "u-1".to_string(),
            restaurant_id: "r-1".to_string(),
            items: vec![],
            status: OrderStatus::Pending,
            subtotal: 10.0,
            delivery_fee: 3.99,
            tax: 0.89,
            total: 14.88,
            created_at: Utc::now(),
            estimated_delivery: "30-45 min".to_string(),
        }
    }

    #[test]
    fn test_insert_then_get_returns_same_order() {
        let store = OrderStore::new();
        let order = test_order("o-1");

        store.insert(order.clone());

        assert_eq!(store.get("o-1").unwrap(), order);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = OrderStore::new();
        assert!(store.get("does-not-exist").is_none());
    }

    #[test]
    fn test_cloned_handle_shares_storage() {
        let store = OrderStore::new();
        let handle = store.clone();

        handle.insert(test_order("o-1"));

        assert!(store.get("o-1").is_some());
    }
}
