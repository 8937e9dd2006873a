//! # Order Pipeline
//!
//! Converts an untrusted client submission into a validated, authoritatively
//! priced [`Order`], or rejects it.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Creation Pipeline                              │
//! │                                                                         │
//! │  CreateOrderRequest { userId, restaurantId,                             │
//! │                       items: [{itemId, quantity}],                      │
//! │                       deliveryFee, estimatedDelivery }                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Field validation (fail-fast, first failure wins)                   │
//! │     userId → restaurantId → items → deliveryFee → estimatedDelivery    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Resolve every itemId against the catalog                           │
//! │     unknown id → ItemNotFound ("... not found")                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. Price from resolved items only                                     │
//! │     subtotal → tax → total (see pricing module)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. Materialize: uuid id, status=pending, created_at=now,              │
//! │     resolved lines copied into the order                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Never Trust the Client
//! The submission carries item **ids and quantities only**. Prices and names
//! are re-resolved here so a tampered client cannot set its own prices, and
//! so a catalog price change between cart-build and checkout is the price
//! actually charged.
//!
//! Quantities are passed through unchecked by this stage: the cart never
//! produces a non-positive quantity, and a hostile client that submits one
//! only lowers its own subtotal. Tightening this is a contract change
//! tracked upstream, not something to slip in silently.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{OrderError, OrderResult};
use crate::pricing;
use crate::types::{MenuItem, Order, OrderItem, OrderStatus};
use crate::validation;

// =============================================================================
// Catalog Capability
// =============================================================================

/// Read-only catalog lookup the pipeline depends on.
///
/// ## Why a Trait?
/// The pipeline never reaches into global seed data. Injecting the lookup
/// keeps it testable against fixed fixtures and lets the data layer evolve
/// (in-memory today, anything tomorrow) without touching this crate.
pub trait MenuItemSource {
    /// Resolves a menu item by exact id match.
    fn find_menu_item(&self, id: &str) -> Option<MenuItem>;
}

// =============================================================================
// Request Types
// =============================================================================

/// One submitted line: an item reference and a quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItemRequest {
    /// Catalog id of the menu item.
    pub item_id: String,

    /// Requested quantity.
    pub quantity: i64,
}

/// The checkout submission.
///
/// All fields default when absent so that a bare `{}` reaches field
/// validation (and fails on `userId` first) instead of dying in
/// deserialization with a shape error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderRequest {
    /// Customer placing the order.
    pub user_id: String,

    /// Restaurant the order targets.
    pub restaurant_id: String,

    /// Submitted lines; ids and quantities only.
    pub items: Vec<OrderItemRequest>,

    /// Delivery fee quoted to the customer at checkout.
    pub delivery_fee: f64,

    /// Client-facing delivery estimate, passed through verbatim.
    pub estimated_delivery: String,
}

// =============================================================================
// Pipeline
// =============================================================================

/// Validates, prices, and materializes an order from a submission.
///
/// ## Validation Order
/// Top-to-bottom, first failure wins - no error accumulation. The sequence
/// is part of the API contract (clients show one message at a time):
/// `userId`, `restaurantId`, `items` non-empty, `deliveryFee`,
/// `estimatedDelivery`, then per-line catalog resolution.
///
/// ## Returns
/// * `Ok(Order)` - priced, `pending`, ready to append to the store
/// * `Err(OrderError)` - the structured failure to surface to the caller;
///   the caller must NOT clear its cart in this case
pub fn build_order(
    req: &CreateOrderRequest,
    catalog: &impl MenuItemSource,
) -> OrderResult<Order> {
    validation::require_text("userId", &req.user_id)?;
    validation::require_text("restaurantId", &req.restaurant_id)?;
    validation::require_items("items", &req.items)?;
    validation::require_delivery_fee("deliveryFee", req.delivery_fee)?;
    validation::require_text("estimatedDelivery", &req.estimated_delivery)?;

    // Resolve every line against the authoritative catalog. Resolution
    // failures outrank pricing: an order with any unknown line is rejected
    // whole, never partially priced.
    let mut items = Vec::with_capacity(req.items.len());
    for line in &req.items {
        let menu_item =
            catalog
                .find_menu_item(&line.item_id)
                .ok_or_else(|| OrderError::ItemNotFound {
                    id: line.item_id.clone(),
                })?;
        items.push(OrderItem {
            menu_item,
            quantity: line.quantity,
        });
    }

    let raw_subtotal: f64 = items.iter().map(OrderItem::line_total).sum();
    let totals = pricing::order_totals(raw_subtotal, req.delivery_fee);

    Ok(Order {
        id: Uuid::new_v4().to_string(),
        user_id: req.user_id.clone(),
        restaurant_id: req.restaurant_id.clone(),
        items,
        status: OrderStatus::Pending,
        subtotal: totals.subtotal,
        delivery_fee: req.delivery_fee,
        tax: totals.tax,
        total: totals.total,
        created_at: Utc::now(),
        estimated_delivery: req.estimated_delivery.clone(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;

    /// Fixed catalog fixture - the pipeline sees only this trait.
    struct FixtureCatalog {
        items: Vec<MenuItem>,
    }

    impl MenuItemSource for FixtureCatalog {
        fn find_menu_item(&self, id: &str) -> Option<MenuItem> {
            self.items.iter().find(|i| i.id == id).cloned()
        }
    }

    fn fixture_item(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            restaurant_id: "r1".to_string(),
            name: format!("Dish {}", id),
            description: "A fixture dish".to_string(),
            price,
            image: "https://example.com/dish.jpg".to_string(),
            category: "Entrees".to_string(),
            is_popular: false,
            is_available: true,
        }
    }

    fn fixture_catalog() -> FixtureCatalog {
        FixtureCatalog {
            items: vec![fixture_item("m-1", 12.99), fixture_item("m-2", 9.99)],
        }
    }

    fn valid_request() -> CreateOrderRequest {
        CreateOrderRequest {
            user_id: "u-1".to_string(),
            restaurant_id: "r1".to_string(),
            items: vec![
                OrderItemRequest {
                    item_id: "m-1".to_string(),
                    quantity: 1,
                },
                OrderItemRequest {
                    item_id: "m-2".to_string(),
                    quantity: 1,
                },
            ],
            delivery_fee: 3.99,
            estimated_delivery: "30-45 min".to_string(),
        }
    }

    #[test]
    fn test_empty_submission_fails_on_user_id_first() {
        // `{}` deserializes to all-defaults and must fail on userId, the
        // first check in the sequence.
        let req: CreateOrderRequest = serde_json::from_str("{}").unwrap();
        let err = build_order(&req, &fixture_catalog()).unwrap_err();
        assert!(matches!(err, OrderError::InvalidField { field: "userId" }));
    }

    #[test]
    fn test_validation_is_fail_fast_in_field_order() {
        let catalog = fixture_catalog();

        let mut req = valid_request();
        req.user_id.clear();
        req.restaurant_id.clear();
        let err = build_order(&req, &catalog).unwrap_err();
        assert!(matches!(err, OrderError::InvalidField { field: "userId" }));

        let mut req = valid_request();
        req.restaurant_id.clear();
        let err = build_order(&req, &catalog).unwrap_err();
        assert!(matches!(
            err,
            OrderError::InvalidField {
                field: "restaurantId"
            }
        ));

        let mut req = valid_request();
        req.items.clear();
        let err = build_order(&req, &catalog).unwrap_err();
        assert!(matches!(err, OrderError::InvalidField { field: "items" }));

        let mut req = valid_request();
        req.delivery_fee = 0.0;
        let err = build_order(&req, &catalog).unwrap_err();
        assert!(matches!(
            err,
            OrderError::InvalidField {
                field: "deliveryFee"
            }
        ));

        let mut req = valid_request();
        req.estimated_delivery.clear();
        let err = build_order(&req, &catalog).unwrap_err();
        assert!(matches!(
            err,
            OrderError::InvalidField {
                field: "estimatedDelivery"
            }
        ));
    }

    #[test]
    fn test_unknown_item_id_is_rejected() {
        let mut req = valid_request();
        req.items[1].item_id = "ghost".to_string();

        let err = build_order(&req, &fixture_catalog()).unwrap_err();

        assert!(matches!(err, OrderError::ItemNotFound { .. }));
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_successful_order_is_pending_and_priced() {
        let order = build_order(&valid_request(), &fixture_catalog()).unwrap();

        assert!(!order.id.is_empty());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.user_id, "u-1");
        assert_eq!(order.restaurant_id, "r1");
        assert_eq!(order.estimated_delivery, "30-45 min");
        assert_eq!(order.items.len(), 2);

        // 12.99 + 9.99 = 22.98; tax 2.04; + fee 3.99 = 29.01.
        assert_eq!(order.subtotal, 22.98);
        assert_eq!(order.tax, 2.04);
        assert_eq!(order.delivery_fee, 3.99);
        assert_eq!(order.total, 29.01);
    }

    #[test]
    fn test_order_ids_are_unique() {
        let catalog = fixture_catalog();
        let a = build_order(&valid_request(), &catalog).unwrap();
        let b = build_order(&valid_request(), &catalog).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_catalog_price_wins_over_client() {
        // The request shape has no price field at all; the fixture price is
        // the only one the pipeline can use.
        let mut req = valid_request();
        req.items.truncate(1);
        req.items[0].quantity = 2;

        let order = build_order(&req, &fixture_catalog()).unwrap();

        assert_eq!(order.items[0].menu_item.price, 12.99);
        assert_eq!(order.subtotal, 25.98);
    }

    #[test]
    fn test_non_positive_quantity_is_not_rejected() {
        // The pricing pass does not range-check quantities; a zero line
        // contributes nothing and a negative line subtracts. The cart never
        // produces these, but direct submissions can.
        let mut req = valid_request();
        req.items[0].quantity = 0; // m-1 contributes 0.00
        req.items[1].quantity = -1; // m-2 contributes -9.99

        let order = build_order(&req, &fixture_catalog()).unwrap();

        assert_eq!(order.subtotal, -9.99);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_cart_projection_prices_like_the_cart() {
        // End-to-end: build a cart, project it, run the pipeline, and the
        // order's subtotal matches the cart's own (rounded) subtotal.
        let catalog = fixture_catalog();
        let mut cart = Cart::new();
        let _ = cart.add_item(&fixture_item("m-1", 12.99));
        let _ = cart.add_item(&fixture_item("m-2", 9.99));
        let _ = cart.add_item(&fixture_item("m-2", 9.99));

        let req = CreateOrderRequest {
            user_id: "u-1".to_string(),
            restaurant_id: "r1".to_string(),
            items: cart.request_items(),
            delivery_fee: 3.99,
            estimated_delivery: "30-45 min".to_string(),
        };

        let order = build_order(&req, &catalog).unwrap();

        assert_eq!(order.subtotal, crate::pricing::round_to_cents(cart.subtotal()));
        assert_eq!(order.items.len(), cart.item_count());
    }
}
