//! # Order Handlers
//!
//! Order placement and retrieval.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Placement                                      │
//! │                                                                         │
//! │  Client cart ──► POST /api/orders                                       │
//! │                  { userId, restaurantId,                                │
//! │                    items: [{itemId, quantity}],                         │
//! │                    deliveryFee, estimatedDelivery }                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build_order() - validate, resolve against catalog, price              │
//! │       │                                                                 │
//! │       ├── Err ──► 400 {"error": "..."}  (cart stays as-is client-side) │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderStore.insert() ──► 201 + full Order                               │
//! │                           (client clears its cart on this response)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use savor_core::{build_order, CreateOrderRequest, OrderError};

use crate::error::ApiError;
use crate::http::Response;
use crate::state::AppState;

/// Places an order.
///
/// ## Returns
/// * `201` with the full priced order on success
/// * `400` with `{"error": ...}` when the body is malformed, a field fails
///   validation, or an item id does not resolve
pub fn create_order(state: &AppState, body: &str) -> Result<Response, ApiError> {
    debug!("create_order request");

    let request: CreateOrderRequest = serde_json::from_str(body)
        .map_err(|err| ApiError::bad_request(format!("Malformed order submission: {}", err)))?;

    let order = build_order(&request, &state.catalog)?;
    state.orders.insert(order.clone());

    info!(
        order_id = %order.id,
        restaurant_id = %order.restaurant_id,
        items = order.items.len(),
        total = order.total,
        "Order created"
    );

    Ok(Response::json(201, &order))
}

/// Gets one order by id.
pub fn get_order(state: &AppState, id: &str) -> Result<Response, ApiError> {
    debug!(id = %id, "get_order request");

    let order = state.orders.get(id).ok_or(OrderError::OrderNotFound {
        id: id.to_string(),
    })?;

    Ok(Response::json(200, &order))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use savor_core::{MenuItem, Order, OrderStatus};
    use savor_store::Catalog;
    use serde_json::{json, Value};

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

    fn fixture_state() -> AppState {
        AppState::new(Catalog::with_data(
            vec![],
            vec![fixture_item("m-1", 12.99), fixture_item("m-2", 9.99)],
            vec![],
        ))
    }

    fn valid_body() -> String {
        json!({
            "userId": "u-1",
            "restaurantId": "r1",
            "items": [
                { "itemId": "m-1", "quantity": 1 },
                { "itemId": "m-2", "quantity": 1 }
            ],
            "deliveryFee": 3.99,
            "estimatedDelivery": "30-45 min"
        })
        .to_string()
    }

    #[test]
    fn test_create_order_returns_201_with_id() {
        let state = fixture_state();
        let response = create_order(&state, &valid_body()).unwrap();

        assert_eq!(response.status, 201);

        let order: Order = serde_json::from_str(&response.body).unwrap();
        assert!(!order.id.is_empty());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.subtotal, 22.98);
        assert_eq!(order.tax, 2.04);
        assert_eq!(order.total, 29.01);
    }

    #[test]
    fn test_create_order_empty_object_is_400_on_user_id() {
        let state = fixture_state();
        let err = create_order(&state, "{}").unwrap_err();

        assert_eq!(err.code.status(), 400);
        assert_eq!(err.message, "userId is invalid");
        // Nothing was stored.
        assert_eq!(state.orders.count(), 0);
    }

    #[test]
    fn test_create_order_unknown_item_is_400_not_found() {
        let state = fixture_state();
        let body = valid_body().replace("m-2", "ghost");

        let err = create_order(&state, &body).unwrap_err();

        assert_eq!(err.code.status(), 400);
        assert!(err.message.contains("not found"));
        assert_eq!(state.orders.count(), 0);
    }

    #[test]
    fn test_create_order_empty_items_is_400() {
        let state = fixture_state();
        let body = json!({
            "userId": "u-1",
            "restaurantId": "r1",
            "items": [],
            "deliveryFee": 3.99,
            "estimatedDelivery": "30-45 min"
        })
        .to_string();

        let err = create_order(&state, &body).unwrap_err();
        assert_eq!(err.code.status(), 400);
    }

    #[test]
    fn test_create_order_malformed_json_is_400() {
        let state = fixture_state();
        let err = create_order(&state, "not json").unwrap_err();
        assert_eq!(err.code.status(), 400);
    }

    #[test]
    fn test_create_then_get_roundtrip() {
        let state = fixture_state();
        let created = create_order(&state, &valid_body()).unwrap();
        let created: Order = serde_json::from_str(&created.body).unwrap();

        let response = get_order(&state, &created.id).unwrap();
        assert_eq!(response.status, 200);

        let fetched: Order = serde_json::from_str(&response.body).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_order_unknown_is_404() {
        let state = fixture_state();
        let err = get_order(&state, "does-not-exist").unwrap_err();

        assert_eq!(err.code.status(), 404);
        assert!(err.message.contains("not found"));
    }

    #[test]
    fn test_order_wire_shape() {
        // The client reads these exact keys; pin the wire contract.
        let state = fixture_state();
        let response = create_order(&state, &valid_body()).unwrap();
        let body: Value = serde_json::from_str(&response.body).unwrap();

        for key in [
            "id",
            "userId",
            "restaurantId",
            "items",
            "status",
            "subtotal",
            "deliveryFee",
            "tax",
            "total",
            "createdAt",
            "estimatedDelivery",
        ] {
            assert!(body.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(body["status"], "pending");
        assert_eq!(body["items"][0]["menuItem"]["price"], 12.99);
    }
}
