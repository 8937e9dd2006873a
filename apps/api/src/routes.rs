//! # Route Table
//!
//! Maps request paths to handlers.
//!
//! ## API Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Savor API Routes                                     │
//! │                                                                         │
//! │  GET  /api/health                    liveness + timestamp              │
//! │  GET  /api/restaurants               all restaurants                   │
//! │  GET  /api/restaurants/{id}          one restaurant                    │
//! │  GET  /api/restaurants/{id}/menu     one restaurant's menu             │
//! │  GET  /api/menu                      ?category=&restaurantId=&popular= │
//! │  GET  /api/menu/{id}                 one menu item                     │
//! │  GET  /api/users                     all users                         │
//! │  GET  /api/users/{id}                one user                          │
//! │  POST /api/orders                    place an order (201 or 400)       │
//! │  GET  /api/orders/{id}               one order (200 or 404)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use matchit::Router;
use tracing::debug;

use crate::error::ApiError;
use crate::handlers;
use crate::http::{Request, Response};
use crate::state::AppState;

/// One routable endpoint. The path registered for each variant is in
/// [`table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    Restaurants,
    RestaurantById,
    RestaurantMenu,
    MenuItems,
    MenuItemById,
    Users,
    UserById,
    Orders,
    OrderById,
}

/// The compiled route table.
pub type RouteTable = Router<Route>;

/// Builds the route table.
///
/// Insertion errors are programming errors (conflicting patterns), so they
/// surface at startup, not per request.
pub fn table() -> RouteTable {
    let mut router = Router::new();
    router
        .insert("/api/health", Route::Health)
        .expect("route table: /api/health");
    router
        .insert("/api/restaurants", Route::Restaurants)
        .expect("route table: /api/restaurants");
    router
        .insert("/api/restaurants/{id}", Route::RestaurantById)
        .expect("route table: /api/restaurants/{id}");
    router
        .insert("/api/restaurants/{id}/menu", Route::RestaurantMenu)
        .expect("route table: /api/restaurants/{id}/menu");
    router
        .insert("/api/menu", Route::MenuItems)
        .expect("route table: /api/menu");
    router
        .insert("/api/menu/{id}", Route::MenuItemById)
        .expect("route table: /api/menu/{id}");
    router
        .insert("/api/users", Route::Users)
        .expect("route table: /api/users");
    router
        .insert("/api/users/{id}", Route::UserById)
        .expect("route table: /api/users/{id}");
    router
        .insert("/api/orders", Route::Orders)
        .expect("route table: /api/orders");
    router
        .insert("/api/orders/{id}", Route::OrderById)
        .expect("route table: /api/orders/{id}");
    router
}

/// Splits a request path into path and parsed query parameters.
///
/// Values are taken verbatim (no percent-decoding): every value the
/// storefront sends - UUIDs, category names, "true" - is a single URL-safe
/// token.
fn split_query(path: &str) -> (&str, HashMap<String, String>) {
    let (path, query) = match path.split_once('?') {
        Some((p, q)) => (p, q),
        None => return (path, HashMap::new()),
    };

    let params = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect();

    (path, params)
}

/// Dispatches a parsed request to its handler.
pub fn dispatch(
    state: &AppState,
    table: &RouteTable,
    request: &Request,
) -> Result<Response, ApiError> {
    let (path, query) = split_query(&request.path);

    let matched = table
        .at(path)
        .map_err(|_| ApiError::not_found("Route not found"))?;

    let id = matched.params.get("id").unwrap_or_default();

    match (request.method.as_str(), *matched.value) {
        ("GET", Route::Health) => Ok(handlers::health::health()),
        ("GET", Route::Restaurants) => Ok(handlers::restaurants::list_restaurants(state)),
        ("GET", Route::RestaurantById) => handlers::restaurants::get_restaurant(state, id),
        ("GET", Route::RestaurantMenu) => handlers::restaurants::restaurant_menu(state, id),
        ("GET", Route::MenuItems) => Ok(handlers::menu::list_menu_items(state, &query)),
        ("GET", Route::MenuItemById) => handlers::menu::get_menu_item(state, id),
        ("GET", Route::Users) => Ok(handlers::users::list_users(state)),
        ("GET", Route::UserById) => handlers::users::get_user(state, id),
        ("POST", Route::Orders) => handlers::orders::create_order(state, &request.body),
        ("GET", Route::OrderById) => handlers::orders::get_order(state, id),
        (method, route) => {
            debug!(%method, ?route, "No handler for method/route pair");
            Err(ApiError::not_found("Route not found"))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
