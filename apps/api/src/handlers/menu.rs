//! # Menu Handlers
//!
//! Menu browsing with the storefront's filter combinations.

use std::collections::HashMap;

use tracing::debug;

use savor_store::MenuFilter;

use crate::error::ApiError;
use crate::http::Response;
use crate::state::AppState;

/// Builds a [`MenuFilter`] from query parameters.
///
/// - `category=Entrees` - exact category match
/// - `restaurantId=<uuid>` - one restaurant's items
/// - `popular=true` - popular items only (any other value is ignored)
fn filter_from_query(query: &HashMap<String, String>) -> MenuFilter {
    MenuFilter {
        category: query.get("category").cloned(),
        restaurant_id: query.get("restaurantId").cloned(),
        popular_only: query.get("popular").map(String::as_str) == Some("true"),
    }
}

/// Lists menu items, optionally filtered.
pub fn list_menu_items(state: &AppState, query: &HashMap<String, String>) -> Response {
    let filter = filter_from_query(query);
    debug!(?filter, "list_menu_items request");

    Response::json(200, &state.catalog.menu_items().list(&filter))
}

/// Gets one menu item by id.
pub fn get_menu_item(state: &AppState, id: &str) -> Result<Response, ApiError> {
    debug!(id = %id, "get_menu_item request");

    let item = state
        .catalog
        .menu_items()
        .get_by_id(id)
        .ok_or_else(|| ApiError::not_found("Menu item not found"))?;

    Ok(Response::json(200, &item))
}

// =============================================================================
// Unit Tests
// =============================================================================
