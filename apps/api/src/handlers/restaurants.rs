//! # Restaurant Handlers
//!
//! Listings for the storefront's browse screens.

use tracing::debug;

use crate::error::ApiError;
use crate::http::Response;
use crate::state::AppState;

/// Lists all restaurants.
pub fn list_restaurants(state: &AppState) -> Response {
    debug!("list_restaurants request");
    Response::json(200, &state.catalog.restaurants().list())
}

/// Gets one restaurant by id.
pub fn get_restaurant(state: &AppState, id: &str) -> Result<Response, ApiError> {
    debug!(id = %id, "get_restaurant request");

    let restaurant = state
        .catalog
        .restaurants()
        .get_by_id(id)
        .ok_or_else(|| ApiError::not_found("Restaurant not found"))?;

    Ok(Response::json(200, &restaurant))
}

/// Lists one restaurant's menu.
///
/// An empty menu reads as "nothing to show here" and returns 404 - an
/// unknown restaurant id and a known one with zero items are
/// indistinguishable to the client, which is the long-standing contract.
pub fn restaurant_menu(state: &AppState, id: &str) -> Result<Response, ApiError> {
    debug!(id = %id, "restaurant_menu request");

    let items = state.catalog.menu_items().list_for_restaurant(id);
    if items.is_empty() {
        return Err(ApiError::not_found("Menu items not found"));
    }

    Ok(Response::json(200, &items))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use savor_core::Restaurant;
    use savor_store::Catalog;

    fn fixture_state() -> AppState {
        let data = savor_store::seed::seed();
        AppState::new(Catalog::with_data(
            data.restaurants,
            data.menu_items,
            data.users,
        ))
    }

    #[test]
    fn test_list_restaurants() {
        let state = fixture_state();
        let response = list_restaurants(&state);

        assert_eq!(response.status, 200);
        let body: Vec<Restaurant> = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body.len(), 20);
    }

    #[test]
    fn test_get_restaurant_roundtrip() {
        let state = fixture_state();
        let first = state.catalog.restaurants().list()[0].clone();

        let response = get_restaurant(&state, &first.id).unwrap();
        assert_eq!(response.status, 200);

        let body: Restaurant = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, first);
    }

    #[test]
    fn test_get_restaurant_unknown_is_404() {
        let state = fixture_state();
        let err = get_restaurant(&state, "missing").unwrap_err();
        assert_eq!(err.code.status(), 404);
    }

    #[test]
    fn test_restaurant_menu() {
        let state = fixture_state();
        let first = state.catalog.restaurants().list()[0].clone();

        let response = restaurant_menu(&state, &first.id).unwrap();
        assert_eq!(response.status, 200);
    }

    #[test]
    fn test_restaurant_menu_unknown_is_404() {
        let state = fixture_state();
        let err = restaurant_menu(&state, "missing").unwrap_err();
        assert_eq!(err.code.status(), 404);
        assert_eq!(err.message, "Menu items not found");
    }
}
