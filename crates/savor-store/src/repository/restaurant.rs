//! # Restaurant Repository
//!
//! Read-only access to the seeded restaurant listings.

use std::sync::Arc;

use savor_core::Restaurant;

/// Repository for restaurant lookups.
///
/// ## Usage
/// ```rust,ignore
/// let all = catalog.restaurants().list();
/// let one = catalog.restaurants().get_by_id("uuid-here");
/// ```
#[derive(Debug, Clone)]
pub struct RestaurantRepository {
    restaurants: Arc<Vec<Restaurant>>,
}

impl RestaurantRepository {
    /// Creates a repository over a fixed set of restaurants.
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        RestaurantRepository {
            restaurants: Arc::new(restaurants),
        }
    }

    /// Lists all restaurants in seed order.
    pub fn list(&self) -> Vec<Restaurant> {
        self.restaurants.as_ref().clone()
    }

    /// Gets a restaurant by its ID.
    ///
    /// ## Returns
    /// * `Some(Restaurant)` - Restaurant found
    /// * `None` - No restaurant with that id
    pub fn get_by_id(&self, id: &str) -> Option<Restaurant> {
        self.restaurants.iter().find(|r| r.id == id).cloned()
    }

    /// Counts restaurants (for diagnostics).
    pub fn count(&self) -> usize {
        self.restaurants.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_get_by_id() {
        let data = seed::seed();
        let repo = RestaurantRepository::new(data.restaurants.clone());

        let first = &data.restaurants[0];
        let found = repo.get_by_id(&first.id).unwrap();
        assert_eq!(found, *first);

        assert!(repo.get_by_id("missing").is_none());
    }

    #[test]
    fn test_list_preserves_seed_order() {
        let data = seed::seed();
        let repo = RestaurantRepository::new(data.restaurants.clone());
        assert_eq!(repo.list(), data.restaurants);
    }
}
