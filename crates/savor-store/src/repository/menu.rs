//! # Menu Item Repository
//!
//! Read-only access to the seeded menu, with the filter combinations the
//! storefront's browse screens use.
//!
//! ## Filters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Menu Filtering                                       │
//! │                                                                         │
//! │  GET /api/menu?category=Entrees&restaurantId=abc&popular=true          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MenuFilter { category, restaurant_id, popular_only }                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Equality matches, AND-combined; an unset filter matches everything.   │
//! │  No partial results: the full matching set is always returned.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use savor_core::{MenuItem, MenuItemSource};

/// Filter for menu item listings. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuFilter {
    /// Exact category match (e.g., "Entrees").
    pub category: Option<String>,

    /// Restrict to one restaurant's menu.
    pub restaurant_id: Option<String>,

    /// Keep only items flagged popular.
    pub popular_only: bool,
}

/// Repository for menu item lookups.
#[derive(Debug, Clone)]
pub struct MenuItemRepository {
    items: Arc<Vec<MenuItem>>,
}

impl MenuItemRepository {
    /// Creates a repository over a fixed set of menu items.
    pub fn new(items: Vec<MenuItem>) -> Self {
        MenuItemRepository {
            items: Arc::new(items),
        }
    }

    /// Lists menu items matching the filter, in seed order.
    pub fn list(&self, filter: &MenuFilter) -> Vec<MenuItem> {
        self.items
            .iter()
            .filter(|i| {
                filter
                    .category
                    .as_ref()
                    .map_or(true, |c| &i.category == c)
            })
            .filter(|i| {
                filter
                    .restaurant_id
                    .as_ref()
                    .map_or(true, |r| &i.restaurant_id == r)
            })
            .filter(|i| !filter.popular_only || i.is_popular)
            .cloned()
            .collect()
    }

    /// Gets a menu item by its ID.
    pub fn get_by_id(&self, id: &str) -> Option<MenuItem> {
        self.items.iter().find(|i| i.id == id).cloned()
    }

    /// Lists one restaurant's full menu.
    pub fn list_for_restaurant(&self, restaurant_id: &str) -> Vec<MenuItem> {
        self.items
            .iter()
            .filter(|i| i.restaurant_id == restaurant_id)
            .cloned()
            .collect()
    }

    /// Counts menu items (for diagnostics).
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// The order pipeline's catalog capability, backed by this repository.
impl MenuItemSource for MenuItemRepository {
    fn find_menu_item(&self, id: &str) -> Option<MenuItem> {
        self.get_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn repo() -> MenuItemRepository {
        MenuItemRepository::new(seed::seed().menu_items)
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let repo = repo();
        assert_eq!(repo.list(&MenuFilter::default()).len(), repo.count());
    }

    #[test]
    fn test_filter_by_category() {
        let repo = repo();
        let entrees = repo.list(&MenuFilter {
            category: Some("Entrees".to_string()),
            ..MenuFilter::default()
        });

        assert!(!entrees.is_empty());
        assert!(entrees.iter().all(|i| i.category == "Entrees"));
    }

    #[test]
    fn test_filter_by_restaurant() {
        let repo = repo();
        let restaurant_id = repo.list(&MenuFilter::default())[0].restaurant_id.clone();

        let items = repo.list(&MenuFilter {
            restaurant_id: Some(restaurant_id.clone()),
            ..MenuFilter::default()
        });

        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i.restaurant_id == restaurant_id));
        assert_eq!(items, repo.list_for_restaurant(&restaurant_id));
    }

    #[test]
    fn test_filter_popular_only() {
        let repo = repo();
        let popular = repo.list(&MenuFilter {
            popular_only: true,
            ..MenuFilter::default()
        });

        assert!(!popular.is_empty());
        assert!(popular.iter().all(|i| i.is_popular));
        assert!(popular.len() < repo.count());
    }

    #[test]
    fn test_filters_compose() {
        let repo = repo();
        let all = repo.list(&MenuFilter::default());
        // Find a restaurant that has a popular entree so the combined filter
        // is non-trivially exercised.
        let sample = all
            .iter()
            .find(|i| i.category == "Entrees" && i.is_popular)
            .expect("seed contains at least one popular entree");

        let combined = repo.list(&MenuFilter {
            category: Some("Entrees".to_string()),
            restaurant_id: Some(sample.restaurant_id.clone()),
            popular_only: true,
        });

        assert!(combined.contains(sample));
        assert!(combined.iter().all(|i| {
            i.category == "Entrees" && i.restaurant_id == sample.restaurant_id && i.is_popular
        }));
    }

    #[test]
    fn test_find_menu_item_source() {
        let repo = repo();
        let first = repo.list(&MenuFilter::default())[0].clone();

        let resolved = MenuItemSource::find_menu_item(&repo, &first.id).unwrap();
        assert_eq!(resolved, first);
        assert!(MenuItemSource::find_menu_item(&repo, "missing").is_none());
    }
}
