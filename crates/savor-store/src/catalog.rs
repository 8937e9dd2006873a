//! # Catalog
//!
//! Read-only facade bundling the catalog repositories.
//!
//! ## Why a Facade?
//! Handlers ask one value for whatever catalog data they need, and tests
//! build a catalog from fixture rows instead of the full seed. Mirrors the
//! shape of a database handle with per-entity repositories, without the
//! database.

use savor_core::{MenuItem, MenuItemSource, Restaurant, User};

use crate::repository::menu::MenuItemRepository;
use crate::repository::restaurant::RestaurantRepository;
use crate::repository::user::UserRepository;
use crate::seed;

/// The read-only catalog: restaurants, menu items, and users.
///
/// ## Usage
/// ```rust
/// use savor_store::Catalog;
///
/// let catalog = Catalog::seeded();
/// assert_eq!(catalog.restaurants().count(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    restaurants: RestaurantRepository,
    menu_items: MenuItemRepository,
    users: UserRepository,
}

impl Catalog {
    /// Builds the catalog from the deterministic demo seed.
    pub fn seeded() -> Self {
        let data = seed::seed();
        Catalog::with_data(data.restaurants, data.menu_items, data.users)
    }

    /// Builds a catalog from explicit rows (test fixtures, future loaders).
    pub fn with_data(
        restaurants: Vec<Restaurant>,
        menu_items: Vec<MenuItem>,
        users: Vec<User>,
    ) -> Self {
        Catalog {
            restaurants: RestaurantRepository::new(restaurants),
            menu_items: MenuItemRepository::new(menu_items),
            users: UserRepository::new(users),
        }
    }

    /// Restaurant lookups.
    pub fn restaurants(&self) -> &RestaurantRepository {
        &self.restaurants
    }

    /// Menu item lookups and filters.
    pub fn menu_items(&self) -> &MenuItemRepository {
        &self.menu_items
    }

    /// Customer account lookups.
    pub fn users(&self) -> &UserRepository {
        &self.users
    }
}

/// The order pipeline resolves items straight through the catalog.
impl MenuItemSource for Catalog {
    fn find_menu_item(&self, id: &str) -> Option<MenuItem> {
        self.menu_items.get_by_id(id)
    }
}
