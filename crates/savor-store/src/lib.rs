//! # savor-store: In-Memory Data Layer for Savor
//!
//! This crate provides data access for the Savor storefront: a seeded,
//! read-only catalog and a process-lifetime order store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Savor Data Flow                                  │
//! │                                                                         │
//! │  API Handler (list_menu_items, create_order)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    savor-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Catalog    │    │  Repositories │    │     Seed     │  │   │
//! │  │   │ (catalog.rs)  │    │(restaurant.rs)│    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ read-only     │◄───│ MenuItemRepo  │◄───│ 20 rest.     │  │   │
//! │  │   │ facade        │    │ UserRepo      │    │ ~230 items   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐                                             │   │
//! │  │   │  OrderStore   │  append-only, process lifetime              │   │
//! │  │   └───────────────┘                                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Read-only facade bundling the catalog repositories
//! - [`seed`] - Deterministic demo data generation
//! - [`repository`] - Repository implementations (restaurant, menu, user, order)
//!
//! ## Usage
//!
//! ```rust
//! use savor_store::{Catalog, MenuFilter, OrderStore};
//!
//! let catalog = Catalog::seeded();
//! let entrees = catalog.menu_items().list(&MenuFilter {
//!     category: Some("Entrees".to_string()),
//!     ..MenuFilter::default()
//! });
//! assert!(!entrees.is_empty());
//!
//! let orders = OrderStore::new();
//! assert!(orders.get("nope").is_none());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use seed::SeedData;

// Repository re-exports for convenience
pub use repository::menu::{MenuFilter, MenuItemRepository};
pub use repository::order::OrderStore;
pub use repository::restaurant::RestaurantRepository;
pub use repository::user::UserRepository;
