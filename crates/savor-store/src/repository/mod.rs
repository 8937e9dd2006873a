//! # Repository Module
//!
//! Data access objects for the Savor storefront.
//!
//! ## Repository Organization
//! ```text
//! repository/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── restaurant.rs  ◄─── Restaurant listings and lookups
//! ├── menu.rs        ◄─── Menu item filters and lookups
//! ├── user.rs        ◄─── Customer account lookups
//! └── order.rs       ◄─── Append-only order store
//! ```
//!
//! The catalog repositories (restaurant, menu, user) are read-only views
//! over seeded data; the order store is the single writable surface, and it
//! only ever appends.

pub mod menu;
pub mod order;
pub mod restaurant;
pub mod user;
