//! # Handlers Module
//!
//! All endpoints exposed by the storefront API.
//!
//! ## Handler Organization
//! ```text
//! handlers/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── health.rs      ◄─── Liveness check
//! ├── restaurants.rs ◄─── Restaurant listings + per-restaurant menu
//! ├── menu.rs        ◄─── Menu browsing and filters
//! ├── users.rs       ◄─── Customer account lookups
//! └── orders.rs      ◄─── Order placement and retrieval
//! ```
//!
//! ## Handler Shape
//! Handlers are plain synchronous functions taking the shared [`AppState`]
//! plus whatever the route extracted, returning either a [`Response`] (when
//! they cannot fail) or `Result<Response, ApiError>`. The HTTP layer never
//! leaks in: no sockets, no raw bytes, which keeps every handler testable
//! by direct call.
//!
//! [`AppState`]: crate::state::AppState
//! [`Response`]: crate::http::Response
//! [`ApiError`]: crate::error::ApiError

pub mod health;
pub mod menu;
pub mod orders;
pub mod restaurants;
pub mod users;
