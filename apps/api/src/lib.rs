//! # Savor API Library
//!
//! The HTTP surface of the Savor storefront.
//!
//! ## Module Organization
//! ```text
//! savor_api/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── state.rs        ◄─── Shared catalog + order store handles
//! ├── http.rs         ◄─── HTTP/1.1 parse/serve loop (tokio + httparse)
//! ├── routes.rs       ◄─── Route table + dispatch (matchit)
//! ├── handlers/
//! │   ├── mod.rs      ◄─── Handler exports
//! │   ├── health.rs   ◄─── Liveness check
//! │   ├── restaurants.rs ◄ Restaurant listings
//! │   ├── menu.rs     ◄─── Menu browsing + filters
//! │   ├── users.rs    ◄─── Customer accounts
//! │   └── orders.rs   ◄─── Order placement/retrieval
//! └── error.rs        ◄─── API error type + status mapping
//! ```
//!
//! ## Separation of Concerns
//! Handlers never touch sockets and the HTTP layer never touches business
//! rules: `http` turns bytes into a [`http::Request`], `routes` picks a
//! handler, the handler talks to `savor-core`/`savor-store` and returns a
//! [`http::Response`]. Everything below the socket is directly callable
//! from tests.

pub mod error;
pub mod handlers;
pub mod http;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use state::AppState;
