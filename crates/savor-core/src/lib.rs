//! # savor-core: Pure Business Logic for Savor
//!
//! This crate is the **heart** of the Savor storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Savor Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront Client                            │   │
//! │  │    Browse UI ──► Cart UI ──► Checkout UI ──► Confirmation UI   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP (JSON)                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    savor-api Handlers                           │   │
//! │  │    list_menu_items, create_order, get_order, etc.              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ savor-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │  pricing  │  │   order   │  │   │
//! │  │   │ MenuItem  │  │   Cart    │  │  rounding │  │  pipeline │  │   │
//! │  │   │   Order   │  │ AddOutcome│  │  tax calc │  │ validation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    savor-store (Data Layer)                     │   │
//! │  │           Seeded catalog repositories, order store              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Restaurant, MenuItem, Order, etc.)
//! - [`cart`] - Cart state container with the single-restaurant rule
//! - [`pricing`] - Checkout totals and cent rounding
//! - [`order`] - Order creation pipeline (validate, price, materialize)
//! - [`error`] - Domain error types
//! - [`validation`] - Request field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic apart from order
//!    ids and timestamps, which are assigned at materialization time
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Authoritative Prices**: Clients submit item ids and quantities only;
//!    prices and names are always re-resolved from the catalog
//! 4. **Explicit Errors**: Business failures are typed, never strings or
//!    panics; panics are reserved for programming errors

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod order;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use savor_core::Cart` instead of
// `use savor_core::cart::Cart`

pub use cart::{AddOutcome, Cart, CartState};
pub use error::{OrderError, OrderResult};
pub use order::{build_order, CreateOrderRequest, MenuItemSource, OrderItemRequest};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax rate applied to every order's subtotal.
///
/// ## Why a constant?
/// The storefront operates in a single jurisdiction (8.875% combined rate).
/// Multi-jurisdiction tax is out of scope; if it ever lands, this becomes a
/// per-restaurant lookup and [`pricing::order_totals`] grows a parameter.
pub const TAX_RATE: f64 = 0.08875;
