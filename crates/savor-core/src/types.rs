//! # Domain Types
//!
//! Core domain types used throughout Savor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Restaurant    │   │    MenuItem     │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  cuisine        │   │  restaurant_id  │   │  name           │       │
//! │  │  delivery_fee   │   │  price          │   │  email          │       │
//! │  │  is_open        │   │  is_available   │   │  address        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │   OrderItem     │   │   OrderStatus   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  menu_item      │   │  Pending        │       │
//! │  │  items          │   │  quantity       │   │  Confirmed      │       │
//! │  │  subtotal/tax   │   │  (line total)   │   │  ...            │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! An [`Order`] owns **copies** of the menu items it was priced against.
//! Catalog edits after checkout never retroactively change a placed order.
//!
//! ## Wire Format
//! Every type here crosses the HTTP boundary as JSON, so all of them use
//! `camelCase` field names and [`OrderStatus`] uses kebab-case variants
//! (`"out-for-delivery"`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Restaurant
// =============================================================================

/// A restaurant listed on the storefront.
///
/// Owned by the catalog; read-only from this crate's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in listings.
    pub name: String,

    /// Short marketing blurb.
    pub description: String,

    /// Hero image URL.
    pub image: String,

    /// Cuisine tags (e.g., "Italian", "Thai"). One to three entries.
    pub cuisine: Vec<String>,

    /// Average rating, 3.0 - 5.0, one decimal.
    pub rating: f64,

    /// Number of reviews behind the rating.
    pub review_count: u32,

    /// Human-readable delivery window (e.g., "20-45 min").
    pub delivery_time: String,

    /// Flat delivery fee in dollars for orders from this restaurant.
    pub delivery_fee: f64,

    /// Minimum order subtotal in dollars.
    pub minimum_order: f64,

    /// Street address.
    pub address: String,

    /// Whether the restaurant currently accepts orders.
    pub is_open: bool,
}

// =============================================================================
// Menu Item
// =============================================================================

/// A menu item belonging to exactly one restaurant.
///
/// Authoritative, owned by the catalog; immutable once read. The price here
/// is the only price the order pipeline will ever use - client-supplied
/// prices are ignored by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Restaurant this item belongs to.
    pub restaurant_id: String,

    /// Display name shown on the menu and in the cart.
    pub name: String,

    /// Dish description.
    pub description: String,

    /// Price in dollars.
    pub price: f64,

    /// Dish image URL.
    pub image: String,

    /// Menu section: Appetizers, Entrees, Sides, Drinks, Desserts.
    pub category: String,

    /// Highlighted in the "popular" rail.
    pub is_popular: bool,

    /// Whether the item can currently be ordered.
    pub is_available: bool,
}

// =============================================================================
// User
// =============================================================================

/// A storefront customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub avatar: String,
}

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle status of an order.
///
/// The order pipeline only ever produces [`OrderStatus::Pending`]; later
/// transitions belong to fulfillment, which this core does not model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Order submitted, awaiting restaurant confirmation.
    Pending,
    /// Restaurant accepted the order.
    Confirmed,
    /// Kitchen is working on it.
    Preparing,
    /// Courier is en route.
    OutForDelivery,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// One line of a cart or order: a menu item and how many of it.
///
/// ## Invariant
/// `quantity >= 1`. A quantity of zero is not a representable state - it is
/// defined as absence of the line, and the cart enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Snapshot of the menu item this line was priced against.
    pub menu_item: MenuItem,

    /// Quantity ordered.
    pub quantity: i64,
}

impl OrderItem {
    /// Calculates the line total (unit price × quantity), unrounded.
    pub fn line_total(&self) -> f64 {
        self.menu_item.price * self.quantity as f64
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
///
/// Created exactly once by the order pipeline from a validated submission;
/// immutable thereafter. Nothing in this core mutates an existing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Customer who placed the order.
    pub user_id: String,

    /// Restaurant the order was placed with.
    pub restaurant_id: String,

    /// Priced line items, copied from the catalog at submission time.
    pub items: Vec<OrderItem>,

    /// Lifecycle status; always `pending` at creation.
    pub status: OrderStatus,

    /// Sum of line totals, rounded to cents.
    pub subtotal: f64,

    /// Delivery fee as supplied by the client at checkout.
    pub delivery_fee: f64,

    /// Sales tax on the subtotal, rounded to cents.
    pub tax: f64,

    /// Grand total (subtotal + delivery fee + tax), rounded to cents.
    pub total: f64,

    /// When the order was submitted.
    pub created_at: DateTime<Utc>,

    /// Client-facing delivery estimate, passed through from the submission.
    pub estimated_delivery: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(price: f64) -> MenuItem {
        MenuItem {
            id: "item-1".to_string(),
            restaurant_id: "rest-1".to_string(),
            name: "Margherita Pizza".to_string(),
            description: "Tomato, mozzarella, basil".to_string(),
            price,
            image: "https://example.com/pizza.jpg".to_string(),
            category: "Entrees".to_string(),
            is_popular: true,
            is_available: true,
        }
    }

    #[test]
    fn test_line_total() {
        let line = OrderItem {
            menu_item: test_item(12.99),
            quantity: 3,
        };
        assert!((line.line_total() - 38.97).abs() < 1e-9);
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_order_status_wire_format() {
        // The client renders these strings directly; they are kebab-case.
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"out-for-delivery\"");

        let back: OrderStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(back, OrderStatus::Pending);
    }

    #[test]
    fn test_menu_item_camel_case_wire_format() {
        let item = test_item(9.5);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"restaurantId\""));
        assert!(json.contains("\"isPopular\""));
        assert!(json.contains("\"isAvailable\""));
    }
}
