//! # Cart State
//!
//! The in-progress, unsubmitted selection of menu items for one restaurant.
//!
//! ## Single-Restaurant Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  User Action              Operation              Cart Change            │
//! │  ───────────              ─────────              ───────────            │
//! │                                                                         │
//! │  Tap item (same rest.) ──► add_item() ─────────► qty+1 or new line     │
//! │                                                                         │
//! │  Tap item (other rest.) ─► add_item() ─────────► Conflict, NO change   │
//! │                               │                                         │
//! │                               ▼ user confirms "start over"             │
//! │                            replace_cart() ─────► fresh cart, 1 line    │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ──► set qty / drop line   │
//! │                                                                         │
//! │  Tap remove ─────────────► remove_item() ──────► drop line             │
//! │                                                                         │
//! │  Tap clear / checkout ok ─► clear() ────────────► empty cart           │
//! │                                                                         │
//! │  INVARIANT (holds after every operation):                               │
//! │    restaurant_id is None  ⇔  items is empty                            │
//! │    every line's menu_item.restaurant_id == restaurant_id               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A conflicting add is an expected branch, not an exception: the caller has
//! to decide between keeping the cart and starting over, so `add_item`
//! returns a value it must inspect instead of failing.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::order::OrderItemRequest;
use crate::types::{MenuItem, OrderItem};

// =============================================================================
// Add Outcome
// =============================================================================

/// The result of [`Cart::add_item`].
///
/// Modeled as a plain discriminated result rather than an error because a
/// cross-restaurant add is a recoverable branch the caller handles on every
/// invocation (typically by prompting, then calling [`Cart::replace_cart`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[must_use = "a Conflict leaves the cart unchanged and must be surfaced to the user"]
pub enum AddOutcome {
    /// The item was added (new line, or an existing line's quantity grew).
    Added,
    /// The item belongs to a different restaurant than the current cart.
    /// Nothing was mutated.
    Conflict,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `menu_item.id` (adding the same item increments its
///   quantity) and keep insertion order
/// - Every line has `quantity >= 1` (dropping to 0 removes the line)
/// - `restaurant_id` is `Some` exactly while at least one line exists, and
///   every line belongs to that restaurant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Restaurant all current lines belong to; `None` iff the cart is empty.
    pub restaurant_id: Option<String>,

    /// Lines in insertion order, unique by menu item id.
    pub items: Vec<OrderItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of a menu item to the cart.
    ///
    /// ## Behavior
    /// - Cart holds a different restaurant: returns [`AddOutcome::Conflict`]
    ///   and performs **no mutation** - switching restaurants must be an
    ///   explicit [`Cart::replace_cart`], never a silent swap
    /// - Item already in cart: increments its quantity by 1
    /// - Otherwise: appends a new line with quantity 1
    pub fn add_item(&mut self, menu_item: &MenuItem) -> AddOutcome {
        if let Some(restaurant_id) = &self.restaurant_id {
            if *restaurant_id != menu_item.restaurant_id {
                return AddOutcome::Conflict;
            }
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|l| l.menu_item.id == menu_item.id)
        {
            line.quantity += 1;
            return AddOutcome::Added;
        }

        self.restaurant_id = Some(menu_item.restaurant_id.clone());
        self.items.push(OrderItem {
            menu_item: menu_item.clone(),
            quantity: 1,
        });
        AddOutcome::Added
    }

    /// Discards the current cart and starts a new one with a single line.
    ///
    /// This is the deliberate path out of [`AddOutcome::Conflict`]: the user
    /// confirmed they want to order from the other restaurant instead.
    pub fn replace_cart(&mut self, menu_item: &MenuItem) {
        self.items.clear();
        self.restaurant_id = Some(menu_item.restaurant_id.clone());
        self.items.push(OrderItem {
            menu_item: menu_item.clone(),
            quantity: 1,
        });
    }

    /// Removes the line with the given menu item id.
    ///
    /// No-op when the id is not in the cart. Clears `restaurant_id` when the
    /// last line goes, restoring the empty-cart invariant.
    pub fn remove_item(&mut self, menu_item_id: &str) {
        self.items.retain(|l| l.menu_item.id != menu_item_id);
        if self.items.is_empty() {
            self.restaurant_id = None;
        }
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: identical to [`Cart::remove_item`] - zero is not a
    ///   representable line state
    /// - Line present: sets the quantity as given (no upper bound here)
    /// - Line absent: no-op
    pub fn update_quantity(&mut self, menu_item_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(menu_item_id);
            return;
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|l| l.menu_item.id == menu_item_id)
        {
            line.quantity = quantity;
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.restaurant_id = None;
    }

    /// Returns the number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines (the cart badge number).
    ///
    /// Recomputed on every read; never cached.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal (Σ price × quantity), unrounded.
    ///
    /// Recomputed on every read; never cached. Display rounding happens at
    /// the edge, checkout rounding in [`crate::pricing`].
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|l| l.line_total()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Projects the cart to the checkout submission shape.
    ///
    /// Only `{item_id, quantity}` pairs leave the client: prices and names
    /// are re-resolved server-side against the authoritative catalog, so a
    /// tampered or stale cart can never set its own prices.
    pub fn request_items(&self) -> Vec<OrderItemRequest> {
        self.items
            .iter()
            .map(|l| OrderItemRequest {
                item_id: l.menu_item.id.clone(),
                quantity: l.quantity,
            })
            .collect()
    }
}

// =============================================================================
// Cart State (session wrapper)
// =============================================================================

/// Session-held cart state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>` because:
/// - `Arc`: Allows shared ownership across host threads
/// - `Mutex`: Ensures only one mutation at a time; user events are processed
///   to completion before the next is accepted
///
/// ## Failure Mode
/// A poisoned lock means a previous holder panicked mid-mutation. That is a
/// programming error in the host, not a business-rule failure, so access
/// panics loudly instead of returning a typed result.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let badge = cart_state.with_cart(|cart| cart.total_items());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let outcome = cart_state.with_cart_mut(|cart| cart.add_item(&item));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
