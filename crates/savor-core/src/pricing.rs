//! # Pricing Module
//!
//! Checkout math: subtotal, tax, and grand total, with all cent rounding in
//! one place.
//!
//! ## Rounding Order Matters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HOW TOTALS ARE COMPOSED                                                │
//! │                                                                         │
//! │  raw_subtotal = Σ price × quantity          (unrounded)                │
//! │  raw_tax      = raw_subtotal × TAX_RATE     (unrounded)                │
//! │                                                                         │
//! │  subtotal = round(raw_subtotal)                                         │
//! │  tax      = round(raw_tax)                                              │
//! │  total    = round(raw_subtotal + delivery_fee + raw_tax)               │
//! │                                                                         │
//! │  Each figure rounds its UNROUNDED inputs independently. The total is   │
//! │  NOT round(subtotal) + fee + round(tax): summing already-rounded       │
//! │  figures can drift a cent from the receipt the client verifies.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why f64 Dollars?
//! Prices enter the system as decimal-dollar JSON numbers and leave it the
//! same way; the storefront contract is dollar amounts with two decimals.
//! Every figure that reaches the wire passes through [`round_to_cents`], so
//! float noise never escapes this module.

use serde::{Deserialize, Serialize};

use crate::TAX_RATE;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a dollar amount to 2 decimal places, half away from zero.
///
/// ## Example
/// ```rust
/// use savor_core::pricing::round_to_cents;
///
/// assert_eq!(round_to_cents(2.039475), 2.04);
/// assert_eq!(round_to_cents(29.009475), 29.01);
/// assert_eq!(round_to_cents(-0.125), -0.13);
/// ```
#[inline]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// =============================================================================
// Order Totals
// =============================================================================

/// The three priced figures of an order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Sum of line totals, rounded to cents.
    pub subtotal: f64,
    /// Tax on the unrounded subtotal, rounded to cents.
    pub tax: f64,
    /// Subtotal + delivery fee + tax, rounded to cents.
    pub total: f64,
}

/// Computes order totals from an unrounded subtotal and a delivery fee.
///
/// ## Arguments
/// * `raw_subtotal` - Σ price × quantity over all lines, NOT yet rounded
/// * `delivery_fee` - taken as supplied; validated upstream, not here
///
/// ## Example
/// ```rust
/// use savor_core::pricing::order_totals;
///
/// // Two items: 12.99 + 9.99
/// let totals = order_totals(12.99 + 9.99, 3.99);
/// assert_eq!(totals.subtotal, 22.98);
/// assert_eq!(totals.tax, 2.04);
/// assert_eq!(totals.total, 29.01);
/// ```
pub fn order_totals(raw_subtotal: f64, delivery_fee: f64) -> OrderTotals {
    let raw_tax = raw_subtotal * TAX_RATE;

    OrderTotals {
        subtotal: round_to_cents(raw_subtotal),
        tax: round_to_cents(raw_tax),
        total: round_to_cents(raw_subtotal + delivery_fee + raw_tax),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(10.0), 10.0);
        assert_eq!(round_to_cents(10.994), 10.99);
        assert_eq!(round_to_cents(10.996), 11.0);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        // 0.125 is exactly representable in binary, so this is a true
        // half-cent case: it must go up in magnitude, both signs.
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(-0.125), -0.13);
    }

    #[test]
    fn test_reference_composition() {
        // 12.99 + 9.99 = 22.98 subtotal; tax = 22.98 × 0.08875 = 2.039475
        // → 2.04; total = 22.98 + 3.99 + 2.039475 = 29.009475 → 29.01.
        let totals = order_totals(12.99 + 9.99, 3.99);
        assert_eq!(totals.subtotal, 22.98);
        assert_eq!(totals.tax, 2.04);
        assert_eq!(totals.total, 29.01);
    }

    #[test]
    fn test_total_rounds_unrounded_inputs() {
        // Pick a subtotal whose tax rounds up: composing from the rounded
        // figures would be 10.0 + 1.0 + 0.89 = 11.89, and here the unrounded
        // composition agrees - the test documents the composition order.
        let totals = order_totals(10.0, 1.0);
        assert_eq!(totals.subtotal, 10.0);
        assert_eq!(totals.tax, 0.89); // 0.8875 rounds up
        assert_eq!(totals.total, 11.89); // 11.8875 rounds up
    }

    #[test]
    fn test_zero_subtotal() {
        // Degenerate but representable: the pipeline does not range-check
        // quantities, so a zero raw subtotal must still price cleanly.
        let totals = order_totals(0.0, 3.99);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.total, 3.99);
    }
}
