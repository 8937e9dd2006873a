//! # Validation Module
//!
//! Field checks for order submissions.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Client                                                        │
//! │  ├── Disables checkout on an empty cart                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Deserialization                                              │
//! │  └── Shape/type checks (serde); absent fields become empty defaults    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE - field-by-field, fail-fast                      │
//! │  └── First failing field wins; later fields are never inspected       │
//! │                                                                         │
//! │  The client is untrusted: everything it sends re-validates here.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{OrderError, OrderResult};
use crate::order::OrderItemRequest;

/// Validates that a required text field is present and non-empty.
///
/// ## Example
/// ```rust
/// use savor_core::validation::require_text;
///
/// assert!(require_text("userId", "u-1").is_ok());
/// assert!(require_text("userId", "").is_err());
/// ```
pub fn require_text(field: &'static str, value: &str) -> OrderResult<()> {
    if value.is_empty() {
        return Err(OrderError::InvalidField { field });
    }
    Ok(())
}

/// Validates that the submission carries at least one line.
pub fn require_items(field: &'static str, items: &[OrderItemRequest]) -> OrderResult<()> {
    if items.is_empty() {
        return Err(OrderError::InvalidField { field });
    }
    Ok(())
}

/// Validates the delivery fee.
///
/// A zero fee is rejected, not just a missing one. That mirrors the
/// storefront's long-standing behavior (free delivery has never been sold
/// through this endpoint), and clients rely on the 400; relaxing it is a
/// contract change, not a bug fix. The sign and magnitude are deliberately
/// not checked beyond that.
pub fn require_delivery_fee(field: &'static str, fee: f64) -> OrderResult<()> {
    if fee == 0.0 {
        return Err(OrderError::InvalidField { field });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("userId", "u-1").is_ok());

        let err = require_text("userId", "").unwrap_err();
        assert!(matches!(
            err,
            OrderError::InvalidField { field: "userId" }
        ));
    }

    #[test]
    fn test_require_items() {
        let lines = vec![OrderItemRequest {
            item_id: "m-1".to_string(),
            quantity: 1,
        }];
        assert!(require_items("items", &lines).is_ok());
        assert!(require_items("items", &[]).is_err());
    }

    #[test]
    fn test_require_delivery_fee_rejects_zero() {
        assert!(require_delivery_fee("deliveryFee", 3.99).is_ok());
        assert!(require_delivery_fee("deliveryFee", 0.0).is_err());
        // Only zero is rejected; sign is not range-checked here.
        assert!(require_delivery_fee("deliveryFee", -1.0).is_ok());
    }
}
