//! # Error Types
//!
//! Domain-specific error types for savor-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  savor-core errors (this file)                                         │
//! │  └── OrderError       - Business-rule failures in the order pipeline   │
//! │      ├── InvalidField - A required request field is missing/falsy      │
//! │      ├── ItemNotFound - Item id does not resolve against the catalog   │
//! │      └── OrderNotFound- Retrieval by unknown order id                  │
//! │                                                                         │
//! │  savor-api errors (in app)                                             │
//! │  └── ApiError         - What the HTTP client sees (serialized)         │
//! │                                                                         │
//! │  Flow: OrderError → ApiError → {"error": "..."} + status code          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, item id)
//! 3. Errors are enum variants, never String
//! 4. Every variant maps to a caller-visible message
//!
//! ## What Is NOT an Error Here
//! - A cross-restaurant `add_item` is an expected, recoverable branch the
//!   caller must handle on every call, so it is a plain return value
//!   ([`crate::cart::AddOutcome::Conflict`]), not an error.
//! - Misuse of [`crate::cart::CartState`] (a poisoned lock) is a programming
//!   error, not user input: it panics instead of returning a typed result.

use thiserror::Error;

// =============================================================================
// Order Error
// =============================================================================

/// Business-rule failures from the order pipeline and order retrieval.
///
/// These are all recoverable: the API layer turns each one into a structured
/// failure response and the client's cart is left untouched.
#[derive(Debug, Clone, Error)]
pub enum OrderError {
    /// A required submission field is missing or empty.
    ///
    /// ## When This Occurs
    /// - The client sent `{}` or omitted a field
    /// - A field deserialized to its empty default (`""`, `[]`, `0.0`)
    ///
    /// Checks run top-to-bottom over the request; the first failing field
    /// wins and later fields are not inspected.
    #[error("{field} is invalid")]
    InvalidField { field: &'static str },

    /// An item id in the submission does not resolve against the catalog.
    ///
    /// ## When This Occurs
    /// - The item was removed from the menu between cart-build and checkout
    /// - The client sent a fabricated id
    ///
    /// The "not found" wording is load-bearing: clients pattern-match on it
    /// for coarse-grained handling.
    #[error("Menu item {id} not found")]
    ItemNotFound { id: String },

    /// Retrieval by an order id that was never issued.
    #[error("Order {id} not found")]
    OrderNotFound { id: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OrderError::InvalidField { field: "userId" };
        assert_eq!(err.to_string(), "userId is invalid");

        let err = OrderError::OrderNotFound {
            id: "o-42".to_string(),
        };
        assert_eq!(err.to_string(), "Order o-42 not found");
    }

    #[test]
    fn test_item_not_found_contains_stable_substring() {
        // Callers match on "not found"; the exact phrasing around it may
        // change, the substring may not.
        let err = OrderError::ItemNotFound {
            id: "abc-123".to_string(),
        };
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("abc-123"));
    }
}
