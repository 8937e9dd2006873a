//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Savor                                  │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /api/orders                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<Response, ApiError>                                      │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad field/item?  ── OrderError::InvalidField ──┐                │  │
//! │  │         │            OrderError::ItemNotFound   │                │  │
//! │  │         ▼                                       ▼                │  │
//! │  │  Unknown order? ──── OrderError::OrderNotFound ─── ApiError ───► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄─── 400/404 + {"error": "userId is invalid"} ──────────────────────  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wire body is always `{"error": "<message>"}`; the status code is the
//! machine-readable part (bad request vs not found vs server fault), the
//! message the human-readable part.

use savor_core::OrderError;
use serde_json::json;

use crate::http::Response;

/// Error codes for API responses, each mapping to one HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The request was malformed or failed validation (400).
    BadRequest,

    /// The addressed resource does not exist (404).
    NotFound,

    /// Unexpected server fault (500).
    Internal,
}

impl ErrorCode {
    /// The HTTP status this code maps to.
    pub fn status(&self) -> u16 {
        match self {
            ErrorCode::BadRequest => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::Internal => 500,
        }
    }
}

/// API error returned from handlers.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Machine-readable error code (becomes the status line).
    pub code: ErrorCode,

    /// Human-readable error message for display.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Serializes the error to its wire response.
    pub fn into_response(self) -> Response {
        Response::json(self.code.status(), &json!({ "error": self.message }))
    }
}

/// Converts pipeline errors to API errors.
///
/// Creation-time failures (bad fields, unknown items) are the client's
/// fault: 400. A missing order on retrieval is an addressing miss: 404.
impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        let code = match err {
            OrderError::InvalidField { .. } | OrderError::ItemNotFound { .. } => {
                ErrorCode::BadRequest
            }
            OrderError::OrderNotFound { .. } => ErrorCode::NotFound,
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
