//! # Health Handler

use chrono::Utc;
use serde_json::json;

use crate::http::Response;

/// Liveness check: always `{"status":"ok"}` plus the server's clock.
pub fn health() -> Response {
    Response::json(
        200,
        &json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_shape() {
        let response = health();
        assert_eq!(response.status, 200);

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }
}
