//! # Savor API Server
//!
//! Entry point: seeds the catalog, binds the listener, serves forever.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Build State ──────────────────────────────────────────────────────► │
//! │     • Deterministic seeded catalog (same data every restart)            │
//! │     • Empty order store (orders are process-lifetime only)              │
//! │                                                                         │
//! │  3. Bind & Serve ─────────────────────────────────────────────────────► │
//! │     • 127.0.0.1:3001 by default, PORT env var to override               │
//! │     • One task per connection                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use savor_api::{http, AppState};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    info!("Starting Savor API server");

    let state = AppState::seeded();
    info!(
        restaurants = state.catalog.restaurants().count(),
        menu_items = state.catalog.menu_items().count(),
        "Catalog seeded"
    );

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("127.0.0.1:{}", port);
    let listener = TcpListener::bind(&addr).await?;

    info!(%addr, "API server listening");

    http::serve(listener, state).await
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=savor=trace` - Show trace for savor crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,savor=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
