//! # HTTP Server for Bank Slips
//!
//! Exposes decoding, batch validation and barcode rendering over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! boleto serve --listen 0.0.0.0:8080
//! ```
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/api/banks` | Known banks |
//! | GET | `/api/boleto/:number` | Decoded fields (JSON) |
//! | GET | `/api/boleto/:number/barcode.png` | Barcode symbol (PNG) |
//! | POST | `/api/boleto/validate` | Batch validation (JSON) |

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::BoletoError;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/banks", get(handlers::banks::list))
        .route("/api/boleto/validate", post(handlers::boleto::validate))
        .route("/api/boleto/:number", get(handlers::boleto::show))
        .route(
            "/api/boleto/:number/barcode.png",
            get(handlers::boleto::barcode_png),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use boleto::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), boleto::BoletoError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), BoletoError> {
    let app = router(Arc::new(AppState::new(config.clone())));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            BoletoError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    info!(
        listen = %config.listen_addr,
        profile = config.symbol.name,
        "boleto HTTP server listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| BoletoError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
