//! # HTTP Server for Receipt Printing
//!
//! Accepts print requests as JSON and sends the compiled jobs to printers.
//!
//! ## Usage
//!
//! ```bash
//! ticketera serve --listen 0.0.0.0:8083 --device-dir /dev/usb
//! ```
//!
//! ```bash
//! curl -X POST http://localhost:8083/ \
//!   -d '{"operations": [{"action": "text", "data": "Hola"}, {"action": "fullCut"}], "printer": "lp0"}'
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Effect |
//! |--------|------|--------|
//! | POST | `/` | compile and print |
//! | POST | `/preview` | compile only, returns the raw job bytes |
//! | OPTIONS | any | CORS preflight |

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    http::{header, HeaderName, Method},
    routing::post,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::TicketeraError;

/// Build the application router.
///
/// Split out from [`serve`] so tests can drive it with any delivery backend.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
            header::AUTHORIZATION,
        ]);

    Router::new()
        .route("/", post(handlers::print::print))
        .route("/preview", post(handlers::print::preview))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use ticketera::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), ticketera::error::TicketeraError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8083".to_string(),
///     device_dir: "/dev/usb".into(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), TicketeraError> {
    let app = router(Arc::new(AppState::new(config.clone())));

    info!(listen = %config.listen_addr, "ticketera HTTP server starting");
    info!(device_dir = %config.device_dir.display(), "printers resolved inside device directory");
    if config.encoder.trace_operations {
        info!("operation tracing enabled");
    }

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            TicketeraError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| TicketeraError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
