use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::constants::MULTIPART_OVERHEAD_BYTES;

pub mod handlers;
pub mod state;

pub use self::state::AppState;
use handlers::{
    get_settings, get_summary, hex_dump_text, index_html, raster_png, upload_file, visualize,
};

/// Builds the application router. Unknown paths fall through to 404.
pub fn create_app(state: AppState) -> Router {
    // The file field itself is checked against max_upload_bytes in upload_file
    let body_limit = state
        .settings
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/", get(index_html))
        .route("/upload", post(upload_file))
        .route("/visualize", get(visualize))
        .route("/api/raster.png", get(raster_png))
        .route("/api/hexdump", get(hex_dump_text))
        .route("/api/summary", get(get_summary))
        .route("/api/settings", get(get_settings))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

pub async fn start_server(state: AppState) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", state.settings.bind_address, state.settings.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid listen address {}:{}",
                state.settings.bind_address, state.settings.port
            )
        })?;

    let app = create_app(state);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind to {}", addr))?;

    info!("✅ HTTP server started at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("🛑 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        // Never resolve, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
}
