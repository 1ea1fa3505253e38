use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use byteviz::server::{start_server, AppState};
use byteviz::settings::Settings;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("byteviz=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    info!("🔬 ByteViz v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = Settings::config_path();
    let settings = Settings::load().with_context(|| "Failed to load settings")?;
    info!(
        "⚙️  Settings from {}: raster {}x{}, upload limit {} bytes",
        config_path.display(),
        settings.raster_width,
        settings.raster_height,
        settings.max_upload_bytes
    );
    info!("📂 Upload slot: {}", settings.upload_path.display());

    let app_state = AppState::new(settings);
    start_server(app_state).await?;

    Ok(())
}
