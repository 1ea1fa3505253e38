use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use base64::{engine::general_purpose, Engine as _};
use rust_embed::RustEmbed;
use serde::Serialize;
use tracing::{debug, info};

use crate::constants::UPLOAD_FIELD_NAME;
use crate::error::AppError;
use crate::hex_dump::render_hex_dump;
use crate::html_template::{get_uploaded_html, get_visualization_html};
use crate::processing::Visualization;
use crate::raster::render_raster;
use crate::settings::Settings;
use crate::summary::ByteSummary;
use crate::upload_store::UploadInfo;

use super::state::AppState;

#[derive(RustEmbed)]
#[folder = "frontend/"]
struct Asset;

/// Runs CPU-bound rendering off the async executor
async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::internal("Render task failed", e))?
}

/// Renders the current upload, returning the info recorded for exactly
/// those bytes alongside the rendering
async fn render_upload(state: &AppState) -> Result<(Visualization, Option<UploadInfo>), AppError> {
    let stored = state.store.load().await?;
    let width = state.settings.raster_width;
    let height = state.settings.raster_height;
    let palette = state.palette;

    let data = stored.data;
    let viz = run_blocking(move || {
        Visualization::render(&data, width, height, &palette)
            .map_err(|e| AppError::internal("Error generating image", e))
    })
    .await?;
    Ok((viz, stored.info))
}

pub async fn index_html() -> Result<Html<Vec<u8>>, AppError> {
    let page = Asset::get("index.html").ok_or_else(|| {
        AppError::internal("Missing index page", anyhow::anyhow!("index.html is not embedded"))
    })?;
    Ok(Html(page.data.into_owned()))
}

fn multipart_error(err: MultipartError, limit: usize, message: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        debug!("Multipart error: {}", err.body_text());
        AppError::BadRequest(message.to_string())
    }
}

pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, AppError> {
    let limit = state.settings.max_upload_bytes;
    let mut multipart =
        multipart.map_err(|_| AppError::BadRequest("Unable to parse form".to_string()))?;

    loop {
        let mut field = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, limit, "Unable to parse form"))?
            .ok_or_else(|| AppError::BadRequest("Unable to get file".to_string()))?;

        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);

        // The body limit leaves room for multipart framing, the file itself
        // is held to `limit`
        let mut data = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e, limit, "Unable to get file"))?
        {
            if data.len() + chunk.len() > limit {
                return Err(AppError::PayloadTooLarge { limit });
            }
            data.extend_from_slice(&chunk);
        }

        let upload_info = state
            .store
            .save(file_name, &data)
            .await
            .map_err(|e| AppError::internal("Unable to save file", e))?;

        info!(
            "📥 Stored upload {} ({} bytes) at {}",
            upload_info.file_name.as_deref().unwrap_or("<unnamed>"),
            upload_info.size,
            state.store.path().display()
        );
        return Ok(get_uploaded_html(&upload_info));
    }
}

pub async fn visualize(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (viz, info) = render_upload(&state).await?;

    info!(
        "🖼️  Visualized {} bytes ({} hex rows)",
        viz.summary.total_bytes, viz.summary.hex_rows
    );

    let png_base64 = general_purpose::STANDARD.encode(&viz.png);
    Ok(get_visualization_html(
        &png_base64,
        &viz.hex_dump,
        &viz.summary,
        info.as_ref(),
    ))
}

pub async fn raster_png(State(state): State<AppState>) -> Result<Response, AppError> {
    let (viz, _) = render_upload(&state).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        viz.png,
    )
        .into_response())
}

pub async fn hex_dump_text(State(state): State<AppState>) -> Result<Response, AppError> {
    let data = state.store.load().await?.data;
    let dump = run_blocking(move || Ok(render_hex_dump(&data))).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        dump,
    )
        .into_response())
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub upload: Option<UploadInfo>,
    pub summary: ByteSummary,
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let stored = state.store.load().await?;
    let width = state.settings.raster_width;
    let height = state.settings.raster_height;

    let data = stored.data;
    let summary = run_blocking(move || {
        let grid = render_raster(&data, width, height);
        Ok(ByteSummary::new(&data, &grid))
    })
    .await?;

    Ok(Json(SummaryResponse {
        upload: stored.info,
        summary,
    }))
}

// API endpoint to get current settings
pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json((*state.settings).clone())
}
