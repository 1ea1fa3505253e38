use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::upload_store::StoreError;

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("No file uploaded")]
    NoUpload,

    #[error("File is larger than the {limit} byte upload limit")]
    PayloadTooLarge { limit: usize },

    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn internal<E: Into<anyhow::Error>>(message: &str, source: E) -> Self {
        AppError::Internal {
            message: message.to_string(),
            source: source.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NoUpload => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NoUpload => AppError::NoUpload,
            StoreError::Io(e) => AppError::internal("Unable to read uploaded file", e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::Internal { message, source } => {
                error!("❌ {}: {:#}", message, source);
            }
            other => warn!("⚠️  {} ({})", other, status),
        }
        (status, self.to_string()).into_response()
    }
}
