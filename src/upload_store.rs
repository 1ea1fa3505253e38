use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing has been uploaded yet, or the slot file was removed
    #[error("no file has been uploaded")]
    NoUpload,

    #[error("upload slot I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Metadata about the file currently in the slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadInfo {
    pub file_name: Option<String>,
    pub size: usize,
    pub uploaded_at: DateTime<Utc>,
}

/// Contents of the slot together with the metadata recorded for them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub data: Vec<u8>,
    /// `None` when the file predates this process
    pub info: Option<UploadInfo>,
}

/// Single on-disk upload slot. Each upload replaces the previous one.
#[derive(Clone)]
pub struct UploadStore {
    path: PathBuf,
    info: Arc<RwLock<Option<UploadInfo>>>,
}

impl UploadStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            info: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `data` to the slot, truncating whatever was there.
    pub async fn save(&self, file_name: Option<String>, data: &[u8]) -> Result<UploadInfo, StoreError> {
        // Lock is held across the write so info always matches the file
        let mut info = self.info.write().await;

        tokio::fs::write(&self.path, data).await?;

        let new_info = UploadInfo {
            file_name,
            size: data.len(),
            uploaded_at: Utc::now(),
        };
        *info = Some(new_info.clone());
        Ok(new_info)
    }

    /// Reads the slot. An empty file is returned as an empty buffer; only a
    /// missing file is reported as `NoUpload`. Data and info are read under
    /// the same guard, so a concurrent `save` cannot split them.
    pub async fn load(&self) -> Result<StoredUpload, StoreError> {
        let info = self.info.read().await;
        match tokio::fs::read(&self.path).await {
            Ok(data) => Ok(StoredUpload {
                data,
                info: info.clone(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NoUpload),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Info about the last upload made by this process, if any
    pub async fn info(&self) -> Option<UploadInfo> {
        self.info.read().await.clone()
    }
}
