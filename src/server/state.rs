use std::sync::Arc;

use crate::image_processing::Palette;
use crate::settings::Settings;
use crate::upload_store::UploadStore;

// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: UploadStore,
    pub settings: Arc<Settings>,
    pub palette: Palette,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            store: UploadStore::new(settings.upload_path.clone()),
            settings: Arc::new(settings),
            palette: Palette::default(),
        }
    }
}
