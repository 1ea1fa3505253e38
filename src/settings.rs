use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub port: u16,
    pub bind_address: String,
    pub upload_path: PathBuf,
    pub max_upload_bytes: usize,
    pub raster_width: u32,
    pub raster_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            upload_path: PathBuf::from(DEFAULT_UPLOAD_PATH),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            raster_width: RASTER_WIDTH,
            raster_height: RASTER_HEIGHT,
        }
    }
}

impl Settings {
    /// Loads `byteviz.ini` from next to the executable, falling back to
    /// defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    pub fn load_from<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Parses `key = value` lines. Comments (`#`), blank lines and unknown
    /// keys are skipped; bad values keep the default.
    pub fn parse(content: &str) -> Self {
        let mut config_map = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(key.trim(), value.trim().trim_matches('"'));
            }
        }

        let mut settings = Settings::default();

        if let Some(port) = parse_value::<u16>(&config_map, "port") {
            settings.port = port;
        }
        if let Some(bind_address) = config_map.get("bind_address") {
            settings.bind_address = bind_address.to_string();
        }
        if let Some(upload_path) = config_map.get("upload_path") {
            settings.upload_path = PathBuf::from(*upload_path);
        }
        if let Some(max_upload_bytes) = parse_value::<usize>(&config_map, "max_upload_bytes") {
            settings.max_upload_bytes = max_upload_bytes;
        }
        if let Some(width) = parse_dimension(&config_map, "raster_width") {
            settings.raster_width = width;
        }
        if let Some(height) = parse_dimension(&config_map, "raster_height") {
            settings.raster_height = height;
        }

        settings
    }

    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push(CONFIG_FILE_NAME);
        path
    }
}

fn parse_value<T: FromStr>(config_map: &HashMap<&str, &str>, key: &str) -> Option<T> {
    let raw = config_map.get(key)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("⚠️  Ignoring invalid value for '{}': {}", key, raw);
            None
        }
    }
}

fn parse_dimension(config_map: &HashMap<&str, &str>, key: &str) -> Option<u32> {
    match parse_value::<u32>(config_map, key)? {
        0 => {
            warn!("⚠️  '{}' must be greater than zero, keeping default", key);
            None
        }
        value => Some(value),
    }
}
