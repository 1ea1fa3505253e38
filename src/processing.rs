use anyhow::Result;
use std::time::Instant;
use tracing::debug;

use crate::hex_dump::render_hex_dump;
use crate::image_processing::{encode_png, Palette};
use crate::raster::render_raster;
use crate::summary::ByteSummary;

/// Both renderings of one buffer, ready to be served
#[derive(Debug, Clone)]
pub struct Visualization {
    pub png: Vec<u8>,
    pub hex_dump: String,
    pub summary: ByteSummary,
}

impl Visualization {
    pub fn render(data: &[u8], width: u32, height: u32, palette: &Palette) -> Result<Self> {
        let start_time = Instant::now();

        let grid = render_raster(data, width, height);
        let png = encode_png(&grid, palette)?;
        let hex_dump = render_hex_dump(data);
        let summary = ByteSummary::new(data, &grid);

        debug!(
            bytes = data.len(),
            width,
            height,
            set_cells = grid.set_count(),
            unset_cells = grid.unset_count(),
            png_bytes = png.len(),
            elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0,
            "rendered visualization"
        );

        Ok(Self {
            png,
            hex_dump,
            summary,
        })
    }
}
