use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

use crate::classify::Category;
use crate::raster::RasterGrid;

/// Two-color palette used to paint a raster grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub printable: Rgba<u8>,
    /// Used for non-printable bytes and for unset cells
    pub other: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            printable: Rgba([0, 255, 0, 255]), // Green for printable bytes
            other: Rgba([0, 0, 0, 255]),       // Black for everything else
        }
    }
}

impl Palette {
    /// Color of a single cell. Unset cells share the non-printable color so
    /// the background is opaque black rather than transparent.
    pub fn color_for(&self, cell: Option<Category>) -> Rgba<u8> {
        match cell {
            Some(Category::Printable) => self.printable,
            Some(Category::NonPrintable) | None => self.other,
        }
    }
}

/// Paints the grid into an RGBA image, one pixel per cell.
pub fn grid_to_image(grid: &RasterGrid, palette: &Palette) -> RgbaImage {
    let mut img = RgbaImage::new(grid.width(), grid.height());
    for (row, pixels) in grid.rows().zip(img.rows_mut()) {
        for (cell, pixel) in row.iter().zip(pixels) {
            *pixel = palette.color_for(*cell);
        }
    }
    img
}

/// Encodes the grid as a lossless PNG.
pub fn encode_png(grid: &RasterGrid, palette: &Palette) -> Result<Vec<u8>> {
    let img = grid_to_image(grid, palette);

    let mut png_data = Vec::new();
    img.write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)
        .with_context(|| {
            format!(
                "Failed to encode {}x{} raster as PNG",
                grid.width(),
                grid.height()
            )
        })?;

    Ok(png_data)
}
