use crate::classify::{classify, Category};

/// Fixed-size grid of classified bytes, stored row-major.
///
/// A cell is `None` when the input ran out before reaching it. The grid
/// dimensions never depend on the input length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<Category>>,
}

/// Maps `data` onto a `width` x `height` grid, one byte per cell.
///
/// Cell `i` (with `i = y * width + x`) holds `classify(data[i])` for every
/// `i < data.len()`. Bytes past `width * height` are dropped, cells past
/// `data.len()` stay unset. A zero dimension gives an empty grid.
pub fn render_raster(data: &[u8], width: u32, height: u32) -> RasterGrid {
    let capacity = width as usize * height as usize;

    let cells = (0..capacity)
        .map(|i| data.get(i).copied().map(classify))
        .collect();

    RasterGrid {
        width,
        height,
        cells,
    }
}

impl RasterGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Category>]> + '_ {
        // chunks() panics on zero, an empty grid simply yields no rows
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn set_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn unset_count(&self) -> usize {
        self.capacity() - self.set_count()
    }
}
