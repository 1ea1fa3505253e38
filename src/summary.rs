use serde::Serialize;

use crate::classify::classify;
use crate::hex_dump::row_count;
use crate::raster::RasterGrid;

/// Counts describing what the two visualizations of a buffer will show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteSummary {
    pub total_bytes: usize,
    pub printable: usize,
    pub non_printable: usize,
    pub hex_rows: usize,
    pub raster_capacity: usize,
    /// Raster cells left at the background color
    pub unset_cells: usize,
    /// Bytes that do not fit into the raster
    pub truncated_bytes: usize,
}

impl ByteSummary {
    /// Summarizes `data` together with the grid rendered from it.
    pub fn new(data: &[u8], grid: &RasterGrid) -> Self {
        let printable = data.iter().filter(|&&b| classify(b).is_printable()).count();

        Self {
            total_bytes: data.len(),
            printable,
            non_printable: data.len() - printable,
            hex_rows: row_count(data.len()),
            raster_capacity: grid.capacity(),
            unset_cells: grid.unset_count(),
            truncated_bytes: data.len().saturating_sub(grid.capacity()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::render_raster;

    #[test]
    fn empty_buffer() {
        let grid = render_raster(&[], 256, 256);
        let summary = ByteSummary::new(&[], &grid);
        assert_eq!(
            summary,
            ByteSummary {
                total_bytes: 0,
                printable: 0,
                non_printable: 0,
                hex_rows: 0,
                raster_capacity: 65536,
                unset_cells: 65536,
                truncated_bytes: 0,
            }
        );
    }

    #[test]
    fn counts_and_truncation() {
        let data = b"Hello\x00\x01\x02\xff world!!!";
        let summary = ByteSummary::new(data, &render_raster(data, 4, 4));
        assert_eq!(summary.total_bytes, 18);
        assert_eq!(summary.printable, 14);
        assert_eq!(summary.non_printable, 4);
        assert_eq!(summary.hex_rows, 2);
        assert_eq!(summary.raster_capacity, 16);
        assert_eq!(summary.unset_cells, 0);
        assert_eq!(summary.truncated_bytes, 2);
    }

    #[test]
    fn short_buffer_leaves_unset_cells() {
        let data = b"abc";
        let summary = ByteSummary::new(data, &render_raster(data, 4, 2));
        assert_eq!(summary.raster_capacity, 8);
        assert_eq!(summary.unset_cells, 5);
        assert_eq!(summary.truncated_bytes, 0);
    }
}
