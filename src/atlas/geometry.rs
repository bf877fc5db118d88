//! Atlas grid geometry.

use std::ops::RangeInclusive;

/// Cells per atlas row.
pub const GRID_COLUMNS: u32 = 256;
/// Cell rows in the atlas.
pub const GRID_ROWS: u32 = 256;
/// Every code point in the Basic Multilingual Plane gets a cell.
pub const CODEPOINTS: RangeInclusive<u32> = 0..=0xFFFF;

/// Size of one glyph cell; the atlas is a 256x256 grid of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasGeometry {
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Default for AtlasGeometry {
    fn default() -> Self {
        Self {
            cell_width: 12,
            cell_height: 16,
        }
    }
}

impl AtlasGeometry {
    pub fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.cell_width * GRID_COLUMNS
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.cell_height * GRID_ROWS
    }

    /// Grid position (column, row) of `codepoint`.
    pub fn cell_index(&self, codepoint: u32) -> (u32, u32) {
        (codepoint % GRID_COLUMNS, codepoint / GRID_COLUMNS)
    }

    /// Pixel position of the top-left corner of `codepoint`'s cell.
    pub fn cell_origin(&self, codepoint: u32) -> (u32, u32) {
        let (column, row) = self.cell_index(codepoint);
        (column * self.cell_width, row * self.cell_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let geometry = AtlasGeometry::default();
        assert_eq!((geometry.width(), geometry.height()), (3072, 4096));
    }

    #[test]
    fn test_cell_origin() {
        let geometry = AtlasGeometry::default();
        assert_eq!(geometry.cell_index(0x41), (65, 0));
        assert_eq!(geometry.cell_origin(0x41), (65 * 12, 0));
        assert_eq!(geometry.cell_origin(0x3042), (0x42 * 12, 0x30 * 16));
        assert_eq!(geometry.cell_origin(0xFFFF), (255 * 12, 255 * 16));
    }
}
