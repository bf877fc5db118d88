//! Immutable glyph tables backed by BDF fonts.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::GlyphSource;
use crate::bdf::{self, BdfFont};
use crate::error::{BakeError, BdfError};
use crate::glyph::GlyphBitmap;

/// A code point to glyph table at a single pixel size.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    name: String,
    pixel_size: u32,
    glyphs: HashMap<u32, GlyphBitmap>,
}

impl GlyphTable {
    /// Create an empty table.
    pub fn new(name: impl Into<String>, pixel_size: u32) -> Self {
        Self {
            name: name.into(),
            pixel_size,
            glyphs: HashMap::new(),
        }
    }

    /// Build a table from a parsed BDF font. Later duplicates win.
    pub fn from_bdf(name: impl Into<String>, font: BdfFont) -> Self {
        let mut table = Self::new(name, font.pixel_size);
        for (codepoint, glyph) in font.glyphs {
            if table.insert(codepoint, glyph).is_some() {
                log::warn!(
                    "Font '{}' defines U+{:04X} more than once, keeping the last",
                    table.name,
                    codepoint
                );
            }
        }
        table
    }

    /// Read and parse a BDF file.
    pub fn load_bdf(name: impl Into<String>, path: &Path) -> Result<Self, BdfError> {
        let name = name.into();
        log::info!("Loading {} glyphs from {:?}", name, path);
        let src = fs::read_to_string(path).map_err(|source| BdfError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_bdf(name, bdf::parse(&src)?);
        log::info!(
            "Loaded {} glyphs at {}px for '{}'",
            table.len(),
            table.pixel_size,
            table.name
        );
        Ok(table)
    }

    /// Add or replace a glyph, returning the previous one.
    pub fn insert(&mut self, codepoint: u32, glyph: GlyphBitmap) -> Option<GlyphBitmap> {
        self.glyphs.insert(codepoint, glyph)
    }

    /// Copy of this table with every glyph rendered into a cell-sized
    /// bitmap on a baseline `descent` pixels above the cell bottom.
    ///
    /// Fails if any glyph's ink would leave the cell.
    pub fn baked(
        &self,
        cell_width: u32,
        cell_height: u32,
        descent: u32,
    ) -> Result<Self, BakeError> {
        let glyphs = self
            .glyphs
            .iter()
            .map(|(cp, glyph)| {
                let baked = glyph
                    .baked(cell_width, cell_height, descent)
                    .map_err(|clipped| BakeError {
                        font: self.name.clone(),
                        codepoint: *cp,
                        width: glyph.width(),
                        height: glyph.height(),
                        origin_x: glyph.origin_x(),
                        origin_y: glyph.origin_y(),
                        clipped,
                        cell_width,
                        cell_height,
                    })?;
                Ok((*cp, baked))
            })
            .collect::<Result<HashMap<_, _>, BakeError>>()?;
        Ok(Self {
            name: self.name.clone(),
            pixel_size: self.pixel_size,
            glyphs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl GlyphSource for GlyphTable {
    fn lookup_glyph(&self, codepoint: u32, size: u32) -> Option<&GlyphBitmap> {
        if size != self.pixel_size {
            return None;
        }
        self.glyphs.get(&codepoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_respects_pixel_size() {
        let mut table = GlyphTable::new("t", 12);
        table.insert(0x41, GlyphBitmap::filled(2, 2));
        assert!(table.lookup_glyph(0x41, 12).is_some());
        assert!(table.lookup_glyph(0x41, 10).is_none());
        assert!(table.lookup_glyph(0x42, 12).is_none());
    }

    #[test]
    fn test_from_bdf_last_duplicate_wins() {
        let font = BdfFont {
            name: None,
            pixel_size: 12,
            glyphs: vec![
                (0x41, GlyphBitmap::filled(1, 1)),
                (0x41, GlyphBitmap::filled(3, 3)),
            ],
        };
        let table = GlyphTable::from_bdf("dup", font);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup_glyph(0x41, 12).unwrap().width(), 3);
    }

    #[test]
    fn test_baked_names_the_overflowing_glyph() {
        let mut table = GlyphTable::new("mplus", 12);
        table.insert(0x41, GlyphBitmap::filled(6, 10));
        table.insert(0x3042, GlyphBitmap::filled(12, 16));
        let err = table.baked(12, 16, 4).unwrap_err();
        assert_eq!(err.font, "mplus");
        assert_eq!(err.codepoint, 0x3042);
        assert_eq!(err.clipped, 48);
        assert!(err.to_string().contains("U+3042"), "{err}");
    }
}
