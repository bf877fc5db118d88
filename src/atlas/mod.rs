//! Atlas compositing.
//!
//! [`AtlasBuilder::build`] walks every code point in the BMP, asks the
//! resolver for its glyph and draws it into the code point's cell of a
//! 256x256-cell canvas. Cells without a glyph stay transparent.
//!
//! # Placement
//!
//! - [`Placement::Baseline`] (legacy): the glyph is bottom-aligned with a
//!   fixed descent and shifted by its own origin, so glyphs of different
//!   heights share a baseline.
//! - [`Placement::TopLeft`] (extended): the glyph is already a full cell
//!   with the baseline baked in and is placed flush.

mod canvas;
mod geometry;

pub use canvas::{Canvas, Rgba16Image};
pub use geometry::{AtlasGeometry, CODEPOINTS, GRID_COLUMNS, GRID_ROWS};

use bitmapfont_config::{PackFormat, Variant};
use bitmapfont_glyphs::{FontType, GlyphBitmap, GlyphResolver, GlyphSource, WidthOracle};

use crate::error::AtlasError;

/// Where a glyph lands inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Bottom-aligned `descent` pixels above the cell bottom, offset by the
    /// glyph origin. May extend above the cell.
    Baseline { descent: u32 },
    /// Flush at the cell's top-left corner; must fit the cell.
    TopLeft,
}

impl Placement {
    pub fn for_variant(variant: Variant, descent: u32) -> Self {
        match variant {
            Variant::Legacy => Placement::Baseline { descent },
            Variant::Extended => Placement::TopLeft,
        }
    }
}

/// A finished atlas: the canvas plus which provider filled each cell.
#[derive(Debug, Clone)]
pub struct Atlas {
    canvas: Canvas,
    geometry: AtlasGeometry,
    sources: Vec<FontType>,
}

impl Atlas {
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn geometry(&self) -> AtlasGeometry {
        self.geometry
    }

    /// Provider whose glyph was drawn into `codepoint`'s cell.
    pub fn source_of(&self, codepoint: u32) -> FontType {
        self.sources
            .get(codepoint as usize)
            .copied()
            .unwrap_or_default()
    }

    /// Number of cells filled from `font_type`.
    pub fn count(&self, font_type: FontType) -> usize {
        self.sources.iter().filter(|s| **s == font_type).count()
    }

    /// Number of cells holding a glyph.
    pub fn glyph_count(&self) -> usize {
        self.sources.len() - self.count(FontType::None)
    }
}

/// Composites resolved glyphs into an atlas canvas.
#[derive(Debug, Clone, Copy)]
pub struct AtlasBuilder {
    geometry: AtlasGeometry,
    placement: Placement,
    format: PackFormat,
}

impl AtlasBuilder {
    pub fn new(geometry: AtlasGeometry, placement: Placement, format: PackFormat) -> Self {
        Self {
            geometry,
            placement,
            format,
        }
    }

    /// Build the atlas for every code point in `0..=0xFFFF`.
    pub fn build<S, W>(&self, resolver: &GlyphResolver<'_, S, W>) -> Result<Atlas, AtlasError>
    where
        S: GlyphSource,
        W: WidthOracle,
    {
        log::info!(
            "Building {}x{} atlas ({}x{} cells, {:?}, {:?})",
            self.geometry.width(),
            self.geometry.height(),
            self.geometry.cell_width,
            self.geometry.cell_height,
            self.placement,
            self.format
        );

        let mut canvas = Canvas::new(self.format, self.geometry.width(), self.geometry.height());
        let mut sources = vec![FontType::None; CODEPOINTS.count()];

        for codepoint in CODEPOINTS {
            let Some((font_type, glyph)) = resolver.resolve(codepoint) else {
                continue;
            };
            let (x, y) = self.destination(codepoint, glyph)?;
            log::trace!(
                "U+{:04X}: {} glyph {}x{} at ({}, {})",
                codepoint,
                font_type.name(),
                glyph.width(),
                glyph.height(),
                x,
                y
            );
            draw_over(&mut canvas, x, y, glyph);
            sources[codepoint as usize] = font_type;
        }

        let atlas = Atlas {
            canvas,
            geometry: self.geometry,
            sources,
        };
        log::info!(
            "Composited {} glyphs (fixed={}, proportional={}, supplementary={})",
            atlas.glyph_count(),
            atlas.count(FontType::Fixed),
            atlas.count(FontType::Proportional),
            atlas.count(FontType::Supplementary)
        );
        Ok(atlas)
    }

    /// Top-left canvas position for `glyph` in `codepoint`'s cell.
    ///
    /// The glyph must stay within the cell's columns. Vertically it must stay
    /// within the cell for `TopLeft` and within the canvas for `Baseline`.
    fn destination(&self, codepoint: u32, glyph: &GlyphBitmap) -> Result<(u32, u32), AtlasError> {
        let (cell_x, cell_y) = self.geometry.cell_origin(codepoint);
        let (x, y) = match self.placement {
            Placement::Baseline { descent } => (
                i64::from(cell_x) + i64::from(glyph.origin_x()),
                i64::from(cell_y) + i64::from(self.geometry.cell_height)
                    - i64::from(glyph.height())
                    - i64::from(descent)
                    - i64::from(glyph.origin_y()),
            ),
            Placement::TopLeft => (i64::from(cell_x), i64::from(cell_y)),
        };

        let cell_right = cell_x + self.geometry.cell_width;
        if x < i64::from(cell_x) || x + i64::from(glyph.width()) > i64::from(cell_right) {
            return Err(AtlasError::GlyphOutsideCell {
                codepoint,
                x,
                width: glyph.width(),
                height: glyph.height(),
                cell_left: cell_x,
                cell_right,
            });
        }

        let (top, bottom) = match self.placement {
            Placement::Baseline { .. } => (0, self.geometry.height()),
            Placement::TopLeft => (cell_y, cell_y + self.geometry.cell_height),
        };
        if y < i64::from(top) || y + i64::from(glyph.height()) > i64::from(bottom) {
            return Err(AtlasError::GlyphOutsideRows {
                codepoint,
                y,
                width: glyph.width(),
                height: glyph.height(),
                top,
                bottom,
            });
        }

        Ok((x as u32, y as u32))
    }
}

/// Opaque glyph pixels replace the destination; transparent ones leave it.
fn draw_over(canvas: &mut Canvas, x: u32, y: u32, glyph: &GlyphBitmap) {
    for (gx, gy) in glyph.opaque_pixels() {
        canvas.set_opaque(x + gx, y + gy);
    }
}
