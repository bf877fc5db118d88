//! Glyph providers and glyph selection for the bitmapfont atlas.
//!
//! This crate provides:
//! - [`GlyphBitmap`], a binary glyph image with an origin offset
//! - A BDF parser that turns font files into immutable [`GlyphTable`]s
//! - [`ProviderSet`], the closed set of fixed, proportional and
//!   supplementary providers
//! - [`GlyphResolver`], which picks exactly one provider per code point
//!
//! # Selection order
//!
//! 1. Box Drawing always comes from the supplementary font
//! 2. Halfwidth Katakana comes from the proportional font (extended only)
//! 3. East Asian Ambiguous code points follow the east-Asia preference
//!    (extended only)
//! 4. Otherwise the first provider that has the glyph wins

pub mod bdf;
pub mod error;
pub mod glyph;
pub mod provider;
pub mod resolver;
pub mod width;

// Re-export main types for convenience
pub use error::{BakeError, BdfError};
pub use glyph::GlyphBitmap;
pub use provider::{GlyphSource, GlyphTable, ProviderKind, ProviderSet};
pub use resolver::{FontType, GlyphResolver, ResolverOptions};
pub use width::{EastAsianWidth, UnicodeWidths, WidthOracle};
