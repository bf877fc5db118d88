//! Typed error types for bitmapfont-glyphs.

use thiserror::Error;

/// Errors produced while reading or parsing a BDF font.
#[derive(Debug, Error)]
pub enum BdfError {
    /// The font file could not be read from disk.
    #[error("failed to read BDF file '{path}': {source}")]
    Io {
        /// Path to the font file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line could not be parsed.
    #[error("BDF syntax error at line {line}: {message}")]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// What was expected.
        message: String,
    },

    /// A required header field never appeared.
    #[error("BDF font is missing {0}")]
    Missing(&'static str),
}

/// A glyph whose ink does not fit the atlas cell it is baked into.
#[derive(Debug, Error)]
#[error(
    "font '{font}' glyph U+{codepoint:04X} ({width}x{height}, origin {origin_x},{origin_y}) \
     loses {clipped} pixels outside its {cell_width}x{cell_height} cell"
)]
pub struct BakeError {
    pub font: String,
    pub codepoint: u32,
    pub width: u32,
    pub height: u32,
    pub origin_x: i32,
    pub origin_y: i32,
    pub clipped: usize,
    pub cell_width: u32,
    pub cell_height: u32,
}
