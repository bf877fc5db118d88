//! Typed error types for atlas building and output.
//!
//! The binary wraps these in `anyhow` with context; library callers can
//! match on the variant.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while compositing, packing or writing the atlas.
#[derive(Debug, Error)]
pub enum AtlasError {
    // -----------------------------------------------------------------------
    // Compositing
    // -----------------------------------------------------------------------
    /// A glyph would spill into a neighbouring cell's columns.
    #[error(
        "glyph U+{codepoint:04X} ({width}x{height} at x={x}) leaves its cell columns {cell_left}..{cell_right}"
    )]
    GlyphOutsideCell {
        codepoint: u32,
        x: i64,
        width: u32,
        height: u32,
        cell_left: u32,
        cell_right: u32,
    },

    /// A glyph would be drawn past the vertical limit for its placement.
    #[error("glyph U+{codepoint:04X} ({width}x{height} at y={y}) leaves rows {top}..{bottom}")]
    GlyphOutsideRows {
        codepoint: u32,
        y: i64,
        width: u32,
        height: u32,
        top: u32,
        bottom: u32,
    },

    // -----------------------------------------------------------------------
    // Packing
    // -----------------------------------------------------------------------
    /// The 1-bit packing needs both dimensions to be multiples of 8.
    #[error("cannot bit-pack a {width}x{height} canvas: width and height must be multiples of 8")]
    UnalignedCanvas { width: u32, height: u32 },

    // -----------------------------------------------------------------------
    // Output
    // -----------------------------------------------------------------------
    /// The output file could not be created.
    #[error("failed to create output file '{}': {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The gzip filter could not be set up with the requested level.
    #[error("invalid compression level {0} (expected 0-9)")]
    CompressionLevel(u32),

    /// Writing, finishing or syncing the compressed stream failed.
    #[error("failed to write compressed atlas to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PNG preview could not be encoded or written.
    #[error("failed to write preview '{}': {source}", .path.display())]
    Preview {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
