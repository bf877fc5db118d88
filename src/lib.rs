//! bitmapfont-atlas: builds a 256x256-cell monochrome glyph atlas.
//!
//! The pipeline runs once, single-threaded:
//! 1. [`generate::load_providers`] reads the fixed, proportional and
//!    supplementary BDF fonts
//! 2. [`atlas::AtlasBuilder`] asks the glyph resolver for every BMP code
//!    point and composites the glyphs into their cells
//! 3. [`packer`] serializes the canvas (RGBA8 or 1-bit alpha) and gzips it
//!    into the output file

pub mod atlas;
pub mod cli;
pub mod debug;
pub mod error;
pub mod generate;
pub mod packer;

pub use atlas::{Atlas, AtlasBuilder, AtlasGeometry, Canvas, Placement};
pub use error::AtlasError;
pub use generate::{GenerateReport, run};
