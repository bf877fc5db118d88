//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! [`Config`](crate::Config) fields and by `Config::default`.

/// Pixel size requested from every glyph provider.
pub fn glyph_size() -> u32 {
    12
}

/// Width of one atlas cell in pixels.
pub fn cell_width() -> u32 {
    12
}

/// Height of one atlas cell in pixels.
pub fn cell_height() -> u32 {
    16
}

/// Distance from the cell bottom to the baseline.
pub fn descent() -> u32 {
    4
}

/// Gzip level; 9 is best compression.
pub fn compression_level() -> u32 {
    9
}
