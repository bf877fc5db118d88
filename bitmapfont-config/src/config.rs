//! The [`Config`] struct and its TOML loading and validation.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! standard 12x16 extended atlas. Command-line flags are applied on top by
//! the binary after loading.

use crate::error::ConfigError;
use crate::types::{LogLevel, PackFormat, Variant};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted cell width or height; keeps the 256x256-cell canvas
/// within `u32` pixel coordinates.
pub const MAX_CELL_SIZE: u32 = 256;

/// Paths to the BDF files backing each glyph provider.
///
/// A missing path means the provider is empty; the legacy variant never
/// needs a fixed-width font.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSources {
    #[serde(default)]
    pub fixed: Option<PathBuf>,
    #[serde(default)]
    pub proportional: Option<PathBuf>,
    #[serde(default)]
    pub supplementary: Option<PathBuf>,
}

/// Atlas generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Layout and packing variant
    #[serde(default)]
    pub variant: Variant,

    /// Ambiguous-width code points prefer the proportional font
    #[serde(default)]
    pub prefer_east_asia: bool,

    /// Pixel size requested from providers
    #[serde(default = "crate::defaults::glyph_size")]
    pub glyph_size: u32,

    /// Cell width in pixels
    #[serde(default = "crate::defaults::cell_width")]
    pub cell_width: u32,

    /// Cell height in pixels
    #[serde(default = "crate::defaults::cell_height")]
    pub cell_height: u32,

    /// Baseline distance from the cell bottom
    #[serde(default = "crate::defaults::descent")]
    pub descent: u32,

    /// Gzip compression level (0-9)
    #[serde(default = "crate::defaults::compression_level")]
    pub compression_level: u32,

    #[serde(default)]
    pub fonts: FontSources,

    /// Destination of the compressed payload
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Optional PNG rendering of the atlas
    #[serde(default)]
    pub preview: Option<PathBuf>,

    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            prefer_east_asia: false,
            glyph_size: crate::defaults::glyph_size(),
            cell_width: crate::defaults::cell_width(),
            cell_height: crate::defaults::cell_height(),
            descent: crate::defaults::descent(),
            compression_level: crate::defaults::compression_level(),
            fonts: FontSources::default(),
            output: None,
            preview: None,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;

        // Relative font paths are resolved against the config file's directory.
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.with_base_dir(base))
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.glyph_size == 0 {
            return Err(ConfigError::Validation(
                "glyph_size must be greater than zero".to_string(),
            ));
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(ConfigError::Validation(format!(
                "cell size must be non-zero, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        if self.cell_width > MAX_CELL_SIZE || self.cell_height > MAX_CELL_SIZE {
            return Err(ConfigError::Validation(format!(
                "cell size {}x{} exceeds {MAX_CELL_SIZE}x{MAX_CELL_SIZE}",
                self.cell_width, self.cell_height
            )));
        }
        if self.descent >= self.cell_height {
            return Err(ConfigError::Validation(format!(
                "descent {} must be smaller than cell_height {}",
                self.descent, self.cell_height
            )));
        }
        if self.compression_level > 9 {
            return Err(ConfigError::Validation(format!(
                "compression_level must be in 0..=9, got {}",
                self.compression_level
            )));
        }
        Ok(())
    }

    /// Packing format implied by the variant.
    pub fn pack_format(&self) -> PackFormat {
        self.variant.pack_format()
    }

    fn with_base_dir(mut self, base: &Path) -> Self {
        let resolve = |p: Option<PathBuf>| {
            p.map(|p| if p.is_relative() { base.join(p) } else { p })
        };
        self.fonts.fixed = resolve(self.fonts.fixed.take());
        self.fonts.proportional = resolve(self.fonts.proportional.take());
        self.fonts.supplementary = resolve(self.fonts.supplementary.take());
        self
    }
}
