//! Command-line interface for bitmapfont-gen.
//!
//! Flags override values from the optional `--config` TOML file.

use std::path::PathBuf;

use bitmapfont_config::{Config, ConfigError, LogLevel, Variant};
use clap::Parser;

/// bitmapfont-gen - builds the gzip-compressed bitmap font atlas
#[derive(Parser, Debug)]
#[command(name = "bitmapfont-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output file for the compressed atlas (required here or in the config)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Prefer east Asia punctuations for ambiguous-width characters
    #[arg(long)]
    pub eastasia: bool,

    /// Atlas variant: "legacy" (RGBA8, baseline layout) or "extended" (1-bit)
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<Variant>,

    /// BDF file for the fixed-width provider
    #[arg(long, value_name = "BDF")]
    pub fixed: Option<PathBuf>,

    /// BDF file for the proportional provider
    #[arg(long, value_name = "BDF")]
    pub proportional: Option<PathBuf>,

    /// BDF file for the supplementary (Hangul/CJK) provider
    #[arg(long, value_name = "BDF")]
    pub supplementary: Option<PathBuf>,

    /// TOML config file with defaults for all of the above
    #[arg(long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Also write the atlas as a PNG image
    #[arg(long, value_name = "PNG")]
    pub preview: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Runtime options passed from CLI to the generator
#[derive(Clone, Debug)]
pub struct RuntimeOptions {
    /// Merged configuration
    pub config: Config,
    /// Log level given on the command line, if any
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Merge flags over the config file (or defaults) and validate.
    pub fn into_options(self) -> Result<RuntimeOptions, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if self.eastasia {
            config.prefer_east_asia = true;
        }
        if self.fixed.is_some() {
            config.fonts.fixed = self.fixed;
        }
        if self.proportional.is_some() {
            config.fonts.proportional = self.proportional;
        }
        if self.supplementary.is_some() {
            config.fonts.supplementary = self.supplementary;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        if self.preview.is_some() {
            config.preview = self.preview;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }

        if config.output.is_none() {
            return Err(ConfigError::Validation(
                "no output path: pass --output or set `output` in the config file".to_string(),
            ));
        }
        config.validate()?;

        Ok(RuntimeOptions {
            config,
            log_level: self.log_level,
        })
    }
}

/// Parse process arguments into runtime options.
///
/// Clap handles `--help`, `--version` and malformed flags itself and exits.
pub fn process_cli() -> Result<RuntimeOptions, ConfigError> {
    Cli::parse().into_options()
}
