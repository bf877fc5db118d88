//! Configuration system for the bitmapfont atlas generator.
//!
//! This crate provides configuration loading, validation, and default values
//! for atlas generation. It includes:
//!
//! - The [`Config`] struct with per-field defaults
//! - Layout variant, packing format and log level types
//! - TOML file loading with typed errors

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::{Config, FontSources};
pub use error::ConfigError;
pub use types::{LogLevel, PackFormat, Variant};
