//! Typed error variants for the bitmapfont-config crate.
//!
//! Callers using `anyhow` get these coerced automatically; library consumers
//! can match on the specific failure instead.

use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("I/O error reading config '{path}': {source}")]
    Io {
        /// Path of the config file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid TOML or unknown values.
    #[error("TOML parse error in config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("invalid config: {0}")]
    Validation(String),
}
