//! Enumerations shared by the config file and the command line.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Atlas generation variant.
///
/// `Legacy` places glyphs on a baseline computed from their BDF offsets and
/// packs RGBA8; `Extended` places pre-baked cell bitmaps flush and packs
/// 1-bit alpha. Only `Extended` consults the fixed-width provider and the
/// East Asian width rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Legacy,
    #[default]
    Extended,
}

impl Variant {
    /// Packing format used for this variant's output payload.
    pub fn pack_format(self) -> PackFormat {
        match self {
            Variant::Legacy => PackFormat::Rgba8,
            Variant::Extended => PackFormat::AlphaBits,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Legacy => "legacy",
            Variant::Extended => "extended",
        })
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Variant::Legacy),
            "extended" => Ok(Variant::Extended),
            other => Err(format!(
                "unknown variant '{other}' (expected 'legacy' or 'extended')"
            )),
        }
    }
}

/// Layout of the serialized payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackFormat {
    /// Four bytes per pixel, row-major R, G, B, A.
    Rgba8,
    /// One bit per pixel, MSB-first, set when alpha is nonzero.
    AlphaBits,
}

impl PackFormat {
    /// Payload length in bytes for a `width` x `height` canvas.
    pub fn payload_len(self, width: u32, height: u32) -> usize {
        let pixels = width as usize * height as usize;
        match self {
            PackFormat::Rgba8 => pixels * 4,
            PackFormat::AlphaBits => pixels / 8,
        }
    }
}

/// Log level for diagnostics written to stderr.
///
/// `RUST_LOG` and the `--log-level` CLI flag take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}
