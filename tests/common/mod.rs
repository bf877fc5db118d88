//! Shared integration test helpers for bitmapfont-atlas.
//!
//! Include with `mod common;` at the top of each test file. The
//! `#[allow(dead_code)]` suppresses warnings when a file uses only a subset.

#![allow(dead_code)]

use bitmapfont_config::{Config, Variant};
use flate2::read::GzDecoder;
use std::fmt::Write as _;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A glyph for [`write_bdf`]: code point, BBX and hex bitmap rows.
pub struct TestGlyph {
    pub codepoint: u32,
    pub bbx: (u32, u32, i32, i32),
    pub rows: Vec<&'static str>,
}

impl TestGlyph {
    /// A solid `width` x `height` box with origin (`x`, `y`).
    pub fn solid(codepoint: u32, width: u32, height: u32, x: i32, y: i32) -> Self {
        let row = match width {
            1..=8 => ["80", "C0", "E0", "F0", "F8", "FC", "FE", "FF"][width as usize - 1],
            12 => "FFF0",
            16 => "FFFF",
            _ => panic!("unsupported test glyph width {width}"),
        };
        Self {
            codepoint,
            bbx: (width, height, x, y),
            rows: vec![row; height as usize],
        }
    }
}

/// Write a minimal BDF font at `pixel_size` into `dir/name`.
pub fn write_bdf(dir: &Path, name: &str, pixel_size: u32, glyphs: &[TestGlyph]) -> PathBuf {
    let mut src = String::new();
    src.push_str("STARTFONT 2.1\n");
    let _ = writeln!(src, "FONT -test-{name}-medium-r-normal--{pixel_size}-0-75-75-C-0-ISO10646-1");
    let _ = writeln!(src, "SIZE {pixel_size} 75 75");
    src.push_str("FONTBOUNDINGBOX 16 16 0 -4\n");
    src.push_str("STARTPROPERTIES 1\n");
    let _ = writeln!(src, "PIXEL_SIZE {pixel_size}");
    src.push_str("ENDPROPERTIES\n");
    let _ = writeln!(src, "CHARS {}", glyphs.len());
    for glyph in glyphs {
        let (w, h, x, y) = glyph.bbx;
        let _ = writeln!(src, "STARTCHAR uni{:04X}", glyph.codepoint);
        let _ = writeln!(src, "ENCODING {}", glyph.codepoint);
        let _ = writeln!(src, "BBX {w} {h} {x} {y}");
        src.push_str("BITMAP\n");
        for row in &glyph.rows {
            src.push_str(row);
            src.push('\n');
        }
        src.push_str("ENDCHAR\n");
    }
    src.push_str("ENDFONT\n");

    let path = dir.join(name);
    fs::write(&path, src).expect("Failed to write BDF");
    path
}

/// An extended-variant config writing into a fresh temp dir.
///
/// The `TempDir` must be kept alive while the output is in use.
pub fn extended_config() -> (Config, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        variant: Variant::Extended,
        output: Some(temp_dir.path().join("atlas.bin")),
        ..Config::default()
    };
    (config, temp_dir)
}

/// Decompress a gzip file fully.
pub fn gunzip_file(path: &Path) -> Vec<u8> {
    let file = fs::File::open(path).expect("Failed to open compressed output");
    let mut bytes = Vec::new();
    GzDecoder::new(file)
        .read_to_end(&mut bytes)
        .expect("Output is not valid gzip");
    bytes
}

/// Whether bit (`x`, `y`) is set in a 1-bit MSB-first payload of `width`.
pub fn bit_at(payload: &[u8], width: u32, x: u32, y: u32) -> bool {
    let idx = y as usize * width as usize + x as usize;
    payload[idx / 8] & (0x80u8 >> (idx % 8)) != 0
}
