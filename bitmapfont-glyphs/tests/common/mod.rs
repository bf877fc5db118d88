//! Shared helpers for bitmapfont-glyphs integration tests.

#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A glyph definition for [`bdf_source`]: code point, BBX, hex rows.
pub struct TestGlyph {
    pub codepoint: i32,
    pub bbx: (u32, u32, i32, i32),
    pub rows: Vec<&'static str>,
}

/// Render a minimal BDF font at `pixel_size` containing `glyphs`.
pub fn bdf_source(pixel_size: u32, glyphs: &[TestGlyph]) -> String {
    let mut src = String::new();
    src.push_str("STARTFONT 2.1\n");
    src.push_str("FONT -test-glyphs-medium-r-normal--12-120-75-75-C-60-ISO10646-1\n");
    let _ = writeln!(src, "SIZE {pixel_size} 75 75");
    src.push_str("FONTBOUNDINGBOX 12 16 0 -4\n");
    src.push_str("STARTPROPERTIES 1\n");
    let _ = writeln!(src, "PIXEL_SIZE {pixel_size}");
    src.push_str("ENDPROPERTIES\n");
    let _ = writeln!(src, "CHARS {}", glyphs.len());
    for glyph in glyphs {
        let (w, h, x, y) = glyph.bbx;
        let _ = writeln!(src, "STARTCHAR U+{:04X}", glyph.codepoint);
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
    src
}

/// Write `contents` to `name` inside a fresh temp dir.
///
/// The `TempDir` must be kept alive while the file is in use.
pub fn write_temp_file(name: &str, contents: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (path, temp_dir)
}
