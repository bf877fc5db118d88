//! Compressed output tests against the real filesystem.

mod common;

use bitmapfont_atlas::error::AtlasError;
use bitmapfont_atlas::packer;
use common::gunzip_file;
use tempfile::TempDir;

#[test]
fn test_write_compressed_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("atlas.bin");
    let payload: Vec<u8> = (0..65_536u32).map(|i| (i * 31 % 256) as u8).collect();

    packer::write_compressed(&payload, &path, 9).unwrap();

    assert_eq!(gunzip_file(&path), payload);
    // gzip magic
    let raw = std::fs::read(&path).unwrap();
    assert_eq!(&raw[..2], &[0x1f, 0x8b]);
}

#[test]
fn test_write_compressed_truncates_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("atlas.bin");
    std::fs::write(&path, vec![0xAA; 1 << 16]).unwrap();

    packer::write_compressed(&[1, 2, 3], &path, 6).unwrap();
    assert_eq!(gunzip_file(&path), vec![1, 2, 3]);
}

#[test]
fn test_output_create_failure() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing-dir").join("atlas.bin");

    let err = packer::write_compressed(&[0; 16], &path, 9).unwrap_err();
    assert!(matches!(err, AtlasError::OutputCreate { .. }));
    assert!(err.to_string().contains("missing-dir"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_failure_reports_error_and_keeps_device() {
    let full = std::path::Path::new("/dev/full");
    if !full.exists() {
        return;
    }

    let err = packer::write_compressed(&[0x55; 1 << 16], full, 9).unwrap_err();
    assert!(matches!(err, AtlasError::Write { .. }), "{err}");
    assert!(err.to_string().contains("/dev/full"));
    assert!(full.exists());
}

#[test]
fn test_bad_compression_level_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("atlas.bin");

    let err = packer::write_compressed(&[0; 16], &path, 12).unwrap_err();
    assert!(matches!(err, AtlasError::CompressionLevel(12)));
    assert!(!path.exists());
}
