//! Canvas serialization and compressed output.
//!
//! Two payload layouts are supported:
//! - RGBA8: four bytes per pixel, row-major, each the 16-bit premultiplied
//!   channel shifted down to 8 bits
//! - 1-bit alpha: `width * height / 8` bytes, MSB-first, a bit set for every
//!   pixel with nonzero alpha
//!
//! The payload is written through a gzip encoder into a new file. The
//! encoder is finished (emitting the gzip trailer) before the file is synced
//! and closed; on any failure the partial file is removed.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use image::GrayImage;

use crate::atlas::{Canvas, Rgba16Image};
use crate::error::AtlasError;

/// Serialize `canvas` in the layout matching its format.
pub fn serialize(canvas: &Canvas) -> Result<Vec<u8>, AtlasError> {
    match canvas {
        Canvas::Alpha(image) => pack_alpha_bits(image),
        Canvas::Rgba(image) => Ok(pack_rgba8(image)),
    }
}

/// Pack nonzero alpha into one bit per pixel, MSB-first.
pub fn pack_alpha_bits(image: &GrayImage) -> Result<Vec<u8>, AtlasError> {
    let (width, height) = image.dimensions();
    if width % 8 != 0 || height % 8 != 0 {
        return Err(AtlasError::UnalignedCanvas { width, height });
    }

    let mut bytes = vec![0u8; width as usize * height as usize / 8];
    for (idx, alpha) in image.as_raw().iter().enumerate() {
        if *alpha != 0 {
            bytes[idx / 8] |= 1u8 << (7 - idx % 8);
        }
    }
    Ok(bytes)
}

/// Expand a 1-bit payload back into per-pixel opacity.
pub fn unpack_alpha_bits(bytes: &[u8], width: u32, height: u32) -> Vec<bool> {
    (0..width as usize * height as usize)
        .map(|idx| {
            bytes
                .get(idx / 8)
                .is_some_and(|byte| byte & (1u8 << (7 - idx % 8)) != 0)
        })
        .collect()
}

/// Pack RGBA16 samples to RGBA8 by keeping the high byte of each channel.
pub fn pack_rgba8(image: &Rgba16Image) -> Vec<u8> {
    image
        .as_raw()
        .iter()
        .map(|sample| (sample >> 8) as u8)
        .collect()
}

/// Map a 0-9 level onto a gzip compression setting.
pub fn compression(level: u32) -> Result<Compression, AtlasError> {
    if level > 9 {
        return Err(AtlasError::CompressionLevel(level));
    }
    Ok(Compression::new(level))
}

/// Gzip `bytes` into `sink`, returning the sink once the trailer is written.
pub fn compress_into<W: Write>(sink: W, bytes: &[u8], compression: Compression) -> io::Result<W> {
    let mut encoder = GzEncoder::new(sink, compression);
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Gzip `bytes` into a newly created file at `path`.
pub fn write_compressed(bytes: &[u8], path: &Path, level: u32) -> Result<(), AtlasError> {
    let compression = compression(level)?;
    let file = File::create(path).map_err(|source| AtlasError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })?;

    if let Err(source) = write_gzip_file(file, bytes, compression) {
        remove_partial_output(path);
        return Err(AtlasError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    log::info!("Wrote {} payload bytes to {:?}", bytes.len(), path);
    Ok(())
}

/// Delete a partially written output. Only regular files are removed; a
/// device node or symlink named as the output is left in place.
fn remove_partial_output(path: &Path) {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_file() => {
            if let Err(e) = fs::remove_file(path) {
                log::warn!("Failed to remove partial output {:?}: {}", path, e);
            }
        }
        Ok(_) => log::warn!("Leaving non-regular output {:?} in place", path),
        Err(e) => log::warn!("Cannot inspect partial output {:?}: {}", path, e),
    }
}

fn write_gzip_file(file: File, bytes: &[u8], compression: Compression) -> io::Result<()> {
    let writer = compress_into(BufWriter::new(file), bytes, compression)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

/// Write the canvas as a PNG (or any format `image` infers from the extension).
pub fn write_preview(canvas: &Canvas, path: &Path) -> Result<(), AtlasError> {
    canvas
        .to_image()
        .save(path)
        .map_err(|source| AtlasError::Preview {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Wrote atlas preview to {:?}", path);
    Ok(())
}
