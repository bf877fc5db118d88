//! The atlas pixel buffer.

use bitmapfont_config::PackFormat;
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgba};

/// 16-bit-per-channel premultiplied RGBA image.
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Opaque white, premultiplied.
const OPAQUE_RGBA16: Rgba<u16> = Rgba([u16::MAX; 4]);

/// Atlas pixels, stored in the shape the packer needs.
#[derive(Debug, Clone)]
pub enum Canvas {
    /// Alpha only; packed to one bit per pixel
    Alpha(GrayImage),
    /// Premultiplied RGBA16; packed to RGBA8
    Rgba(Rgba16Image),
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn new(format: PackFormat, width: u32, height: u32) -> Self {
        match format {
            PackFormat::AlphaBits => Canvas::Alpha(GrayImage::new(width, height)),
            PackFormat::Rgba8 => Canvas::Rgba(Rgba16Image::new(width, height)),
        }
    }

    pub fn format(&self) -> PackFormat {
        match self {
            Canvas::Alpha(_) => PackFormat::AlphaBits,
            Canvas::Rgba(_) => PackFormat::Rgba8,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Canvas::Alpha(image) => image.width(),
            Canvas::Rgba(image) => image.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Canvas::Alpha(image) => image.height(),
            Canvas::Rgba(image) => image.height(),
        }
    }

    /// Whether the pixel at (`x`, `y`) has nonzero alpha.
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        match self {
            Canvas::Alpha(image) => image.get_pixel(x, y).0[0] != 0,
            Canvas::Rgba(image) => image.get_pixel(x, y).0[3] != 0,
        }
    }

    /// Draw an opaque source pixel over the destination.
    pub(crate) fn set_opaque(&mut self, x: u32, y: u32) {
        match self {
            Canvas::Alpha(image) => image.put_pixel(x, y, Luma([u8::MAX])),
            Canvas::Rgba(image) => image.put_pixel(x, y, OPAQUE_RGBA16),
        }
    }

    /// Number of opaque pixels in the rectangle at (`x`, `y`).
    pub fn opaque_count(&self, x: u32, y: u32, width: u32, height: u32) -> usize {
        (y..y + height)
            .flat_map(|py| (x..x + width).map(move |px| (px, py)))
            .filter(|(px, py)| self.is_opaque(*px, *py))
            .count()
    }

    /// The canvas as an encodable image for previews.
    pub fn to_image(&self) -> DynamicImage {
        match self {
            Canvas::Alpha(image) => DynamicImage::ImageLuma8(image.clone()),
            Canvas::Rgba(image) => DynamicImage::ImageRgba16(image.clone()),
        }
    }
}
