//! Binary glyph bitmaps.

/// A rectangular, binary glyph image.
///
/// The origin is the offset of the bitmap's bottom-left corner from the
/// glyph's nominal position (BDF `BBX` x/y offsets). Pixels are stored
/// row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: u32,
    height: u32,
    origin_x: i32,
    origin_y: i32,
    pixels: Vec<bool>,
}

impl GlyphBitmap {
    /// Create a bitmap from row-major pixels.
    ///
    /// # Returns
    /// `None` if `pixels.len()` is not `width * height`.
    pub fn new(
        width: u32,
        height: u32,
        origin_x: i32,
        origin_y: i32,
        pixels: Vec<bool>,
    ) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            origin_x,
            origin_y,
            pixels,
        })
    }

    /// A fully opaque block with a zero origin.
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            origin_x: 0,
            origin_y: 0,
            pixels: vec![true; width as usize * height as usize],
        }
    }

    /// Build a bitmap from text rows where `#` marks an opaque pixel.
    ///
    /// Rows shorter than the longest row are padded with transparent pixels.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut pixels = Vec::with_capacity(width * rows.len());
        for row in rows {
            let mut count = 0;
            for ch in row.chars() {
                pixels.push(ch == '#');
                count += 1;
            }
            pixels.extend(std::iter::repeat_n(false, width - count));
        }
        Self {
            width: width as u32,
            height: rows.len() as u32,
            origin_x: 0,
            origin_y: 0,
            pixels,
        }
    }

    /// Return the same bitmap with a different origin offset.
    pub fn with_origin(mut self, origin_x: i32, origin_y: i32) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn origin_x(&self) -> i32 {
        self.origin_x
    }

    pub fn origin_y(&self) -> i32 {
        self.origin_y
    }

    /// Whether the pixel at (`x`, `y`) is set. Out-of-range reads are transparent.
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    /// Iterate over the coordinates of all opaque pixels.
    pub fn opaque_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(i, _)| (i as u32 % width, i as u32 / width))
    }

    /// Number of opaque pixels.
    pub fn ink(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }

    /// Render this glyph into a `cell_width` x `cell_height` bitmap.
    ///
    /// The glyph's bottom edge sits `descent + origin_y` pixels above the
    /// cell bottom and its left edge `origin_x` pixels from the cell's left.
    /// The result has a zero origin and can be placed flush at the top-left
    /// of an atlas cell. Returns the number of opaque pixels that would land
    /// outside the cell as the error; transparent padding may overhang.
    pub fn baked(
        &self,
        cell_width: u32,
        cell_height: u32,
        descent: u32,
    ) -> Result<GlyphBitmap, usize> {
        let dx = i64::from(self.origin_x);
        let dy = i64::from(cell_height) - i64::from(self.height) - i64::from(descent)
            - i64::from(self.origin_y);

        let mut pixels = vec![false; cell_width as usize * cell_height as usize];
        let mut clipped = 0usize;
        for (x, y) in self.opaque_pixels() {
            let tx = dx + i64::from(x);
            let ty = dy + i64::from(y);
            if (0..i64::from(cell_width)).contains(&tx) && (0..i64::from(cell_height)).contains(&ty)
            {
                pixels[(ty as usize) * cell_width as usize + tx as usize] = true;
            } else {
                clipped += 1;
            }
        }
        if clipped > 0 {
            return Err(clipped);
        }

        Ok(GlyphBitmap {
            width: cell_width,
            height: cell_height,
            origin_x: 0,
            origin_y: 0,
            pixels,
        })
    }
}
