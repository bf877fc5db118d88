//! Parser for BDF (Glyph Bitmap Distribution Format) fonts.
//!
//! Only the subset needed to extract monochrome glyphs is understood:
//! `FONT`, `SIZE`, `FONTBOUNDINGBOX`, the `PIXEL_SIZE` property, and the
//! per-glyph `ENCODING`, `BBX` and `BITMAP` records. Everything else
//! (metrics, other properties, `SWIDTH`/`DWIDTH`) is skipped.

use std::iter::Enumerate;
use std::str::Lines;

use crate::error::BdfError;
use crate::glyph::GlyphBitmap;

/// Largest accepted `BBX` width or height.
const MAX_GLYPH_SIDE: i32 = u16::MAX as i32;

/// A parsed BDF font.
#[derive(Debug, Clone)]
pub struct BdfFont {
    /// XLFD name from the `FONT` line, if any
    pub name: Option<String>,
    /// Pixel size from `PIXEL_SIZE`, or derived from `SIZE`
    pub pixel_size: u32,
    /// Encoded glyphs in file order
    pub glyphs: Vec<(u32, GlyphBitmap)>,
}

/// Line cursor that skips blank lines and comments and tracks line numbers.
struct Cursor<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            lines: src.lines().enumerate(),
        }
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        for (idx, raw) in self.lines.by_ref() {
            let line = raw.trim();
            if line.is_empty() || keyword(line).0 == "COMMENT" {
                continue;
            }
            return Some((idx + 1, line));
        }
        None
    }
}

fn keyword(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((kw, rest)) => (kw, rest.trim()),
        None => (line, ""),
    }
}

fn syntax(line: usize, message: impl Into<String>) -> BdfError {
    BdfError::Syntax {
        line,
        message: message.into(),
    }
}

fn parse_ints<const N: usize>(line: usize, rest: &str) -> Result<[i32; N], BdfError> {
    let mut out = [0i32; N];
    let mut fields = rest.split_whitespace();
    for slot in &mut out {
        let field = fields
            .next()
            .ok_or_else(|| syntax(line, format!("expected {N} integers, got '{rest}'")))?;
        *slot = field
            .parse()
            .map_err(|_| syntax(line, format!("invalid integer '{field}'")))?;
    }
    Ok(out)
}

/// Parse BDF source text.
pub fn parse(src: &str) -> Result<BdfFont, BdfError> {
    let mut cursor = Cursor::new(src);
    match cursor.next_line() {
        Some((_, line)) if keyword(line).0 == "STARTFONT" => {}
        Some((n, _)) => return Err(syntax(n, "expected STARTFONT")),
        None => return Err(BdfError::Missing("STARTFONT")),
    }

    let mut name = None;
    let mut pixel_size = None;
    let mut point_size = None;
    let mut bounding_box = None;
    let mut glyphs = Vec::new();
    let mut skipped = 0usize;
    let mut ended = false;

    while let Some((n, line)) = cursor.next_line() {
        let (kw, rest) = keyword(line);
        match kw {
            "FONT" => name = Some(rest.to_string()),
            "SIZE" => point_size = Some((n, parse_ints::<3>(n, rest)?)),
            "FONTBOUNDINGBOX" => bounding_box = Some(parse_ints::<4>(n, rest)?),
            "PIXEL_SIZE" => {
                let [size] = parse_ints::<1>(n, rest)?;
                if size <= 0 {
                    return Err(syntax(n, format!("invalid PIXEL_SIZE {size}")));
                }
                pixel_size = Some(size as u32);
            }
            "STARTCHAR" => match parse_char(&mut cursor, n, rest, bounding_box)? {
                Some(entry) => glyphs.push(entry),
                None => skipped += 1,
            },
            "ENDFONT" => {
                ended = true;
                break;
            }
            _ => {}
        }
    }

    if !ended {
        return Err(BdfError::Missing("ENDFONT"));
    }

    let pixel_size = match (pixel_size, point_size) {
        (Some(size), _) => size,
        (None, Some((n, [points, _, yres]))) => pixels_from_points(n, points, yres)?,
        (None, None) => return Err(BdfError::Missing("PIXEL_SIZE or SIZE")),
    };

    log::debug!(
        "Parsed BDF font {:?}: {} glyphs at {}px ({} unencoded skipped)",
        name,
        glyphs.len(),
        pixel_size,
        skipped
    );

    Ok(BdfFont {
        name,
        pixel_size,
        glyphs,
    })
}

/// Pixel size for a `SIZE <points> <xres> <yres>` line, rounded to nearest.
fn pixels_from_points(line: usize, points: i32, yres: i32) -> Result<u32, BdfError> {
    let pixels = if yres > 0 {
        points
            .checked_mul(yres)
            .and_then(|dots| dots.checked_add(36))
            .map(|dots| dots / 72)
            .ok_or_else(|| syntax(line, format!("SIZE {points} at {yres} dpi overflows")))?
    } else {
        points
    };
    u32::try_from(pixels)
        .ok()
        .filter(|p| *p > 0)
        .ok_or_else(|| syntax(line, format!("invalid SIZE {points} at {yres} dpi")))
}

/// Parse one `STARTCHAR` .. `ENDCHAR` record.
///
/// Returns `None` for glyphs with a negative (non-standard) encoding.
fn parse_char(
    cursor: &mut Cursor<'_>,
    start_line: usize,
    glyph_name: &str,
    default_bbox: Option<[i32; 4]>,
) -> Result<Option<(u32, GlyphBitmap)>, BdfError> {
    let mut encoding = None;
    let mut bbx = default_bbox;
    let mut glyph = None;

    loop {
        let Some((n, line)) = cursor.next_line() else {
            return Err(syntax(
                start_line,
                format!("glyph '{glyph_name}' has no ENDCHAR"),
            ));
        };
        let (kw, rest) = keyword(line);
        match kw {
            "ENCODING" => encoding = Some(parse_ints::<1>(n, rest)?[0]),
            "BBX" => bbx = Some(parse_ints::<4>(n, rest)?),
            "BITMAP" => {
                let [width, height, x, y] = bbx.ok_or_else(|| {
                    syntax(n, format!("glyph '{glyph_name}' has BITMAP before BBX"))
                })?;
                if width < 0 || height < 0 {
                    return Err(syntax(n, format!("negative BBX size {width}x{height}")));
                }
                if width > MAX_GLYPH_SIDE || height > MAX_GLYPH_SIDE {
                    return Err(syntax(
                        n,
                        format!("BBX size {width}x{height} exceeds {MAX_GLYPH_SIDE} pixels"),
                    ));
                }
                let bitmap = read_bitmap(cursor, width as u32, height as u32, n)?;
                glyph = Some(bitmap.with_origin(x, y));
            }
            "ENDCHAR" => break,
            _ => {}
        }
    }

    let encoding = encoding.ok_or_else(|| {
        syntax(start_line, format!("glyph '{glyph_name}' has no ENCODING"))
    })?;
    let glyph = glyph
        .ok_or_else(|| syntax(start_line, format!("glyph '{glyph_name}' has no BITMAP")))?;

    if encoding < 0 {
        log::trace!("Skipping unencoded glyph '{}'", glyph_name);
        return Ok(None);
    }
    Ok(Some((encoding as u32, glyph)))
}

fn read_bitmap(
    cursor: &mut Cursor<'_>,
    width: u32,
    height: u32,
    line: usize,
) -> Result<GlyphBitmap, BdfError> {
    let row_bytes = width.div_ceil(8) as usize;
    // Grown per decoded row, so a bogus BBX height cannot reserve memory
    // the file never backs.
    let mut pixels = Vec::new();

    for _ in 0..height {
        let (n, row) = cursor
            .next_line()
            .ok_or_else(|| syntax(line, "bitmap ended before all rows were read"))?;
        let bytes = decode_hex_row(n, row, row_bytes)?;
        pixels.reserve(width as usize);
        for x in 0..width {
            let byte = bytes[(x / 8) as usize];
            pixels.push(byte & (0x80 >> (x % 8)) != 0);
        }
    }

    GlyphBitmap::new(width, height, 0, 0, pixels)
        .ok_or_else(|| syntax(line, "bitmap size does not match BBX"))
}

fn decode_hex_row(line: usize, row: &str, row_bytes: usize) -> Result<Vec<u8>, BdfError> {
    if !row.is_ascii() || row.len() < row_bytes * 2 {
        return Err(syntax(
            line,
            format!("bitmap row '{row}' is shorter than {row_bytes} bytes"),
        ));
    }
    (0..row_bytes)
        .map(|i| {
            u8::from_str_radix(&row[i * 2..i * 2 + 2], 16)
                .map_err(|_| syntax(line, format!("invalid hex in bitmap row '{row}'")))
        })
        .collect()
}
