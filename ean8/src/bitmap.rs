//! Pixel grids and the plain PBM (`P1`) text container.
//!
//! The container is ASCII: a `P1` magic token, optional `#` comment lines
//! before the dimensions, `width height`, then `width * height`
//! whitespace-separated samples in row-major order.

use std::io::Read;

use crate::error::ParseError;

/// Magic token of the plain (ASCII) PBM format.
pub const MAGIC: &[u8; 2] = b"P1";

/// Binary image with row-major pixel data, 0 = light, 1 = dark.
///
/// One contiguous buffer; rows are `width` pixels apart. Grids produced by
/// [`parse`] or the rasterizer always have `width > 0` and `height > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: usize,
    pub height: usize,
    pub buf: Vec<u8>,
}

impl PixelGrid {
    /// Create a grid filled with light pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buf: vec![0u8; width * height],
        }
    }

    /// Get the pixel value at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.buf[y * self.width + x]
    }

    /// Set the pixel value at (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, val: u8) {
        self.buf[y * self.width + x] = val;
    }

    /// Borrow row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.buf[start..start + self.width]
    }
}

/// Parse a plain PBM byte slice into a pixel grid.
///
/// Nonzero samples are stored as dark (1), zero as light (0). No partial
/// grid escapes an error: the buffer is only handed out on full success.
pub fn parse(bytes: &[u8]) -> Result<PixelGrid, ParseError> {
    let mut cur = Cursor::new(bytes);

    cur.skip_whitespace();
    if cur.take(2) != Some(&MAGIC[..]) {
        return Err(ParseError::BadMagic);
    }

    cur.skip_whitespace_and_comments();
    let width = cur.next_int().ok_or(ParseError::BadDimensions)?;
    let height = cur.next_int().ok_or(ParseError::BadDimensions)?;
    if width <= 0 || height <= 0 {
        return Err(ParseError::BadDimensions);
    }
    let (width, height) = (width as usize, height as usize);

    let expected = width * height;
    let mut buf = Vec::with_capacity(expected);
    for got in 0..expected {
        let sample = cur
            .next_int()
            .ok_or(ParseError::Truncated { expected, got })?;
        buf.push(u8::from(sample != 0));
    }

    Ok(PixelGrid { width, height, buf })
}

/// Parse a plain PBM stream; read failures surface as [`ParseError::Io`].
pub fn from_reader(mut reader: impl Read) -> Result<PixelGrid, ParseError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse(&bytes)
}

/// Serialize a pixel grid as plain PBM, one image row per text line.
pub fn serialize(grid: &PixelGrid) -> Vec<u8> {
    // "0 1 ..." rows: 2 bytes per pixel, plus header slack.
    let mut out = Vec::with_capacity(grid.buf.len() * 2 + 32);
    out.extend_from_slice(MAGIC);
    out.push(b'\n');
    out.extend_from_slice(format!("{} {}\n", grid.width, grid.height).as_bytes());
    for y in 0..grid.height {
        for (x, &px) in grid.row(y).iter().enumerate() {
            if x > 0 {
                out.push(b' ');
            }
            out.push(b'0' + px);
        }
        out.push(b'\n');
    }
    out
}

/// Byte cursor over the ASCII container.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let slice = self.bytes.get(self.pos..self.pos + n)?;
        self.pos += n;
        Some(slice)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Skip whitespace and `#` comment lines (each consumed through its
    /// newline). Comments are only legal between the magic and the
    /// dimensions.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'#') {
                return;
            }
            while let Some(b) = self.peek() {
                self.pos += 1;
                if b == b'\n' {
                    break;
                }
            }
        }
    }

    /// Read the next whitespace-separated token as a signed integer.
    fn next_int(&mut self) -> Option<i64> {
        self.skip_whitespace();
        let start = self.pos;
        if self.peek() == Some(b'-') || self.peek() == Some(b'+') {
            self.pos += 1;
        }
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        let token = &self.bytes[start..self.pos];
        // A bare sign, an empty token, or a token running into non-digit
        // garbage all fail the read.
        if let Some(b) = self.peek() {
            if !b.is_ascii_whitespace() {
                return None;
            }
        }
        std::str::from_utf8(token).ok()?.parse().ok()
    }
}
