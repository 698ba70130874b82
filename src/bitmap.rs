//! Pixel sources
//!
//! A [PixelSource] is a non-owning view of an already decoded bitmap:
//! a format tag, the bitmap's rectangle and the raw pixel bytes.
//! Decoding compressed image formats happens elsewhere; the compositor
//! only ever sees linearly addressable pixel arrays.

use crate::color::Rgba8;

/// In-memory layout of a decoded bitmap
///
/// A closed set: every consumer matches exhaustively, a new format means
/// a new match arm, never a default fallback.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PixelFormat {
    /// 3 bytes per pixel stored B,G,R, no per-pixel transparency
    Rgb888,
    /// One little-endian 32 bit word per pixel, bits [31:24] alpha,
    /// [23:16] red, [15:8] green, [7:0] blue
    Argb8888,
}

impl PixelFormat {
    /// Stride of a single pixel in bytes
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb888 => 3,
            PixelFormat::Argb8888 => 4,
        }
    }
}

/// Rectangle in pixel coordinates
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create new rectangle
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }
    /// A rectangle containing no pixels
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Unpack one Argb8888 word into channels
///
/// The single decode routine for the 4 channel format; both consumption
/// protocols of the painter go through it so they cannot disagree.
pub fn unpack_argb8888(p: [u8; 4]) -> Rgba8 {
    let word = u32::from_le_bytes(p);
    Rgba8::new((word >> 16) as u8, (word >> 8) as u8, word as u8, (word >> 24) as u8)
}

/// Borrowed view of a decoded bitmap
///
/// The pixel storage is owned externally, by a bitmap cache or static
/// data, and must outlive every painter the view is bound to. An empty
/// `data` slice stands for a bitmap whose pixels are not loaded.
///
///     use spanpaint::{PixelFormat,PixelSource,Rect,Rgba8};
///
///     let data = [10, 20, 30];
///     let src = PixelSource::new(PixelFormat::Rgb888, Rect::new(0,0,1,1), &data);
///     assert_eq!(src.pixel(0), Rgba8::new(30, 20, 10, 255));
///
#[derive(Debug,Copy,Clone)]
pub struct PixelSource<'a> {
    /// Channel layout of `data`
    pub format: PixelFormat,
    /// The bitmap's rectangle in display coordinates
    pub rect: Rect,
    /// Raw pixel bytes, row-major, `bytes_per_pixel()` each
    pub data: &'a [u8],
}

impl<'a> PixelSource<'a> {
    /// Create new pixel source
    pub fn new(format: PixelFormat, rect: Rect, data: &'a [u8]) -> Self {
        PixelSource { format, rect, data }
    }
    /// Decode the pixel at linear index `i`
    ///
    /// Rgb888 carries no transparency, its alpha decodes as 255.
    pub fn pixel(&self, i: usize) -> Rgba8 {
        match self.format {
            PixelFormat::Rgb888 => {
                let p = &self.data[i * 3 .. i * 3 + 3];
                Rgba8::new(p[2], p[1], p[0], 255)
            }
            PixelFormat::Argb8888 => {
                let p = &self.data[i * 4 .. i * 4 + 4];
                unpack_argb8888([p[0], p[1], p[2], p[3]])
            }
        }
    }
}
