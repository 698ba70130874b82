//! Bitmap painter
//!
//! Blends a bound bitmap onto runs of destination pixels, weighted by
//! the coverage bytes a scanline rasterizer produces. Two consumption
//! protocols are exposed: [blend_span] writes a whole run straight into
//! a destination row, [next_pixel] hands out one decoded pixel at a
//! time for callers that composite themselves. Both walk the same
//! cursor and share the same decode, so they agree pixel for pixel.
//!
//! [blend_span]: BitmapPainter::blend_span
//! [next_pixel]: BitmapPainter::next_pixel

use crate::bitmap::{unpack_argb8888, PixelFormat, PixelSource, Rect};
use crate::buffer::PIXEL_WIDTH;
use crate::color::Rgba8;
use crate::math::{lerp16, lerp24, lerp8, total_alpha};
use crate::transform::DisplayTransform;

/// Behavior when a scanline starts outside the bitmap rectangle
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum EdgeMode {
    /// Draw nothing for out-of-range scanlines
    Clamp,
    /// Wrap the scanline start position by the bitmap dimensions
    ///
    /// Wrapping happens once per scanline; a span still ends at the
    /// bitmap's right edge rather than wrapping around mid-run.
    Tile,
}

/// Where the scanline cursor currently stands
///
/// Makes a span blend without a successful [BitmapPainter::begin_scanline]
/// a representable state and a checked no-op instead of undefined reads.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
enum Cursor {
    /// No scanline begun since construction or the last rebind
    Unbound,
    /// Positioned on the pixel at this linear index into the bitmap
    Ready(usize),
    /// The scanline lies outside the bitmap rectangle
    OutOfRange,
    /// The bound bitmap has no pixel data
    NoData,
}

/// Blends a bitmap onto scanline spans of a destination surface
///
/// Holds a non-owning view of the bitmap, the alpha configuration and
/// the per-scanline cursor. One instance is not meant to be shared
/// between threads mid-pass; distinct instances are fully independent.
///
///     use spanpaint::{BitmapPainter,DisplayTransform,PixelFormat,PixelSource,Rect};
///
///     let data = [0, 0, 255];                   // one red pixel, stored B,G,R
///     let src = PixelSource::new(PixelFormat::Rgb888, Rect::new(0,0,1,1), &data);
///     let tr = DisplayTransform::identity(1, 1);
///     let mut painter = BitmapPainter::new(src, 255, &tr);
///     let mut row = [0u8; 3];
///     assert!(painter.begin_scanline(0, 0));
///     painter.blend_span(&mut row, 0, &[255]);
///     assert_eq!(row, [0, 0, 255]);
///
#[derive(Debug)]
pub struct BitmapPainter<'a> {
    source: PixelSource<'a>,
    /// The bitmap's rectangle mapped into frame buffer space, cached at bind
    rect: Rect,
    painter_alpha: u8,
    widget_alpha: u8,
    offset_x: i32,
    offset_y: i32,
    edge_mode: EdgeMode,
    cursor: Cursor,
    /// Scanline origin as handed to `begin_scanline`, before offsets
    span_x: i32,
    current_x: i32,
    current_y: i32,
}

impl<'a> BitmapPainter<'a> {
    /// Create a painter over `source` with a constant alpha
    pub fn new(source: PixelSource<'a>, alpha: u8, transform: &DisplayTransform) -> Self {
        let mut painter = BitmapPainter {
            source,
            rect: Rect::default(),
            painter_alpha: alpha,
            widget_alpha: 255,
            offset_x: 0,
            offset_y: 0,
            edge_mode: EdgeMode::Clamp,
            cursor: Cursor::Unbound,
            span_x: 0,
            current_x: 0,
            current_y: 0,
        };
        painter.bind(source, transform);
        painter
    }

    /// Replace the bound bitmap
    ///
    /// Recomputes and caches the frame buffer rectangle and invalidates
    /// any in-flight cursor. Always succeeds; binding a bitmap with an
    /// empty rectangle yields a painter that draws nothing.
    pub fn bind(&mut self, source: PixelSource<'a>, transform: &DisplayTransform) {
        self.source = source;
        self.rect = transform.to_framebuffer(source.rect);
        self.cursor = Cursor::Unbound;
    }

    /// Set the constant alpha applied on top of coverage and widget alpha
    pub fn set_alpha(&mut self, alpha: u8) {
        self.painter_alpha = alpha;
    }
    pub fn alpha(&self) -> u8 {
        self.painter_alpha
    }
    /// Set the owning widget's opacity for the coming render pass
    pub fn set_widget_alpha(&mut self, alpha: u8) {
        self.widget_alpha = alpha;
    }
    /// Set the widget area offset added to every scanline origin
    pub fn set_offset(&mut self, x: i32, y: i32) {
        self.offset_x = x;
        self.offset_y = y;
    }
    pub fn set_edge_mode(&mut self, mode: EdgeMode) {
        self.edge_mode = mode;
    }
    /// The bound bitmap's rectangle in frame buffer space
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Position the cursor for one scanline
    ///
    /// `x`,`y` are the scanline origin in the caller's coordinate frame;
    /// the widget area offset is added before the bounds check. Returns
    /// false when the position falls outside the bitmap rectangle or the
    /// bitmap has no pixel data; the caller must then draw nothing for
    /// this scanline. Either consumption protocol may follow a
    /// successful call.
    pub fn begin_scanline(&mut self, x: i32, y: i32) -> bool {
        self.cursor = Cursor::Unbound;
        self.span_x = x;
        self.current_x = x + self.offset_x;
        self.current_y = y + self.offset_y;
        if self.edge_mode == EdgeMode::Tile && !self.rect.is_empty() {
            self.current_x = self.current_x.rem_euclid(self.rect.width);
            self.current_y = self.current_y.rem_euclid(self.rect.height);
        }
        if self.current_x < 0 || self.current_x >= self.rect.width
            || self.current_y < 0 || self.current_y >= self.rect.height {
            self.cursor = Cursor::OutOfRange;
            return false;
        }
        if self.source.data.is_empty() {
            self.cursor = Cursor::NoData;
            return false;
        }
        self.cursor = Cursor::Ready((self.current_x + self.current_y * self.rect.width) as usize);
        true
    }

    /// Blend one span of `covers.len()` pixels into a destination row
    ///
    /// `dst` is a destination row of `PIXEL_WIDTH` byte pixels; writing
    /// starts at pixel `x + x_adjust`, with `x` remembered from
    /// [begin_scanline]. One coverage byte and one source pixel are
    /// consumed per destination pixel, left to right. The run is clipped
    /// so it never reads past the bitmap's right edge. Does nothing
    /// unless the last [begin_scanline] succeeded.
    ///
    /// [begin_scanline]: BitmapPainter::begin_scanline
    pub fn blend_span(&self, dst: &mut [u8], x_adjust: i32, covers: &[u8]) {
        let index = match self.cursor {
            Cursor::Ready(index) => index,
            _ => return,
        };
        let count = covers.len().min((self.rect.width - self.current_x) as usize);
        if count == 0 {
            return;
        }
        let covers = &covers[.. count];
        let start = ((self.span_x + x_adjust) as usize) * PIXEL_WIDTH;
        let dst = &mut dst[start .. start + count * PIXEL_WIDTH];
        let total = u32::from(total_alpha(self.widget_alpha, self.painter_alpha));
        match self.source.format {
            PixelFormat::Rgb888 => {
                let src = &self.source.data[index * 3 .. (index + count) * 3];
                if total == 255 {
                    blend_rgb888(dst, src, covers);
                } else {
                    blend_rgb888_scaled(dst, src, covers, total);
                }
            }
            PixelFormat::Argb8888 => {
                let src = &self.source.data[index * 4 .. (index + count) * 4];
                if total == 255 {
                    blend_argb8888(dst, src, covers);
                } else {
                    blend_argb8888_scaled(dst, src, covers, total);
                }
            }
        }
    }

    /// Pull one decoded pixel and advance the cursor
    ///
    /// Returns the channels of the pixel under the cursor with the
    /// painter alpha already multiplied in, or None at the end of the
    /// run. Coverage and widget alpha are not applied; callers of this
    /// protocol composite for themselves.
    pub fn next_pixel(&mut self) -> Option<Rgba8> {
        let index = match self.cursor {
            Cursor::Ready(index) => index,
            _ => return None,
        };
        if self.current_x >= self.rect.width {
            return None;
        }
        let mut px = self.source.pixel(index);
        self.cursor = Cursor::Ready(index + 1);
        self.current_x += 1;
        if self.painter_alpha < 255 {
            px.a = ((u16::from(px.a) * u16::from(self.painter_alpha)) / 255) as u8;
        }
        Some(px)
    }
}

/// Rgb888 source at full total alpha: coverage alone weights the blend
fn blend_rgb888(dst: &mut [u8], src: &[u8], covers: &[u8]) {
    for ((d, s), &cover) in dst.chunks_exact_mut(3).zip(src.chunks_exact(3)).zip(covers) {
        if cover == 255 {
            // Solid pixel
            d.copy_from_slice(s);
        } else {
            let cover = u32::from(cover);
            d[0] = lerp8(d[0], s[0], cover);
            d[1] = lerp8(d[1], s[1], cover);
            d[2] = lerp8(d[2], s[2], cover);
        }
    }
}

/// Rgb888 source with total alpha below 255
fn blend_rgb888_scaled(dst: &mut [u8], src: &[u8], covers: &[u8], total: u32) {
    for ((d, s), &cover) in dst.chunks_exact_mut(3).zip(src.chunks_exact(3)).zip(covers) {
        let alpha = u32::from(cover) * total;
        d[0] = lerp16(d[0], s[0], alpha);
        d[1] = lerp16(d[1], s[1], alpha);
        d[2] = lerp16(d[2], s[2], alpha);
    }
}

/// Argb8888 source at full total alpha: coverage times per-pixel alpha
fn blend_argb8888(dst: &mut [u8], src: &[u8], covers: &[u8]) {
    for ((d, s), &cover) in dst.chunks_exact_mut(3).zip(src.chunks_exact(4)).zip(covers) {
        let px = unpack_argb8888([s[0], s[1], s[2], s[3]]);
        let alpha = u32::from(cover) * u32::from(px.a);
        if alpha == 255 * 255 {
            // Solid pixel
            d[0] = px.b;
            d[1] = px.g;
            d[2] = px.r;
        } else {
            d[0] = lerp16(d[0], px.b, alpha);
            d[1] = lerp16(d[1], px.g, alpha);
            d[2] = lerp16(d[2], px.r, alpha);
        }
    }
}

/// Argb8888 source with total alpha below 255
fn blend_argb8888_scaled(dst: &mut [u8], src: &[u8], covers: &[u8], total: u32) {
    for ((d, s), &cover) in dst.chunks_exact_mut(3).zip(src.chunks_exact(4)).zip(covers) {
        let px = unpack_argb8888([s[0], s[1], s[2], s[3]]);
        let alpha = u32::from(cover) * u32::from(px.a) * total;
        if alpha == 0 {
            // Fully transparent, skip without touching the destination
            continue;
        }
        d[0] = lerp24(d[0], px.b, alpha);
        d[1] = lerp24(d[1], px.g, alpha);
        d[2] = lerp24(d[2], px.r, alpha);
    }
}
