//! Fixed point blend arithmetic
//!
//! All blending is integer only. Each helper computes
//! `dst + ((src - dst) * alpha) >> shift` with a signed intermediate
//! product and an arithmetic shift, then truncates the sum to 8 bits.
//! The truncation is part of the pixel format contract: results are
//! bit-for-bit stable across platforms and must not be rounded.

/// Compose the widget and painter alpha into a span's total alpha
///
/// Both inputs are 0..=255, so the product divided by 255 is as well.
pub fn total_alpha(widget_alpha: u8, painter_alpha: u8) -> u8 {
    ((u32::from(widget_alpha) * u32::from(painter_alpha)) / 255) as u8
}

/// Interpolate a channel with an 8 bit weight, typically a coverage byte
pub fn lerp8(dst: u8, src: u8, alpha: u32) -> u8 {
    lerp_shift(dst, src, alpha, 8)
}

/// Interpolate a channel with a 16 bit weight, 0..=65025
///
/// The weight is a product of two 8 bit factors: coverage times either a
/// per-pixel alpha or a total alpha.
pub fn lerp16(dst: u8, src: u8, alpha: u32) -> u8 {
    lerp_shift(dst, src, alpha, 16)
}

/// Interpolate a channel with a 24 bit weight, 0..=255³
///
/// The weight is coverage times per-pixel alpha times total alpha.
pub fn lerp24(dst: u8, src: u8, alpha: u32) -> u8 {
    lerp_shift(dst, src, alpha, 24)
}

#[inline]
fn lerp_shift(dst: u8, src: u8, alpha: u32, shift: u32) -> u8 {
    let d = i64::from(dst);
    (((i64::from(src) - d) * i64::from(alpha) >> shift) + d) as u8
}
