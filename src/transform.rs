//! Display to frame buffer coordinate mapping

use crate::bitmap::Rect;

/// Orientation of the frame buffer relative to the display
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Rotation {
    /// Frame buffer rows run along display rows
    Rotate0,
    /// Frame buffer rows run along display columns
    Rotate90,
}

/// Maps rectangles from display coordinates into frame buffer coordinates
///
/// Pure and cheap. A painter applies it once when a bitmap is bound and
/// caches the result for the rest of the render pass.
#[derive(Debug,Copy,Clone)]
pub struct DisplayTransform {
    /// Mounting orientation of the panel
    pub rotation: Rotation,
    /// Display width in pixels
    pub width: i32,
    /// Display height in pixels
    pub height: i32,
}

impl DisplayTransform {
    /// Create new transform
    pub fn new(rotation: Rotation, width: i32, height: i32) -> Self {
        DisplayTransform { rotation, width, height }
    }
    /// Transform for a frame buffer oriented exactly as the display
    pub fn identity(width: i32, height: i32) -> Self {
        Self::new(Rotation::Rotate0, width, height)
    }
    /// Map a display-space rectangle into frame buffer space
    pub fn to_framebuffer(&self, r: Rect) -> Rect {
        match self.rotation {
            Rotation::Rotate0 => r,
            Rotation::Rotate90 => {
                Rect::new(r.y, self.width - r.x - r.width, r.height, r.width)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate0_is_identity() {
        let r = Rect::new(10, 20, 100, 50);
        let tr = DisplayTransform::identity(320, 240);
        assert_eq!(tr.to_framebuffer(r), r);
    }

    #[test]
    fn rotate90_remaps_and_swaps() {
        let r = Rect::new(10, 20, 100, 50);
        let tr = DisplayTransform::new(Rotation::Rotate90, 320, 240);
        assert_eq!(tr.to_framebuffer(r), Rect::new(20, 210, 50, 100));
    }

    #[test]
    fn rotate90_roundtrip_of_full_display() {
        let tr = DisplayTransform::new(Rotation::Rotate90, 320, 240);
        let full = Rect::new(0, 0, 320, 240);
        assert_eq!(tr.to_framebuffer(full), Rect::new(0, 0, 240, 320));
    }
}
