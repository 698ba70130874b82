//! Colors

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Create a gray color with equal components
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
}

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
}

impl From<Rgba8> for Rgb8 {
    fn from(c: Rgba8) -> Rgb8 {
        Rgb8::new( c.r, c.g, c.b )
    }
}
impl From<Rgb8> for Rgba8 {
    fn from(c: Rgb8) -> Rgba8 {
        Rgba8::new( c.r, c.g, c.b, 255 )
    }
}
