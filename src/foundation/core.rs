use std::fmt;

/// Smallest accepted canvas side, in pixels.
pub const CANVAS_MIN: u32 = 200;
/// Largest accepted canvas side, in pixels.
pub const CANVAS_MAX: u32 = 1000;
/// Smallest accepted logo size, as a percentage of the canvas width.
pub const LOGO_PERCENT_MIN: u32 = 10;
/// Largest accepted logo size, as a percentage of the canvas width.
pub const LOGO_PERCENT_MAX: u32 = 30;
/// Widest accepted quiet zone, in modules.
pub const QUIET_ZONE_MAX: u32 = 10;

/// Straight (non-premultiplied) opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fully opaque RGBA pixel of this color.
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
