use image::{GrayImage, RgbaImage};

use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::foundation::math::{mix_u8, mul_div255_u16};
use crate::render::layers::resize_exact;
use crate::render::mask::MASK_FILL;

/// Straight-alpha RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Pixel-level select: `fill` where the mask is [`MASK_FILL`], `background` otherwise.
pub fn select(background: Rgba8, fill: Rgba8, mask: u8) -> Rgba8 {
    if mask == MASK_FILL { fill } else { background }
}

/// Paste `src` over `dst` using the source alpha as the color blend weight.
///
/// Alpha 0 leaves `dst` untouched and alpha 255 replaces it. Coverage accumulates, so an opaque
/// `dst` stays opaque.
pub fn paste(dst: Rgba8, src: Rgba8) -> Rgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        a => {
            let mut out = [0u8; 4];
            for i in 0..3 {
                out[i] = mix_u8(dst[i], src[i], a);
            }
            out[3] = (u16::from(a) + mul_div255_u16(u16::from(dst[3]), 255 - u16::from(a)))
                .min(255) as u8;
            out
        }
    }
}

/// Compose background and fill through the module mask into a new image.
///
/// All three layers must already be the same size; a mismatch means a layer was built wrong.
pub fn select_through_mask(
    background: &RgbaImage,
    fill: &RgbaImage,
    mask: &GrayImage,
) -> QrStyleResult<RgbaImage> {
    if background.dimensions() != fill.dimensions() || background.dimensions() != mask.dimensions()
    {
        return Err(QrStyleError::composite(format!(
            "layer sizes differ: background {:?}, fill {:?}, mask {:?}",
            background.dimensions(),
            fill.dimensions(),
            mask.dimensions()
        )));
    }

    let (width, height) = background.dimensions();
    let mut out = RgbaImage::new(width, height);
    for (((o, b), f), m) in out
        .pixels_mut()
        .zip(background.pixels())
        .zip(fill.pixels())
        .zip(mask.pixels())
    {
        o.0 = select(b.0, f.0, m.0[0]);
    }
    Ok(out)
}

/// Where the logo ended up on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoPlacement {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Side length in pixels.
    pub side: u32,
}

impl LogoPlacement {
    /// Centered placement of a `side`-pixel square on a `canvas`-pixel square.
    pub fn centered(canvas: u32, side: u32) -> Self {
        let offset = canvas.saturating_sub(side) / 2;
        Self {
            x: offset,
            y: offset,
            side,
        }
    }

    /// Whether pixel `(x, y)` lies inside the logo box.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.side && y < self.y + self.side
    }
}

/// Resize `logo` to a `side x side` square and paste it at the center of `dst`, blending through
/// the logo's own alpha. Pixels outside the logo box are never written.
pub fn overlay_logo(dst: &mut RgbaImage, logo: &RgbaImage, side: u32) -> QrStyleResult<LogoPlacement> {
    let (width, height) = dst.dimensions();
    if width != height {
        return Err(QrStyleError::composite(format!(
            "logo overlay expects a square canvas, got {width}x{height}"
        )));
    }
    if side > width {
        return Err(QrStyleError::composite(format!(
            "logo side {side} exceeds canvas {width}"
        )));
    }

    let placement = LogoPlacement::centered(width, side);
    if side == 0 {
        return Ok(placement);
    }

    let scaled = resize_exact(logo, side, side);
    for (lx, ly, src) in scaled.enumerate_pixels() {
        let px = dst.get_pixel_mut(placement.x + lx, placement.y + ly);
        px.0 = paste(px.0, src.0);
    }
    Ok(placement)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
