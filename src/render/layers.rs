use image::{RgbaImage, imageops};
use rayon::prelude::*;

use crate::foundation::core::Rgb8;
use crate::foundation::math::{
    lerp_channel, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place,
};
use crate::style::config::{BackgroundSpec, FillSpec};

/// Resampling filter for uploaded rasters.
const RESIZE_FILTER: imageops::FilterType = imageops::FilterType::CatmullRom;

/// Build the `canvas x canvas` background layer.
///
/// Images are stretched to the canvas; aspect ratio is not preserved.
pub fn background_layer(spec: &BackgroundSpec, canvas: u32) -> RgbaImage {
    match spec {
        BackgroundSpec::Color { color } => RgbaImage::from_pixel(canvas, canvas, color.to_rgba()),
        BackgroundSpec::Image { raster } => resize_exact(raster, canvas, canvas),
    }
}

/// Build the `canvas x canvas` fill layer. Every pixel is opaque.
pub fn fill_layer(spec: &FillSpec, canvas: u32) -> RgbaImage {
    match *spec {
        FillSpec::Solid { color } => RgbaImage::from_pixel(canvas, canvas, color.to_rgba()),
        FillSpec::Gradient { from, to } => {
            let mut layer = RgbaImage::new(canvas, canvas);
            if canvas == 0 {
                return layer;
            }
            let row_len = canvas as usize * 4;
            let pixels: &mut [u8] = &mut layer;
            pixels
                .par_chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(y, row)| {
                    let c = gradient_row_color(from, to, y as u32, canvas);
                    for px in row.chunks_exact_mut(4) {
                        px.copy_from_slice(&[c.r, c.g, c.b, 255]);
                    }
                });
            layer
        }
    }
}

/// Color of row `y` of a vertical gradient over `canvas` rows:
/// `from + (to - from) * y / canvas` per channel, rounded to nearest.
pub fn gradient_row_color(from: Rgb8, to: Rgb8, y: u32, canvas: u32) -> Rgb8 {
    Rgb8::new(
        lerp_channel(from.r, to.r, y, canvas),
        lerp_channel(from.g, to.g, y, canvas),
        lerp_channel(from.b, to.b, y, canvas),
    )
}

/// Resize to exactly `width x height`, skipping the resample when the size already matches.
///
/// Resampling runs on premultiplied alpha so the color of transparent pixels cannot bleed
/// into their opaque neighbors.
pub(crate) fn resize_exact(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if src.dimensions() == (width, height) {
        return src.clone();
    }
    if src.pixels().all(|p| p.0[3] == 255) {
        return imageops::resize(src, width, height, RESIZE_FILTER);
    }

    let mut premul = src.clone();
    premultiply_rgba8_in_place(&mut premul);
    let mut out = imageops::resize(&premul, width, height, RESIZE_FILTER);
    unpremultiply_rgba8_in_place(&mut out);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/layers.rs"]
mod tests;
