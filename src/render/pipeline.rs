use image::RgbaImage;

use crate::foundation::error::QrStyleResult;
use crate::render::composite::{overlay_logo, select_through_mask};
use crate::render::layers::{background_layer, fill_layer};
use crate::render::mask::rasterize_mask;
use crate::style::config::RenderConfig;
use crate::symbol::encoder::ModuleMatrix;

/// Compose one `canvas x canvas` RGBA image from a module matrix and a resolved config.
///
/// Layers, bottom to top:
///
/// 1. background (color, or uploaded image stretched to the canvas)
/// 2. fill (solid or vertical gradient), visible only where the module mask is set
/// 3. optional logo, centered, blended through its own alpha
///
/// Deterministic for a given input.
#[tracing::instrument(skip_all, fields(canvas = config.canvas, modules = matrix.width()))]
pub fn render_qr(matrix: &ModuleMatrix, config: &RenderConfig) -> QrStyleResult<RgbaImage> {
    config.validate()?;
    let canvas = config.canvas;

    let mask = rasterize_mask(matrix, canvas, config.quiet_zone, config.shape);
    let background = background_layer(&config.background, canvas);
    let fill = fill_layer(&config.fill, canvas);

    let mut image = select_through_mask(&background, &fill, &mask)?;

    if let Some(logo) = &config.logo {
        let placement = overlay_logo(&mut image, &logo.raster, logo.side_px(canvas))?;
        tracing::debug!(?placement, "logo overlaid");
    }

    Ok(image)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
