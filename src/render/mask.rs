use image::GrayImage;
use rayon::prelude::*;

use crate::style::config::ModuleShape;
use crate::symbol::encoder::ModuleMatrix;

/// Mask value for pixels that take the fill layer.
pub const MASK_FILL: u8 = 255;
/// Mask value for pixels that show the background layer.
pub const MASK_BACKGROUND: u8 = 0;

/// Side of the gapped-square module relative to its cell.
const GAPPED_RATIO: f64 = 0.8;

/// Rasterize `matrix` (framed by `quiet_zone` light modules) into a `canvas x canvas` mask.
///
/// Every output pixel is mapped back to the module grid through its center, which yields the
/// cell it belongs to and its position inside that cell. The module shape is decided in those
/// cell-local coordinates, so shapes stay crisp at any canvas size and cell boundaries never
/// blend. The result only contains [`MASK_FILL`] and [`MASK_BACKGROUND`].
#[tracing::instrument(skip(matrix), fields(modules = matrix.width()))]
pub fn rasterize_mask(
    matrix: &ModuleMatrix,
    canvas: u32,
    quiet_zone: u32,
    shape: ModuleShape,
) -> GrayImage {
    let mut mask = GrayImage::new(canvas, canvas);
    if canvas == 0 {
        return mask;
    }

    let grid = matrix.width() as f64 + 2.0 * f64::from(quiet_zone);
    let offset = i64::from(quiet_zone);
    let samples: Vec<CellSample> = (0..canvas)
        .map(|p| CellSample::at(p, canvas, grid, offset))
        .collect();

    let row_len = canvas as usize;
    let pixels: &mut [u8] = &mut mask;
    pixels
        .par_chunks_exact_mut(row_len)
        .zip(samples.par_iter())
        .for_each(|(row, sy)| {
            for (px, sx) in row.iter_mut().zip(&samples) {
                *px = if covers(matrix, shape, sx, sy) {
                    MASK_FILL
                } else {
                    MASK_BACKGROUND
                };
            }
        });

    mask
}

/// Where one pixel row/column lands on the module grid.
#[derive(Clone, Copy, Debug)]
struct CellSample {
    /// Module index, already shifted so the quiet zone is negative / past the end.
    cell: i64,
    /// Position inside the cell, `0.0..1.0`.
    frac: f64,
}

impl CellSample {
    fn at(p: u32, canvas: u32, grid: f64, offset: i64) -> Self {
        let g = (f64::from(p) + 0.5) * grid / f64::from(canvas);
        let whole = g.floor();
        Self {
            cell: whole as i64 - offset,
            frac: g - whole,
        }
    }
}

fn covers(matrix: &ModuleMatrix, shape: ModuleShape, sx: &CellSample, sy: &CellSample) -> bool {
    let (x, y) = (sx.cell, sy.cell);
    if !matrix.get(x, y) {
        return false;
    }

    let (u, v) = (sx.frac - 0.5, sy.frac - 0.5);
    match shape {
        ModuleShape::Square => true,
        ModuleShape::GappedSquare => {
            let half = GAPPED_RATIO / 2.0;
            u.abs() <= half && v.abs() <= half
        }
        ModuleShape::Circle => in_disc(u, v),
        ModuleShape::Rounded => {
            let side = if u < 0.0 { x - 1 } else { x + 1 };
            let vert = if v < 0.0 { y - 1 } else { y + 1 };
            if matrix.get(side, y) || matrix.get(x, vert) {
                true
            } else {
                in_disc(u, v)
            }
        }
    }
}

fn in_disc(u: f64, v: f64) -> bool {
    u * u + v * v <= 0.25
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
