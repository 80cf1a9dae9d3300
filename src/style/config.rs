use image::RgbaImage;

use crate::foundation::core::{
    CANVAS_MAX, CANVAS_MIN, LOGO_PERCENT_MAX, LOGO_PERCENT_MIN, QUIET_ZONE_MAX, Rgb8,
};
use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::symbol::encoder::EcLevel;

/// Light border around the symbol, in modules, when nothing else is chosen.
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// How a single dark module is drawn inside its cell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ModuleShape {
    /// Fills the whole cell.
    #[default]
    Square,
    /// Centered square covering 80% of the cell side.
    #[serde(alias = "gapped")]
    GappedSquare,
    /// Centered disc touching the cell edges.
    Circle,
    /// Square with corners rounded where no neighbor continues the module.
    Rounded,
}

/// What paints the dark modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillSpec {
    /// One color everywhere.
    Solid {
        /// Module color.
        color: Rgb8,
    },
    /// Vertical gradient, `from` on the top row and approaching `to` on the bottom row.
    Gradient {
        /// Top color.
        from: Rgb8,
        /// Bottom color.
        to: Rgb8,
    },
}

/// What shows through the light modules.
#[derive(Clone, Debug, PartialEq)]
pub enum BackgroundSpec {
    /// Uniform opaque color.
    Color {
        /// Background color.
        color: Rgb8,
    },
    /// Decoded raster at its native size; stretched to the canvas when the layer is built.
    Image {
        /// Straight-alpha RGBA pixels.
        raster: RgbaImage,
    },
}

impl Default for BackgroundSpec {
    fn default() -> Self {
        Self::Color {
            color: Rgb8::WHITE,
        }
    }
}

/// Logo pasted over the center of the code.
#[derive(Clone, Debug, PartialEq)]
pub struct LogoSpec {
    /// Decoded logo at its native size.
    pub raster: RgbaImage,
    /// Logo side as a percentage of the canvas width, `10..=30`.
    pub percent: u32,
}

impl LogoSpec {
    /// Logo side in pixels on a `canvas`-wide image: `round(canvas * percent / 100)`.
    pub fn side_px(&self, canvas: u32) -> u32 {
        ((u64::from(canvas) * u64::from(self.percent) + 50) / 100) as u32
    }
}

/// Fully resolved render parameters. Built once per render and passed to the compositor.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Output side length in pixels (the image is square).
    pub canvas: u32,
    /// Error correction level used when encoding.
    pub ec_level: EcLevel,
    /// Module drawing style.
    pub shape: ModuleShape,
    /// Dark-module paint.
    pub fill: FillSpec,
    /// Light-module paint.
    pub background: BackgroundSpec,
    /// Optional centered logo.
    pub logo: Option<LogoSpec>,
    /// Light border around the symbol, in modules.
    pub quiet_zone: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: 400,
            ec_level: EcLevel::default(),
            shape: ModuleShape::default(),
            fill: FillSpec::Solid {
                color: Rgb8::BLACK,
            },
            background: BackgroundSpec::default(),
            logo: None,
            quiet_zone: DEFAULT_QUIET_ZONE,
        }
    }
}

impl RenderConfig {
    /// Check every bounded field.
    pub fn validate(&self) -> QrStyleResult<()> {
        check_canvas(self.canvas)?;
        check_quiet_zone(self.quiet_zone)?;
        if let Some(logo) = &self.logo {
            check_logo_percent(logo.percent)?;
            check_raster(&logo.raster, "logo")?;
        }
        if let BackgroundSpec::Image { raster } = &self.background {
            check_raster(raster, "background")?;
        }
        Ok(())
    }
}

pub(crate) fn check_raster(raster: &RgbaImage, what: &str) -> QrStyleResult<()> {
    if raster.width() == 0 || raster.height() == 0 {
        return Err(QrStyleError::validation(format!("{what} image is empty")));
    }
    Ok(())
}

pub(crate) fn check_canvas(canvas: u32) -> QrStyleResult<()> {
    if !(CANVAS_MIN..=CANVAS_MAX).contains(&canvas) {
        return Err(QrStyleError::validation(format!(
            "canvas size {canvas} must be within {CANVAS_MIN}..={CANVAS_MAX} pixels"
        )));
    }
    Ok(())
}

pub(crate) fn check_logo_percent(percent: u32) -> QrStyleResult<()> {
    if !(LOGO_PERCENT_MIN..=LOGO_PERCENT_MAX).contains(&percent) {
        return Err(QrStyleError::validation(format!(
            "logo size {percent}% must be within {LOGO_PERCENT_MIN}..={LOGO_PERCENT_MAX}%"
        )));
    }
    Ok(())
}

pub(crate) fn check_quiet_zone(quiet_zone: u32) -> QrStyleResult<()> {
    if quiet_zone > QUIET_ZONE_MAX {
        return Err(QrStyleError::validation(format!(
            "quiet zone {quiet_zone} must be at most {QUIET_ZONE_MAX} modules"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/style/config.rs"]
mod tests;
