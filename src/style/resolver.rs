use image::RgbaImage;

use crate::assets::decode::decode_image;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::style::color::parse_hex;
use crate::style::config::{
    BackgroundSpec, DEFAULT_QUIET_ZONE, FillSpec, LogoSpec, ModuleShape, RenderConfig,
    check_canvas, check_logo_percent, check_quiet_zone, check_raster,
};
use crate::symbol::encoder::EcLevel;

/// Fill mode as picked in the UI.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Paint modules with the primary color.
    #[default]
    Solid,
    /// Vertical gradient from the primary to the secondary color.
    Gradient,
}

/// Background mode as picked in the UI.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundMode {
    /// Uniform background color.
    #[default]
    Color,
    /// Uploaded background image.
    Image,
}

/// Raw, unvalidated UI state. Colors are still hex strings.
///
/// Deserializes from a JSON style file; missing fields take the defaults of a fresh session.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSelections {
    /// Output side in pixels, `200..=1000`.
    pub canvas: u32,
    /// Error correction level.
    pub ec_level: EcLevel,
    /// Module drawing style.
    pub shape: ModuleShape,
    /// Solid or gradient fill.
    pub fill_mode: FillMode,
    /// Module color, and gradient start.
    pub primary_color: String,
    /// Gradient end. Only read in gradient mode.
    pub secondary_color: String,
    /// Color or image background.
    pub background_mode: BackgroundMode,
    /// Background color. Only read in color mode.
    pub background_color: String,
    /// Logo side as a percentage of the canvas width, `10..=30`.
    pub logo_percent: u32,
    /// Light border around the symbol, in modules.
    pub quiet_zone: u32,
}

impl Default for StyleSelections {
    fn default() -> Self {
        Self {
            canvas: 400,
            ec_level: EcLevel::Low,
            shape: ModuleShape::Square,
            fill_mode: FillMode::Solid,
            primary_color: "#000000".to_owned(),
            secondary_color: "#0078D7".to_owned(),
            background_mode: BackgroundMode::Color,
            background_color: "#ffffff".to_owned(),
            logo_percent: 20,
            quiet_zone: DEFAULT_QUIET_ZONE,
        }
    }
}

/// Raw bytes of uploaded files, if any.
#[derive(Clone, Debug, Default)]
pub struct Uploads {
    /// Background image (PNG/JPEG).
    pub background: Option<Vec<u8>>,
    /// Logo image (PNG/JPEG).
    pub logo: Option<Vec<u8>>,
}

/// A fully resolved config plus the non-fatal problems met on the way.
#[derive(Debug)]
pub struct Resolved {
    /// Config ready for the compositor.
    pub config: RenderConfig,
    /// Fallbacks taken (undecodable or missing uploads).
    pub warnings: Vec<QrStyleError>,
}

/// Turn raw selections and uploads into a complete [`RenderConfig`].
///
/// Out-of-range numbers and malformed colors are [`QrStyleError::Validation`]. Broken uploads
/// are not: they fall back to a white background / no logo and are reported in
/// [`Resolved::warnings`]. Rasters are decoded here but keep their native size.
#[tracing::instrument(skip_all, fields(canvas = selections.canvas))]
pub fn resolve(selections: &StyleSelections, uploads: Uploads) -> QrStyleResult<Resolved> {
    check_canvas(selections.canvas)?;
    check_logo_percent(selections.logo_percent)?;
    check_quiet_zone(selections.quiet_zone)?;

    let primary = parse_hex(&selections.primary_color)?;
    let fill = match selections.fill_mode {
        FillMode::Solid => FillSpec::Solid { color: primary },
        FillMode::Gradient => FillSpec::Gradient {
            from: primary,
            to: parse_hex(&selections.secondary_color)?,
        },
    };

    let mut warnings = Vec::new();

    let background = match selections.background_mode {
        BackgroundMode::Color => BackgroundSpec::Color {
            color: parse_hex(&selections.background_color)?,
        },
        BackgroundMode::Image => match uploads
            .background
            .as_deref()
            .map(|bytes| upload_raster(decode_image(bytes), "background"))
        {
            Some(Ok(raster)) => BackgroundSpec::Image { raster },
            Some(Err(err)) => {
                tracing::warn!(error = %err, "background upload unusable, using white");
                warnings.push(err);
                white_background()
            }
            None => {
                let err = QrStyleError::validation(
                    "background mode is image but no image was uploaded, using white",
                );
                tracing::warn!(error = %err, "missing background upload");
                warnings.push(err);
                white_background()
            }
        },
    };

    let logo = match uploads
        .logo
        .as_deref()
        .map(|bytes| upload_raster(decode_image(bytes), "logo"))
    {
        Some(Ok(raster)) => Some(LogoSpec {
            raster,
            percent: selections.logo_percent,
        }),
        Some(Err(err)) => {
            tracing::warn!(error = %err, "logo upload unusable, drawing no logo");
            warnings.push(err);
            None
        }
        None => None,
    };

    let config = RenderConfig {
        canvas: selections.canvas,
        ec_level: selections.ec_level,
        shape: selections.shape,
        fill,
        background,
        logo,
        quiet_zone: selections.quiet_zone,
    };

    Ok(Resolved { config, warnings })
}

/// A decoded upload the compositor can use. Any error here sends the caller to its fallback.
fn upload_raster(decoded: QrStyleResult<RgbaImage>, what: &str) -> QrStyleResult<RgbaImage> {
    let raster = decoded?;
    check_raster(&raster, what)?;
    Ok(raster)
}

fn white_background() -> BackgroundSpec {
    BackgroundSpec::Color { color: Rgb8::WHITE }
}

#[cfg(test)]
#[path = "../../tests/unit/style/resolver.rs"]
mod tests;
