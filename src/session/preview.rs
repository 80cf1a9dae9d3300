use image::RgbaImage;

use crate::export::png::encode_png;
use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::render::pipeline::render_qr;
use crate::style::resolver::{StyleSelections, Uploads, resolve};
use crate::symbol::encoder::{ModuleMatrix, encode};

/// A finished render: the encoded symbol, its preview pixels and download bytes, plus any
/// fallbacks taken.
#[derive(Debug)]
pub struct Rendered {
    /// The symbol the image was drawn from.
    pub matrix: ModuleMatrix,
    /// Light border the image was drawn with, in modules.
    pub quiet_zone: u32,
    /// RGBA preview image, `canvas x canvas`.
    pub image: RgbaImage,
    /// Lossless PNG encoding of [`Rendered::image`].
    pub png: Vec<u8>,
    /// Non-fatal problems (e.g. an upload that could not be decoded).
    pub warnings: Vec<QrStyleError>,
}

/// Outcome of one interaction. Never an `Err`: every failure becomes something to show.
#[derive(Debug)]
pub enum Preview {
    /// Nothing to encode yet; show the prompt instead of an image.
    Prompt(QrStyleError),
    /// The selections or the text could not be turned into a code.
    Rejected(QrStyleError),
    /// The code was rendered.
    Ready(Rendered),
}

impl Preview {
    /// The rendered result, if any.
    pub fn rendered(&self) -> Option<&Rendered> {
        match self {
            Preview::Ready(r) => Some(r),
            Preview::Prompt(_) | Preview::Rejected(_) => None,
        }
    }

    /// Every message the user should see, most important first.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Preview::Prompt(e) | Preview::Rejected(e) => vec![e.to_string()],
            Preview::Ready(r) => r.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Run the whole pipeline for one interaction: resolve, encode, composite, export.
///
/// Empty text short-circuits to [`Preview::Prompt`] before any encoding happens.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn generate(text: &str, selections: &StyleSelections, uploads: Uploads) -> Preview {
    if text.is_empty() {
        return Preview::Prompt(QrStyleError::invalid_input(
            "enter some text or a URL to generate a QR code",
        ));
    }

    match run(text, selections, uploads) {
        Ok(rendered) => Preview::Ready(rendered),
        Err(err) => {
            tracing::warn!(error = %err, "render rejected");
            Preview::Rejected(err)
        }
    }
}

fn run(text: &str, selections: &StyleSelections, uploads: Uploads) -> QrStyleResult<Rendered> {
    let resolved = resolve(selections, uploads)?;
    let matrix = encode(text, resolved.config.ec_level)?;
    let image = render_qr(&matrix, &resolved.config)?;
    let png = encode_png(&image)?;
    Ok(Rendered {
        quiet_zone: resolved.config.quiet_zone,
        matrix,
        image,
        png,
        warnings: resolved.warnings,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/preview.rs"]
mod tests;
