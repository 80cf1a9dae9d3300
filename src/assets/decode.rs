use image::RgbaImage;

use crate::foundation::error::{QrStyleError, QrStyleResult};

/// Decode an uploaded PNG/JPEG into straight-alpha RGBA8 at its native size.
///
/// Failures are [`QrStyleError::Decode`]; callers treat them as "no image provided".
pub fn decode_image(bytes: &[u8]) -> QrStyleResult<RgbaImage> {
    if bytes.is_empty() {
        return Err(QrStyleError::decode("uploaded file is empty"));
    }
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| QrStyleError::decode(format!("not a supported raster image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(QrStyleError::decode("image has zero width or height"));
    }
    Ok(rgba)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
