use std::path::Path;

use anyhow::Context as _;
use image::{ImageEncoder as _, RgbaImage};

use crate::foundation::error::{QrStyleError, QrStyleResult};

/// File name offered for downloads.
pub const DOWNLOAD_FILE_NAME: &str = "stylish_qrcode.png";

/// Encode an RGBA image as PNG. PNG is lossless, so the barcode survives bit-exact.
pub fn encode_png(image: &RgbaImage) -> QrStyleResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(buf)
}

/// Decode PNG bytes back into RGBA8.
pub fn decode_png(bytes: &[u8]) -> QrStyleResult<RgbaImage> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| QrStyleError::decode(format!("not a png: {e}")))?;
    Ok(img.to_rgba8())
}

/// Encode `image` and write it to `path`, creating parent directories as needed.
pub fn write_png(image: &RgbaImage, path: &Path) -> QrStyleResult<()> {
    let bytes = encode_png(image)?;
    write_png_bytes(&bytes, path)
}

/// Write already-encoded PNG bytes to `path`, creating parent directories as needed.
pub fn write_png_bytes(bytes: &[u8], path: &Path) -> QrStyleResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "png written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
