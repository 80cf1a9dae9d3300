use crate::foundation::error::{QrStyleError, QrStyleResult};

/// QR error correction tier, ordered by increasing redundancy and decreasing capacity.
///
/// Higher levels survive more occlusion, which matters once a logo is pasted over the center.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EcLevel {
    /// About 7% of codewords recoverable.
    #[default]
    #[serde(alias = "L")]
    Low,
    /// About 15%.
    #[serde(alias = "M")]
    Medium,
    /// About 25%.
    #[serde(alias = "Q")]
    Quartile,
    /// About 30%.
    #[serde(alias = "H")]
    High,
}

impl EcLevel {
    /// All levels, lowest redundancy first.
    pub const ALL: [EcLevel; 4] = [
        EcLevel::Low,
        EcLevel::Medium,
        EcLevel::Quartile,
        EcLevel::High,
    ];
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::Low => qrcode::EcLevel::L,
            EcLevel::Medium => qrcode::EcLevel::M,
            EcLevel::Quartile => qrcode::EcLevel::Q,
            EcLevel::High => qrcode::EcLevel::H,
        }
    }
}

/// Square grid of QR modules (`true` = dark), row-major. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Build a matrix from row-major modules. `modules.len()` must be `width * width`.
    pub fn from_modules(width: usize, modules: Vec<bool>) -> QrStyleResult<Self> {
        if width == 0 {
            return Err(QrStyleError::validation("module matrix width must be > 0"));
        }
        if width.checked_mul(width) != Some(modules.len()) {
            return Err(QrStyleError::validation(format!(
                "module matrix of width {width} needs {} modules, got {}",
                width.saturating_mul(width),
                modules.len()
            )));
        }
        Ok(Self { width, modules })
    }

    /// Side length `N` in modules.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Module at `(x, y)`. Coordinates outside the grid read as light, so callers can sample the
    /// quiet zone without bounds checks.
    pub fn get(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.width {
            return false;
        }
        self.modules[y * self.width + x]
    }

    /// Number of dark modules.
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    /// Terminal rendering using half-block glyphs, two module rows per text line.
    pub fn to_unicode(&self, quiet_zone: u32) -> String {
        let qz = i64::from(quiet_zone);
        let lo = -qz;
        let hi = self.width as i64 + qz;

        let mut out = String::new();
        let mut y = lo;
        while y < hi {
            for x in lo..hi {
                let top = self.get(x, y);
                let bottom = y + 1 < hi && self.get(x, y + 1);
                out.push(match (top, bottom) {
                    (true, true) => '\u{2588}',
                    (true, false) => '\u{2580}',
                    (false, true) => '\u{2584}',
                    (false, false) => ' ',
                });
            }
            out.push('\n');
            y += 2;
        }
        out
    }
}

/// Encode `text` into a module matrix at the given error correction level.
///
/// Version and mask selection are left to the `qrcode` crate.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn encode(text: &str, ec_level: EcLevel) -> QrStyleResult<ModuleMatrix> {
    if text.is_empty() {
        return Err(QrStyleError::invalid_input("text to encode is empty"));
    }

    let code = qrcode::QrCode::with_error_correction_level(text.as_bytes(), ec_level.into())
        .map_err(|e| QrStyleError::encode(format!("cannot encode {} bytes: {e}", text.len())))?;

    let width = code.width();
    let modules = code
        .to_colors()
        .into_iter()
        .map(|c| c == qrcode::Color::Dark)
        .collect();

    tracing::debug!(width, "encoded qr symbol");
    ModuleMatrix::from_modules(width, modules)
}

#[cfg(test)]
#[path = "../../tests/unit/symbol/encoder.rs"]
mod tests;
