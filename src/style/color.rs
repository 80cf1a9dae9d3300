use std::str::FromStr;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{QrStyleError, QrStyleResult};

/// Parse `#RRGGBB` (case-insensitive, leading `#` optional) into an [`Rgb8`].
pub fn parse_hex(s: &str) -> QrStyleResult<Rgb8> {
    let raw = s.trim();
    let hex = raw.strip_prefix('#').unwrap_or(raw);

    // `from_str_radix` alone would let a sign through ("+f").
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(QrStyleError::validation(format!(
            "color \"{raw}\" must be #RRGGBB (case-insensitive)"
        )));
    }

    fn hex_byte(pair: &str, raw: &str) -> QrStyleResult<u8> {
        u8::from_str_radix(pair, 16).map_err(|_| {
            QrStyleError::validation(format!("invalid hex byte \"{pair}\" in color \"{raw}\""))
        })
    }

    Ok(Rgb8::new(
        hex_byte(&hex[0..2], raw)?,
        hex_byte(&hex[2..4], raw)?,
        hex_byte(&hex[4..6], raw)?,
    ))
}

impl FromStr for Rgb8 {
    type Err = QrStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
