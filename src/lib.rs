//! qrstyle renders a QR code as a styled raster image.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: raw UI selections + uploads -> [`RenderConfig`] ([`resolve`])
//! 2. **Encode**: `text + EcLevel -> ModuleMatrix` ([`encode`], backed by the `qrcode` crate)
//! 3. **Composite**: background -> fill through the module mask -> optional logo ([`render_qr`])
//! 4. **Export**: lossless PNG bytes ([`encode_png`])
//!
//! [`generate`] runs all four for one interaction and turns every failure into a
//! [`Preview`] the caller can show, so nothing here aborts on bad input.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same text and config always produce the same pixels.
//! - **No IO in the compositor**: uploads are decoded up front by the resolver.
//! - **Straight-alpha RGBA8** throughout.
#![forbid(unsafe_code)]

mod assets;
mod export;
mod foundation;
mod render;
mod session;
mod style;
mod symbol;

pub use crate::assets::decode::decode_image;
pub use crate::export::png::{
    DOWNLOAD_FILE_NAME, decode_png, encode_png, write_png, write_png_bytes,
};
pub use crate::foundation::core::{
    CANVAS_MAX, CANVAS_MIN, LOGO_PERCENT_MAX, LOGO_PERCENT_MIN, QUIET_ZONE_MAX, Rgb8,
};
pub use crate::foundation::error::{QrStyleError, QrStyleResult};
pub use crate::render::composite::{
    LogoPlacement, Rgba8, overlay_logo, paste, select, select_through_mask,
};
pub use crate::render::layers::{background_layer, fill_layer, gradient_row_color};
pub use crate::render::mask::{MASK_BACKGROUND, MASK_FILL, rasterize_mask};
pub use crate::render::pipeline::render_qr;
pub use crate::session::preview::{Preview, Rendered, generate};
pub use crate::style::color::parse_hex;
pub use crate::style::config::{
    BackgroundSpec, DEFAULT_QUIET_ZONE, FillSpec, LogoSpec, ModuleShape, RenderConfig,
};
pub use crate::style::resolver::{
    BackgroundMode, FillMode, Resolved, StyleSelections, Uploads, resolve,
};
pub use crate::symbol::encoder::{EcLevel, ModuleMatrix, encode};
