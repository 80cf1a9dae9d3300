pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Linear mix of one 8-bit channel by weight `w` in `0..=255` (0 keeps `dst`, 255 yields `src`).
pub(crate) fn mix_u8(dst: u8, src: u8, w: u8) -> u8 {
    let w = u16::from(w);
    let inv = 255 - w;
    (mul_div255_u16(u16::from(src), w) + mul_div255_u16(u16::from(dst), inv)).min(255) as u8
}

/// `from + (to - from) * num / den`, rounded to the nearest integer.
pub(crate) fn lerp_channel(from: u8, to: u8, num: u32, den: u32) -> u8 {
    if den == 0 {
        return from;
    }
    let t = f64::from(num) / f64::from(den);
    let v = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    v.round().clamp(0.0, 255.0) as u8
}

/// Straight to premultiplied alpha, in place.
pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = mul_div255_u16(u16::from(*c), a) as u8;
        }
    }
}

/// Premultiplied back to straight alpha, in place. Fully transparent pixels become zero.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
