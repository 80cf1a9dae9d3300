use super::*;

#[test]
fn select_is_a_hard_switch() {
    let bg = [255, 255, 255, 255];
    let fg = [0, 0, 0, 255];
    assert_eq!(select(bg, fg, 255), fg);
    assert_eq!(select(bg, fg, 0), bg);
}

#[test]
fn paste_transparent_is_noop_and_opaque_replaces() {
    let dst = [10, 20, 30, 255];
    assert_eq!(paste(dst, [200, 200, 200, 0]), dst);
    assert_eq!(paste(dst, [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn paste_half_alpha_mixes() {
    let out = paste([0, 0, 0, 255], [255, 255, 255, 128]);
    assert_eq!(out[0], 128);
    assert_eq!(out[3], 255);

    let over_clear = paste([0, 0, 0, 0], [255, 255, 255, 128]);
    assert_eq!(over_clear[3], 128);
}

#[test]
fn select_through_mask_picks_per_pixel() {
    let bg = RgbaImage::from_pixel(2, 1, image::Rgba([255, 255, 255, 255]));
    let fill = RgbaImage::from_pixel(2, 1, image::Rgba([0, 0, 255, 255]));
    let mask = GrayImage::from_raw(2, 1, vec![255, 0]).unwrap();

    let out = select_through_mask(&bg, &fill, &mask).unwrap();
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 255, 255]);
    assert_eq!(out.get_pixel(1, 0).0, [255, 255, 255, 255]);
}

#[test]
fn mismatched_layers_are_a_composite_error() {
    let bg = RgbaImage::new(4, 4);
    let fill = RgbaImage::new(4, 4);
    let mask = GrayImage::new(3, 4);
    assert!(matches!(
        select_through_mask(&bg, &fill, &mask),
        Err(QrStyleError::Composite(_))
    ));
}

#[test]
fn logo_box_is_centered() {
    assert_eq!(
        LogoPlacement::centered(400, 80),
        LogoPlacement {
            x: 160,
            y: 160,
            side: 80
        }
    );
    // Odd leftover rounds the offset down.
    assert_eq!(LogoPlacement::centered(201, 40).x, 80);
}

#[test]
fn overlay_touches_only_the_logo_box() {
    let base = RgbaImage::from_fn(400, 400, |x, y| {
        image::Rgba([(x % 251) as u8, (y % 241) as u8, 7, 255])
    });
    let mut out = base.clone();
    let logo = RgbaImage::from_pixel(13, 29, image::Rgba([255, 0, 0, 255]));

    let placement = overlay_logo(&mut out, &logo, 80).unwrap();
    assert_eq!((placement.x, placement.y, placement.side), (160, 160, 80));

    for (x, y, px) in out.enumerate_pixels() {
        if placement.contains(x, y) {
            assert_eq!(px.0, [255, 0, 0, 255], "({x},{y})");
        } else {
            assert_eq!(px, base.get_pixel(x, y), "({x},{y})");
        }
    }
}

#[test]
fn transparent_logo_pixels_keep_the_code() {
    let base = RgbaImage::from_pixel(200, 200, image::Rgba([0, 0, 0, 255]));
    let mut out = base.clone();
    let logo = RgbaImage::from_pixel(20, 20, image::Rgba([255, 255, 255, 0]));
    overlay_logo(&mut out, &logo, 20).unwrap();
    assert_eq!(out, base);
}

#[test]
fn oversized_logo_is_rejected() {
    let mut out = RgbaImage::new(100, 100);
    let logo = RgbaImage::new(4, 4);
    assert!(overlay_logo(&mut out, &logo, 101).is_err());
}

#[test]
fn scaled_logo_edges_do_not_darken() {
    // Transparent black border around an opaque white center.
    let mut logo = RgbaImage::new(8, 8);
    for y in 3..5 {
        for x in 3..5 {
            logo.put_pixel(x, y, image::Rgba([255, 255, 255, 255]));
        }
    }
    let mut dst = RgbaImage::from_pixel(200, 200, image::Rgba([255, 255, 255, 255]));
    overlay_logo(&mut dst, &logo, 60).unwrap();
    assert!(dst.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}
