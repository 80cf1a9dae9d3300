use super::*;

#[test]
fn solid_layers_are_uniform_and_opaque() {
    let bg = background_layer(
        &BackgroundSpec::Color {
            color: Rgb8::new(1, 2, 3),
        },
        200,
    );
    assert_eq!(bg.dimensions(), (200, 200));
    assert!(bg.pixels().all(|p| p.0 == [1, 2, 3, 255]));

    let fill = fill_layer(
        &FillSpec::Solid {
            color: Rgb8::BLACK,
        },
        250,
    );
    assert_eq!(fill.dimensions(), (250, 250));
    assert!(fill.pixels().all(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn gradient_starts_at_primary_and_ends_near_secondary() {
    let pairs = [
        (Rgb8::BLACK, Rgb8::new(0, 0x78, 0xd7)),
        (Rgb8::WHITE, Rgb8::BLACK),
        (Rgb8::new(200, 10, 90), Rgb8::new(3, 250, 90)),
    ];
    for canvas in [200u32, 400, 1000] {
        for (from, to) in pairs {
            let first = gradient_row_color(from, to, 0, canvas);
            assert_eq!(first, from);

            let last = gradient_row_color(from, to, canvas - 1, canvas);
            assert!(last.r.abs_diff(to.r) <= 2, "{from} -> {to} @ {canvas}: {last}");
            assert!(last.g.abs_diff(to.g) <= 2, "{from} -> {to} @ {canvas}: {last}");
            assert!(last.b.abs_diff(to.b) <= 2, "{from} -> {to} @ {canvas}: {last}");
        }
    }
}

#[test]
fn gradient_layer_rows_are_uniform_and_monotonic() {
    let from = Rgb8::new(0, 0, 0);
    let to = Rgb8::new(255, 128, 0);
    let layer = fill_layer(&FillSpec::Gradient { from, to }, 300);
    assert_eq!(layer.dimensions(), (300, 300));

    let mut prev = 0u8;
    for y in 0..300 {
        let expected = gradient_row_color(from, to, y, 300);
        let left = layer.get_pixel(0, y).0;
        let right = layer.get_pixel(299, y).0;
        assert_eq!(left, [expected.r, expected.g, expected.b, 255]);
        assert_eq!(left, right);
        assert!(left[0] >= prev);
        prev = left[0];
    }
    // Halfway down: 255 * 150 / 300 = 127.5 -> 128.
    assert_eq!(layer.get_pixel(10, 150).0[0], 128);
}

#[test]
fn background_image_is_stretched_to_canvas() {
    let raster = RgbaImage::from_pixel(30, 10, image::Rgba([9, 99, 199, 255]));
    let bg = background_layer(&BackgroundSpec::Image { raster }, 240);
    assert_eq!(bg.dimensions(), (240, 240));
    // A uniform source stays uniform after resampling (up to float rounding).
    let want = [9u8, 99, 199, 255];
    assert!(
        bg.pixels()
            .all(|p| p.0.iter().zip(want).all(|(&a, b)| a.abs_diff(b) <= 1))
    );
}

#[test]
fn resize_exact_is_identity_at_target_size() {
    let mut src = RgbaImage::new(4, 4);
    src.put_pixel(1, 2, image::Rgba([1, 2, 3, 4]));
    assert_eq!(resize_exact(&src, 4, 4), src);
}

#[test]
fn resize_does_not_pull_transparent_black_into_color() {
    let mut src = RgbaImage::new(6, 6);
    src.put_pixel(2, 2, image::Rgba([200, 40, 10, 255]));
    src.put_pixel(3, 3, image::Rgba([200, 40, 10, 255]));
    let out = resize_exact(&src, 30, 30);
    assert_eq!(out.dimensions(), (30, 30));
    // Low-alpha pixels carry too little color to compare.
    for p in out.pixels().filter(|p| p.0[3] >= 64) {
        assert!(p.0[0] >= 196, "{:?}", p.0);
        assert!(p.0[1] >= 36, "{:?}", p.0);
        assert!(p.0[2] >= 6, "{:?}", p.0);
    }
}
