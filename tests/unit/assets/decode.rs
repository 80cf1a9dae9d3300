use std::io::Cursor;

use super::*;

fn encode_as(img: image::DynamicImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

#[test]
fn decode_png_keeps_straight_alpha() {
    let src = image::RgbaImage::from_raw(1, 1, vec![100u8, 50, 200, 128]).unwrap();
    let buf = encode_as(image::DynamicImage::ImageRgba8(src), image::ImageFormat::Png);

    let out = decode_image(&buf).unwrap();
    assert_eq!(out.dimensions(), (1, 1));
    assert_eq!(out.as_raw().as_slice(), &[100, 50, 200, 128]);
}

#[test]
fn decode_jpeg_is_opaque_rgba() {
    let src = image::RgbImage::from_pixel(4, 3, image::Rgb([10, 200, 30]));
    let buf = encode_as(image::DynamicImage::ImageRgb8(src), image::ImageFormat::Jpeg);

    let out = decode_image(&buf).unwrap();
    assert_eq!(out.dimensions(), (4, 3));
    assert!(out.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn garbage_and_empty_are_decode_errors() {
    assert!(matches!(decode_image(b""), Err(QrStyleError::Decode(_))));
    assert!(matches!(
        decode_image(b"definitely not a png"),
        Err(QrStyleError::Decode(_))
    ));
}
