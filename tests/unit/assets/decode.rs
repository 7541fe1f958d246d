use std::io::Cursor;

use super::*;

fn png_bytes(img: RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_straight_alpha() {
    let img = RgbaImage::from_raw(1, 1, vec![100, 50, 200, 128]).unwrap();
    let bmp = decode_bitmap(&png_bytes(img)).unwrap();
    assert_eq!((bmp.width(), bmp.height()), (1, 1));
    assert_eq!(bmp.as_raw(), &[100, 50, 200, 128]);
}

#[test]
fn garbage_bytes_are_input_unavailable() {
    let err = decode_bitmap(b"not an image").unwrap_err();
    assert!(err.is_input_unavailable());
}

#[test]
fn fit_within_bounds_the_longer_side() {
    assert_eq!(fit_within(800, 600, 1000), (800, 600));
    assert_eq!(fit_within(1000, 1000, 1000), (1000, 1000));
    assert_eq!(fit_within(2000, 1500, 1000), (1000, 750));
    assert_eq!(fit_within(1500, 3000, 1000), (500, 1000));
    assert_eq!(fit_within(3000, 3000, 1000), (1000, 1000));
    assert_eq!(fit_within(5000, 2, 1000), (1000, 1));
}

#[test]
fn prepare_downscales_without_requantizing() {
    let img = RgbaImage::from_pixel(40, 20, image::Rgba([30, 30, 30, 255]));
    let prep = SourcePrep {
        max_dimension: 10,
        jpeg_quality: None,
    };
    let bmp = prepare_source(&png_bytes(img), &prep).unwrap();
    assert_eq!((bmp.width(), bmp.height()), (10, 5));
    assert!(bmp.as_raw().chunks_exact(4).all(|px| px == [30, 30, 30, 255]));
}

#[test]
fn requantized_source_is_opaque_and_close() {
    let img = RgbaImage::from_pixel(16, 16, image::Rgba([120, 120, 120, 255]));
    let bmp = prepare_source(&png_bytes(img), &SourcePrep::default()).unwrap();
    assert_eq!((bmp.width(), bmp.height()), (16, 16));
    for px in bmp.as_raw().chunks_exact(4) {
        assert_eq!(px[3], 255);
        assert!(px[0].abs_diff(120) <= 6);
    }
}

#[test]
fn requantize_flattens_transparency_over_black() {
    let img = RgbaImage::from_pixel(8, 8, image::Rgba([255, 255, 255, 0]));
    let bmp = prepare_source(&png_bytes(img), &SourcePrep::default()).unwrap();
    assert!(bmp.as_raw().chunks_exact(4).all(|px| px[0] <= 4 && px[3] == 255));
}

#[test]
fn invalid_prep_is_rejected() {
    let img = RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]));
    let bytes = png_bytes(img);
    let zero = SourcePrep {
        max_dimension: 0,
        jpeg_quality: None,
    };
    assert!(prepare_source(&bytes, &zero).is_err());
    let bad_quality = SourcePrep {
        max_dimension: 10,
        jpeg_quality: Some(0),
    };
    assert!(prepare_source(&bytes, &bad_quality).is_err());
}
