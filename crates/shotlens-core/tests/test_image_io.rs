mod common;

use image::RgbaImage;

use shotlens_core::io::image_io::{load_raster, save_rgb, save_rgba_png};
use shotlens_core::io::screenshot::encode_png_data_uri;

#[test]
fn test_save_load_png_roundtrip() {
    let img = common::gradient(16, 9);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shot.png");

    save_rgb(&img, &path).unwrap();
    let loaded = load_raster(&path).unwrap();
    assert_eq!(loaded, img);
}

#[test]
fn test_load_base64_text_file() {
    let img = common::primaries_2x2();
    let uri = encode_png_data_uri(&img).unwrap();
    let (_dir, path) = common::write_temp("shot.b64", uri.as_bytes());

    let loaded = load_raster(&path).unwrap();
    assert_eq!(loaded, img);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_raster(&dir.path().join("missing.png")).is_err());
}

#[test]
fn test_save_overlay_png() {
    let overlay = RgbaImage::from_pixel(5, 3, image::Rgba([0, 255, 0, 128]));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overlay.png");

    save_rgba_png(&overlay, &path).unwrap();
    let reread = image::open(&path).unwrap().to_rgba8();
    assert_eq!(reread.dimensions(), (5, 3));
    assert_eq!(reread.get_pixel(4, 2).0, [0, 255, 0, 128]);
}
