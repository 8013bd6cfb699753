#![allow(dead_code)]

use image::{Rgb, RgbImage};

/// Build a raster from row-major RGB pixels.
pub fn raster_from_pixels(width: u32, height: u32, pixels: &[[u8; 3]]) -> RgbImage {
    assert_eq!(pixels.len(), (width * height) as usize);
    let mut img = RgbImage::new(width, height);
    for (i, px) in pixels.iter().enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        img.put_pixel(x, y, Rgb(*px));
    }
    img
}

/// The 2x2 raster: red, green, blue, near-black.
pub fn primaries_2x2() -> RgbImage {
    raster_from_pixels(
        2,
        2,
        &[[255, 0, 0], [0, 255, 0], [0, 0, 255], [10, 10, 10]],
    )
}

/// A deterministic gradient covering many distinct colors.
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
        ])
    })
}

/// Write `contents` into a named file inside a fresh temp dir.
pub fn write_temp(name: &str, contents: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    (dir, path)
}
