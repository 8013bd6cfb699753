mod common;

use shotlens_core::error::ShotlensError;
use shotlens_core::geometry::{Size, Vec2};
use shotlens_core::io::crop::{crop_roi, template_file_name};
use shotlens_core::io::image_io::{load_raster, save_rgb};
use shotlens_core::viewport::{RectDrag, Roi};

#[test]
fn test_crop_size_and_pixels() {
    let img = common::gradient(64, 32);
    let roi = Roi::new(10, 4, 20, 8);
    let cropped = crop_roi(&img, roi).unwrap();

    assert_eq!(cropped.dimensions(), (20, 8));
    assert_eq!(cropped.get_pixel(0, 0), img.get_pixel(10, 4));
    assert_eq!(cropped.get_pixel(19, 7), img.get_pixel(29, 11));
}

#[test]
fn test_crop_whole_image() {
    let img = common::gradient(16, 9);
    let cropped = crop_roi(&img, Roi::new(0, 0, 16, 9)).unwrap();
    assert_eq!(cropped, img);
}

#[test]
fn test_crop_touching_edges_is_valid() {
    let img = common::gradient(50, 40);
    let cropped = crop_roi(&img, Roi::new(45, 30, 5, 10)).unwrap();
    assert_eq!(cropped.dimensions(), (5, 10));
    assert_eq!(cropped.get_pixel(4, 9), img.get_pixel(49, 39));
}

#[test]
fn test_crop_exceeding_bounds_fails() {
    let img = common::gradient(50, 40);
    for roi in [
        Roi::new(45, 30, 6, 10),
        Roi::new(45, 30, 5, 11),
        Roi::new(-1, 0, 10, 10),
        Roi::new(0, -3, 10, 10),
    ] {
        let err = crop_roi(&img, roi).unwrap_err();
        assert!(matches!(err, ShotlensError::InvalidCrop(_)), "{roi}: {err}");
    }
}

#[test]
fn test_crop_empty_roi_fails() {
    let img = common::gradient(50, 40);
    assert!(matches!(
        crop_roi(&img, Roi::new(10, 10, 0, 5)),
        Err(ShotlensError::InvalidCrop(_))
    ));
    assert!(matches!(
        crop_roi(&img, Roi::new(10, 10, 5, -2)),
        Err(ShotlensError::InvalidCrop(_))
    ));
}

#[test]
fn test_clamped_drag_always_crops() {
    let img = common::gradient(100, 60);
    let mut drag = RectDrag::new(Vec2::new(80.5, -10.0));
    drag.update(Vec2::new(140.0, 20.2));
    let roi = drag
        .to_roi_clamped(Size::new(100.0, 60.0))
        .expect("drag overlaps the image");

    let cropped = crop_roi(&img, roi).unwrap();
    assert_eq!(cropped.dimensions(), (roi.width as u32, roi.height as u32));
}

#[test]
fn test_template_saved_and_reloaded() {
    let img = common::gradient(40, 30);
    let roi = Roi::new(5, 5, 12, 7);
    let template = crop_roi(&img, roi).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template_1700000000000.png");
    save_rgb(&template, &path).unwrap();

    let back = load_raster(&path).unwrap();
    assert_eq!(back, template);
}

#[test]
fn test_template_file_name_format() {
    let name = template_file_name();
    let stamp = name
        .strip_prefix("template_")
        .and_then(|rest| rest.strip_suffix(".png"))
        .unwrap();
    assert!(stamp.parse::<u128>().unwrap() > 1_600_000_000_000);
}
