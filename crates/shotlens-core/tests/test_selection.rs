use shotlens_core::geometry::{Size, Vec2};
use shotlens_core::viewport::{measure_delta, DeltaMode, RectDrag, Roi};

#[test]
fn test_drag_normalizes_any_direction() {
    let mut drag = RectDrag::new(Vec2::new(50.0, 40.0));
    drag.update(Vec2::new(10.0, 90.0));
    let (min, size) = drag.normalized();
    assert_eq!(min, Vec2::new(10.0, 40.0));
    assert_eq!(size, Size::new(40.0, 50.0));
    assert_eq!(drag.to_roi(), Roi::new(10, 40, 40, 50));
}

#[test]
fn test_drag_rounds_to_whole_pixels() {
    let mut drag = RectDrag::new(Vec2::new(1.4, 2.6));
    drag.update(Vec2::new(11.7, 8.2));
    assert_eq!(drag.to_roi(), Roi::new(1, 3, 10, 6));
}

#[test]
fn test_drag_clamped_to_image() {
    let mut drag = RectDrag::new(Vec2::new(-20.0, -5.0));
    drag.update(Vec2::new(30.0, 500.0));
    let roi = drag.to_roi_clamped(Size::new(100.0, 200.0)).unwrap();
    assert_eq!(roi, Roi::new(0, 0, 30, 200));
}

#[test]
fn test_drag_outside_image_is_none() {
    let mut drag = RectDrag::new(Vec2::new(-50.0, -50.0));
    drag.update(Vec2::new(-10.0, -10.0));
    assert!(drag.to_roi_clamped(Size::new(100.0, 100.0)).is_none());
}

#[test]
fn test_roi_display_and_array() {
    let roi = Roi::new(5, 6, 70, 80);
    assert_eq!(roi.to_string(), "[5, 6, 70, 80]");
    assert_eq!(roi.to_array(), [5, 6, 70, 80]);
    assert_eq!(roi.center(), Vec2::new(40.0, 46.0));
}

#[test]
fn test_roi_offset_roundtrip() {
    let source = Roi::new(10, 10, 50, 20);
    let target = Roi::new(30, 5, 60, 20);
    let offset = source.offset_to(target);
    assert_eq!(offset, [20, -5, 10, 0]);
    assert_eq!(source.apply_offset(offset), target);
}

#[test]
fn test_measure_delta() {
    let a = Vec2::new(10.2, 40.0);
    let b = Vec2::new(55.6, 12.4);
    assert_eq!(measure_delta(a, b, DeltaMode::Dx), 45);
    assert_eq!(measure_delta(a, b, DeltaMode::Dy), -28);
    assert_eq!(DeltaMode::Dy.to_string(), "dy");
}
