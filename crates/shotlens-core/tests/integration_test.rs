mod common;

use std::sync::Arc;

use shotlens_core::color::{composite_overlay, pick_at_screen, Classifier, ColorMode};
use shotlens_core::geometry::{Size, Vec2};
use shotlens_core::io::screenshot::{decode_base64_raster, encode_png_data_uri};
use shotlens_core::session::{Apply, LatestSlot};
use shotlens_core::viewport::{InputEvent, InteractionController, Viewport};

/// Decode, display, pan, pick a color and classify around it.
#[test]
fn test_pick_and_classify_flow() {
    let source = common::raster_from_pixels(
        4,
        1,
        &[[200, 30, 30], [205, 35, 28], [20, 200, 20], [0, 0, 0]],
    );
    let uri = encode_png_data_uri(&source).unwrap();
    let raster = Arc::new(decode_base64_raster(&uri).unwrap());

    let mut viewport = Viewport::default();
    let (w, h) = raster.dimensions();
    viewport
        .initialize_image(Size::from((w, h)), Size::new(100.0, 100.0), 0.0)
        .unwrap();
    assert_eq!(viewport.scale(), 1.0);

    // Pan the image by 10px to the right with the middle button.
    let mut controller = InteractionController::new();
    controller.handle(InputEvent::MiddleDown(Vec2::new(50.0, 50.0)), &mut viewport);
    controller.handle(InputEvent::PointerMove(Vec2::new(60.0, 50.0)), &mut viewport);
    controller.handle(InputEvent::ButtonUp, &mut viewport);

    // Image pixel 0 is now drawn at x = 48 + 10.
    let picked = pick_at_screen(&raster, &viewport, Vec2::new(58.5, 50.2), ColorMode::Hsv).unwrap();
    assert_eq!(picked.rgb, [200, 30, 30]);

    let (lower, upper) = picked.range(10);
    let mut classifier = Classifier::default();
    classifier.load(Arc::clone(&raster));

    let mut slot = LatestSlot::new();
    let tag = slot.begin();
    let result = classifier.classify(&lower, &upper, ColorMode::Hsv).unwrap();
    assert_eq!(result.matched_count, 2);

    let composite = composite_overlay(&raster, &result.overlay).unwrap();
    assert_eq!(composite.dimensions(), (4, 1));
    assert_eq!(slot.offer(tag, result), Apply::Applied);
}
