pub mod bound;
pub mod classify;
pub mod picker;
pub mod space;

pub use bound::ColorBound;
pub use classify::{
    classify, classify_with_progress, composite_overlay, ClassificationResult, Classifier,
    OverlayPalette,
};
pub use picker::{pick_at_screen, pick_pixel_color, PickedColor};
pub use space::{hsv_to_rgb, rgb_to_gray, rgb_to_hsv, Channels, ColorMode};
