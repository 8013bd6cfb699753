use image::{RgbImage, RgbaImage};

/// Convert an RGB8 screenshot to an egui ColorImage.
pub fn rgb_to_color_image(img: &RgbImage) -> egui::ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    egui::ColorImage::from_rgb(size, img.as_raw())
}

/// Convert an RGBA8 overlay to an egui ColorImage (straight alpha).
pub fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw())
}
