use shotlens_core::config::ViewportConfig;
use shotlens_core::viewport::{InteractionController, Viewport};

/// Viewport display state: the transform engine plus its textures.
pub struct ViewportState {
    pub engine: Viewport,
    pub controller: InteractionController,
    pub texture: Option<egui::TextureHandle>,
    /// Match overlay of the latest applied classification.
    pub overlay_texture: Option<egui::TextureHandle>,
    pub show_overlay: bool,
    /// Set when a new screenshot arrived and must be fitted to the panel.
    pub needs_fit: bool,
    pub pointer_inside: bool,
    /// Image pixel under the pointer.
    pub hover_pixel: Option<(i64, i64)>,
}

impl ViewportState {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            engine: Viewport::new(config),
            controller: InteractionController::new(),
            texture: None,
            overlay_texture: None,
            show_overlay: true,
            needs_fit: false,
            pointer_inside: false,
            hover_pixel: None,
        }
    }

    /// Original image size in pixels, taken from the loaded texture.
    pub fn image_size(&self) -> Option<[usize; 2]> {
        self.texture.as_ref().map(|t| t.size())
    }

    /// Drop the screenshot and any gesture in progress.
    pub fn reset(&mut self) {
        self.controller.reset(&mut self.engine);
        self.engine.reset_viewport();
        self.texture = None;
        self.overlay_texture = None;
        self.needs_fit = false;
        self.hover_pixel = None;
    }
}
