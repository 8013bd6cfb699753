use tracing::debug;

use crate::config::ViewportConfig;
use crate::error::{Result, ShotlensError};
use crate::geometry::{Rect, Size, Vec2};

/// Scale and pan of one displayed screenshot, plus transient pan flags.
///
/// `pan_offset` is in container pixels: a pixel at image position `p` is drawn
/// at `p * scale + pan_offset` relative to the container's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub scale: f32,
    pub pan_offset: Vec2,
    pub is_panning: bool,
    pub is_space_pressed: bool,
    pub is_middle_mouse_down: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan_offset: Vec2::ZERO,
            is_panning: false,
            is_space_pressed: false,
            is_middle_mouse_down: false,
        }
    }
}

/// Direction of a single zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Map a wheel delta to a direction: scrolling down (`dy > 0`) zooms out.
    pub fn from_wheel_delta(dy: f32) -> Option<Self> {
        if dy > 0.0 {
            Some(Self::Out)
        } else if dy < 0.0 {
            Some(Self::In)
        } else {
            None
        }
    }

    fn sign(self) -> f32 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}

/// Pointer cursor the host should show over the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Grab,
    Grabbing,
}

/// Viewport transform engine for one open screenshot.
#[derive(Clone, Debug)]
pub struct Viewport {
    config: ViewportConfig,
    state: ViewState,
    initial_scale: f32,
    pan_start: Option<Vec2>,
    image_size: Option<Size>,
    container_size: Option<Size>,
    padding: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl Viewport {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            config,
            state: ViewState::default(),
            initial_scale: 1.0,
            pan_start: None,
            image_size: None,
            container_size: None,
            padding: config.container_padding,
        }
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn scale(&self) -> f32 {
        self.state.scale
    }

    pub fn pan_offset(&self) -> Vec2 {
        self.state.pan_offset
    }

    /// Fit scale computed by the last `initialize_image`.
    pub fn initial_scale(&self) -> f32 {
        self.initial_scale
    }

    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    pub fn container_size(&self) -> Option<Size> {
        self.container_size
    }

    pub fn is_panning(&self) -> bool {
        self.state.is_panning
    }

    /// Fit a new image into the container and center it, replacing the whole view state.
    ///
    /// The fit never upscales past 100%. It never goes below `min_scale` either:
    /// an image too large to fit at that scale overflows the container, centered.
    pub fn initialize_image(&mut self, image: Size, container: Size, padding: f32) -> Result<()> {
        if image.is_empty() {
            return Err(ShotlensError::InvalidDimensions {
                width: image.width as u32,
                height: image.height as u32,
            });
        }

        let (scale, pan_offset) = self.fit(image, container, padding);
        self.state = ViewState {
            scale,
            pan_offset,
            ..ViewState::default()
        };
        self.pan_start = None;
        self.initial_scale = scale;
        self.image_size = Some(image);
        self.container_size = Some(container);
        self.padding = padding;

        debug!(
            image_w = image.width,
            image_h = image.height,
            container_w = container.width,
            container_h = container.height,
            scale,
            "initialized viewport"
        );
        Ok(())
    }

    fn fit(&self, image: Size, container: Size, padding: f32) -> (f32, Vec2) {
        let avail_w = container.width - padding;
        let avail_h = container.height - padding;
        let fit = (avail_w / image.width).min(avail_h / image.height).min(1.0);
        let scale = fit.max(self.config.min_scale);

        let pan = Vec2::new(
            (avail_w - image.width * scale) / 2.0,
            (avail_h - image.height * scale) / 2.0,
        );
        (scale, pan)
    }

    /// Record a new container size (e.g. after a window resize). The view is left as is.
    pub fn set_container_size(&mut self, container: Size) {
        self.container_size = Some(container);
    }

    fn clamp_scale(&self, scale: f32) -> f32 {
        scale.clamp(self.config.min_scale, self.config.max_scale)
    }

    /// Zoom one step while keeping the image pixel under `cursor` in place.
    pub fn zoom_at_point(&mut self, cursor: Vec2, direction: ZoomDirection) {
        let img_pos = self.to_image_space(cursor);
        let new_scale =
            self.clamp_scale(self.state.scale + direction.sign() * self.config.zoom_step);

        self.state.pan_offset = cursor - img_pos * new_scale;
        self.state.scale = new_scale;
    }

    /// Step the scale without adjusting the pan offset.
    pub fn step_scale(&mut self, direction: ZoomDirection) {
        self.state.scale =
            self.clamp_scale(self.state.scale + direction.sign() * self.config.zoom_step);
    }

    /// Button zoom in, anchored on the container center when the container is known.
    pub fn zoom_in(&mut self) {
        self.zoom_button(ZoomDirection::In);
    }

    /// Button zoom out, anchored on the container center when the container is known.
    pub fn zoom_out(&mut self) {
        self.zoom_button(ZoomDirection::Out);
    }

    fn zoom_button(&mut self, direction: ZoomDirection) {
        match self.container_size {
            Some(container) => self.zoom_at_point(container.to_vec2() / 2.0, direction),
            None => self.step_scale(direction),
        }
    }

    /// Re-fit the current image to the current container. No-op without an image.
    pub fn zoom_reset(&mut self) {
        if let (Some(image), Some(container)) = (self.image_size, self.container_size) {
            let (scale, pan_offset) = self.fit(image, container, self.padding);
            self.state.scale = scale;
            self.state.pan_offset = pan_offset;
        }
    }

    /// Forget the image and return to scale 1 with no pan.
    pub fn reset_viewport(&mut self) {
        self.state = ViewState::default();
        self.pan_start = None;
        self.image_size = None;
    }

    /// Begin a pan gesture anchored at `screen`.
    pub fn start_pan(&mut self, screen: Vec2, is_middle_button: bool) {
        self.state.is_panning = true;
        if is_middle_button {
            self.state.is_middle_mouse_down = true;
        }
        self.pan_start = Some(screen - self.state.pan_offset);
    }

    /// Move the active pan gesture to `screen`. Returns `false` when not panning.
    pub fn update_pan(&mut self, screen: Vec2) -> bool {
        match (self.state.is_panning, self.pan_start) {
            (true, Some(start)) => {
                self.state.pan_offset = screen - start;
                true
            }
            _ => false,
        }
    }

    /// End any pan gesture, whichever input started it.
    pub fn end_pan(&mut self) {
        self.state.is_panning = false;
        self.state.is_middle_mouse_down = false;
        self.pan_start = None;
    }

    /// Track the space key. Releasing it ends a space-driven pan but not a middle-button one.
    pub fn set_space_pressed(&mut self, pressed: bool) {
        self.state.is_space_pressed = pressed;
        if !pressed && !self.state.is_middle_mouse_down {
            self.state.is_panning = false;
            self.pan_start = None;
        }
    }

    /// Container position to image pixel position.
    pub fn to_image_space(&self, screen: Vec2) -> Vec2 {
        (screen - self.state.pan_offset) / self.state.scale
    }

    /// Image pixel position to container position.
    pub fn to_screen_space(&self, image: Vec2) -> Vec2 {
        image * self.state.scale + self.state.pan_offset
    }

    /// Where the image is drawn inside the container, if one is loaded.
    pub fn display_rect(&self) -> Option<Rect> {
        self.image_size.map(|size| {
            Rect::from_min_size(
                self.state.pan_offset,
                Size::new(size.width * self.state.scale, size.height * self.state.scale),
            )
        })
    }

    /// Scale as a whole percentage, for display.
    pub fn zoom_percent(&self) -> u32 {
        (self.state.scale * 100.0).round() as u32
    }

    pub fn cursor_hint(&self) -> CursorHint {
        if self.state.is_panning {
            CursorHint::Grabbing
        } else if self.state.is_space_pressed || self.state.is_middle_mouse_down {
            CursorHint::Grab
        } else {
            CursorHint::Default
        }
    }
}
