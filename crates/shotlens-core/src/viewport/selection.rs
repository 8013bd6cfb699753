use std::fmt;

use crate::geometry::{Size, Vec2};

/// Region of interest `[x, y, width, height]` in whole image pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Roi {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Roi {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn to_array(self) -> [i32; 4] {
        [self.x, self.y, self.width, self.height]
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Componentwise `target - self`, the `roi_offset` field format.
    pub fn offset_to(self, target: Roi) -> [i32; 4] {
        [
            target.x - self.x,
            target.y - self.y,
            target.width - self.width,
            target.height - self.height,
        ]
    }

    /// Apply an `[dx, dy, dw, dh]` offset.
    pub fn apply_offset(self, offset: [i32; 4]) -> Roi {
        Roi::new(
            self.x + offset[0],
            self.y + offset[1],
            self.width + offset[2],
            self.height + offset[3],
        )
    }
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x, self.y, self.width, self.height)
    }
}

/// A rectangle being drawn by dragging, in image-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectDrag {
    pub start: Vec2,
    pub current: Vec2,
}

impl RectDrag {
    pub fn new(start: Vec2) -> Self {
        Self {
            start,
            current: start,
        }
    }

    pub fn update(&mut self, current: Vec2) {
        self.current = current;
    }

    /// Top-left corner and non-negative size, whichever way the drag went.
    pub fn normalized(&self) -> (Vec2, Size) {
        let min = self.start.min(self.current);
        let extent = self.start.max(self.current) - min;
        (min, Size::new(extent.x, extent.y))
    }

    pub fn to_roi(&self) -> Roi {
        let (min, size) = self.normalized();
        Roi::new(
            min.x.round() as i32,
            min.y.round() as i32,
            size.width.round() as i32,
            size.height.round() as i32,
        )
    }

    /// Like [`to_roi`](Self::to_roi) but clipped to the image bounds.
    /// Returns `None` if nothing of the rectangle lies inside the image.
    pub fn to_roi_clamped(&self, image: Size) -> Option<Roi> {
        let (min, size) = self.normalized();
        let x0 = min.x.max(0.0);
        let y0 = min.y.max(0.0);
        let x1 = (min.x + size.width).min(image.width);
        let y1 = (min.y + size.height).min(image.height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        let x = x0.round() as i32;
        let y = y0.round() as i32;
        Some(Roi::new(
            x,
            y,
            x1.round() as i32 - x,
            y1.round() as i32 - y,
        ))
    }
}

/// Axis measured by the delta tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeltaMode {
    #[default]
    Dx,
    Dy,
}

impl DeltaMode {
    pub fn key(self) -> &'static str {
        match self {
            Self::Dx => "dx",
            Self::Dy => "dy",
        }
    }
}

impl fmt::Display for DeltaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Rounded displacement from `start` to `end` along one axis, in image pixels.
pub fn measure_delta(start: Vec2, end: Vec2, mode: DeltaMode) -> i32 {
    match mode {
        DeltaMode::Dx => (end.x - start.x).round() as i32,
        DeltaMode::Dy => (end.y - start.y).round() as i32,
    }
}
