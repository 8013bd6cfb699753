use std::fmt;

use shotlens_core::geometry::Vec2;
use shotlens_core::viewport::{measure_delta, DeltaMode, RectDrag, Roi};

/// What a primary click/drag on the viewport does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolKind {
    #[default]
    ColorPick,
    Roi,
    Delta,
    RoiOffset,
    Template,
}

impl ToolKind {
    pub const ALL: &[Self] = &[
        Self::ColorPick,
        Self::Roi,
        Self::Delta,
        Self::RoiOffset,
        Self::Template,
    ];

    /// Whether a primary drag draws a rectangle.
    pub fn draws_rect(self) -> bool {
        matches!(self, Self::Roi | Self::RoiOffset | Self::Template)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColorPick => write!(f, "Color Pick"),
            Self::Roi => write!(f, "ROI"),
            Self::Delta => write!(f, "Delta"),
            Self::RoiOffset => write!(f, "ROI Offset"),
            Self::Template => write!(f, "Template"),
        }
    }
}

/// Which rectangle the ROI offset tool is drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OffsetSlot {
    #[default]
    Source,
    Target,
}

/// Selection tools; all coordinates are image pixels.
#[derive(Default)]
pub struct ToolState {
    pub active: ToolKind,
    pub drag: Option<RectDrag>,
    pub roi: Option<Roi>,
    pub offset_slot: OffsetSlot,
    pub offset_source: Option<Roi>,
    pub offset_target: Option<Roi>,
    pub delta_mode: DeltaMode,
    pub delta_points: Option<(Vec2, Vec2)>,
    pub delta_dragging: bool,
    pub template: Option<Roi>,
    /// Blend the match overlay into a saved template.
    pub template_with_mask: bool,
}

impl ToolState {
    pub fn delta(&self) -> Option<i32> {
        self.delta_points
            .map(|(start, end)| measure_delta(start, end, self.delta_mode))
    }

    pub fn offset(&self) -> Option<[i32; 4]> {
        match (self.offset_source, self.offset_target) {
            (Some(source), Some(target)) => Some(source.offset_to(target)),
            _ => None,
        }
    }

    /// Store a finished rectangle for the active tool.
    pub fn finish_rect(&mut self, roi: Roi) {
        match self.active {
            ToolKind::RoiOffset => match self.offset_slot {
                OffsetSlot::Source => {
                    self.offset_source = Some(roi);
                    self.offset_slot = OffsetSlot::Target;
                }
                OffsetSlot::Target => self.offset_target = Some(roi),
            },
            ToolKind::Template => self.template = Some(roi),
            _ => self.roi = Some(roi),
        }
    }

    pub fn clear(&mut self) {
        let active = self.active;
        let delta_mode = self.delta_mode;
        let template_with_mask = self.template_with_mask;
        *self = Self {
            active,
            delta_mode,
            template_with_mask,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_tool_fills_source_then_target() {
        let mut tools = ToolState {
            active: ToolKind::RoiOffset,
            ..ToolState::default()
        };
        tools.finish_rect(Roi::new(10, 10, 20, 20));
        assert_eq!(tools.offset_slot, OffsetSlot::Target);
        tools.finish_rect(Roi::new(15, 5, 25, 20));

        assert_eq!(tools.offset(), Some([5, -5, 5, 0]));
        assert!(tools.roi.is_none());
    }

    #[test]
    fn test_template_rect_has_its_own_slot() {
        let mut tools = ToolState {
            active: ToolKind::Template,
            ..ToolState::default()
        };
        tools.finish_rect(Roi::new(1, 2, 3, 4));
        assert_eq!(tools.template, Some(Roi::new(1, 2, 3, 4)));
        assert!(tools.roi.is_none());
        assert!(ToolKind::Template.draws_rect());
        assert!(!ToolKind::Delta.draws_rect());
    }

    #[test]
    fn test_clear_keeps_tool_choice() {
        let mut tools = ToolState {
            active: ToolKind::Template,
            template_with_mask: true,
            template: Some(Roi::new(0, 0, 5, 5)),
            ..ToolState::default()
        };
        tools.clear();
        assert_eq!(tools.active, ToolKind::Template);
        assert!(tools.template_with_mask);
        assert!(tools.template.is_none());
    }
}
