use crate::geometry::Vec2;

use super::engine::Viewport;

/// Pan mode of the pointer over an open screenshot.
///
/// Holding space only arms a pan; the next primary press starts it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    Idle,
    SpaceHeld,
    MiddlePanning,
    SpacePanning,
}

impl InteractionMode {
    pub fn is_panning(self) -> bool {
        matches!(self, Self::MiddlePanning | Self::SpacePanning)
    }
}

/// Input events, with positions relative to the container's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    SpaceDown { repeat: bool },
    SpaceUp,
    MiddleDown(Vec2),
    PrimaryDown(Vec2),
    PointerMove(Vec2),
    ButtonUp,
    PointerLeave,
}

/// Whether the controller used an event or left it to the active tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handled {
    Consumed,
    Passthrough,
}

/// Drives a [`Viewport`]'s pan gestures from raw input events.
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionController {
    mode: InteractionMode,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Drop any gesture and return to `Idle`.
    pub fn reset(&mut self, viewport: &mut Viewport) {
        viewport.end_pan();
        viewport.set_space_pressed(false);
        self.mode = InteractionMode::Idle;
    }

    pub fn handle(&mut self, event: InputEvent, viewport: &mut Viewport) -> Handled {
        use InteractionMode::*;

        match (self.mode, event) {
            (_, InputEvent::SpaceDown { repeat: true }) => Handled::Consumed,

            (Idle, InputEvent::SpaceDown { repeat: false }) => {
                viewport.set_space_pressed(true);
                self.mode = SpaceHeld;
                Handled::Consumed
            }
            (_, InputEvent::SpaceDown { repeat: false }) => {
                viewport.set_space_pressed(true);
                Handled::Consumed
            }

            (SpaceHeld, InputEvent::SpaceUp) => {
                viewport.set_space_pressed(false);
                self.mode = Idle;
                Handled::Consumed
            }
            (SpacePanning, InputEvent::SpaceUp) => {
                viewport.set_space_pressed(false);
                viewport.end_pan();
                self.mode = Idle;
                Handled::Consumed
            }
            (MiddlePanning | Idle, InputEvent::SpaceUp) => {
                viewport.set_space_pressed(false);
                Handled::Consumed
            }

            (Idle | SpaceHeld, InputEvent::MiddleDown(p)) => {
                viewport.start_pan(p, true);
                self.mode = MiddlePanning;
                Handled::Consumed
            }
            (MiddlePanning | SpacePanning, InputEvent::MiddleDown(_)) => Handled::Consumed,

            (SpaceHeld, InputEvent::PrimaryDown(p)) => {
                viewport.start_pan(p, false);
                self.mode = SpacePanning;
                Handled::Consumed
            }
            (MiddlePanning | SpacePanning, InputEvent::PrimaryDown(_)) => Handled::Consumed,
            (Idle, InputEvent::PrimaryDown(_)) => Handled::Passthrough,

            (MiddlePanning | SpacePanning, InputEvent::PointerMove(p)) => {
                viewport.update_pan(p);
                Handled::Consumed
            }
            (Idle | SpaceHeld, InputEvent::PointerMove(_)) => Handled::Passthrough,

            (MiddlePanning | SpacePanning, InputEvent::ButtonUp | InputEvent::PointerLeave) => {
                viewport.end_pan();
                viewport.set_space_pressed(false);
                self.mode = Idle;
                Handled::Consumed
            }
            (Idle | SpaceHeld, InputEvent::ButtonUp | InputEvent::PointerLeave) => {
                Handled::Passthrough
            }
        }
    }
}
