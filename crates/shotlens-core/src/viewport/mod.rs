pub mod engine;
pub mod interaction;
pub mod selection;

pub use engine::{CursorHint, ViewState, Viewport, ZoomDirection};
pub use interaction::{Handled, InputEvent, InteractionController, InteractionMode};
pub use selection::{measure_delta, DeltaMode, RectDrag, Roi};
