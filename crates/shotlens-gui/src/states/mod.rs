mod picker;
mod tools;
mod ui;
mod viewport;

pub use picker::PickerState;
pub use tools::{OffsetSlot, ToolKind, ToolState};
pub use ui::{BusyTask, UIState};
pub use viewport::ViewportState;
