pub mod controls;
pub mod helpers;
pub mod menu_bar;
pub mod paste;
pub mod status;
pub mod tool_interaction;
pub mod viewport;
