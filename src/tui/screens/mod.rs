//! TUI screen implementations.

pub mod help;
pub mod menu_display;
pub mod menu_input;

pub use help::{HelpState, draw_help};
pub use menu_display::{MenuDisplayState, draw_menu_display};
pub use menu_input::{MenuInputState, draw_menu_input};
