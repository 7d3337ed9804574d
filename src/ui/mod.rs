//! Terminal presentation: screen rendering and terminal capability detection.

pub mod render;
pub mod terminal;

pub use render::{clear_screen, format_options, render_screen};
pub use terminal::{detect_capabilities, should_clear, TerminalCapabilities};
