//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the navigator with terminal dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line flags
//! - `factory` - Wires the terminal prompter into a navigator
//! - `output` - Result, warning and error rendering
//! - `sample` - Built-in menu

pub mod cli;
pub mod factory;
pub mod output;
pub mod sample;

pub use cli::{ClearWhen, Cli};
pub use factory::create_navigator;
