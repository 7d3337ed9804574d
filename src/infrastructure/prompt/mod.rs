//! Infrastructure implementations for Prompter
//!
//! This module provides concrete implementations of the `Prompter` trait.

mod scripted;
mod terminal;

pub use scripted::ScriptedPrompter;
pub use terminal::{parse_confirmation, parse_selection, TerminalPrompter, TerminalStyle};
