//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all terminal I/O.
//!
//! ## Structure
//!
//! - `prompt/` - Prompter implementations (terminal, scripted)

pub mod prompt;

// Re-export for convenience
pub use prompt::{ScriptedPrompter, TerminalPrompter, TerminalStyle};
