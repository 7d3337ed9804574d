//! Navigator Factory
//!
//! Creates a navigator with the terminal prompter wired up from configuration.
//! This is the dependency injection point for the binary.

use std::io::{StdinLock, Stdout};

use crate::application::Navigator;
use crate::config::Config;
use crate::infrastructure::prompt::TerminalPrompter;
use crate::ui::terminal::{detect_capabilities, should_clear};

/// Navigator reading stdin and drawing on stdout
pub type StdioNavigator = Navigator<TerminalPrompter<StdinLock<'static>, Stdout>>;

/// Create a navigator bound to the process's terminal
pub fn create_navigator(config: &Config) -> StdioNavigator {
    let clear = should_clear(config.display.clear, detect_capabilities());
    let prompter = TerminalPrompter::stdio(config.display.terminal_style(clear));
    Navigator::new(prompter).with_policy(config.input.policy())
}
