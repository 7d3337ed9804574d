//! Prompter Port
//!
//! This trait defines how the navigator shows one screen of options and gets
//! the user's answer back. Implementations can be interactive (a terminal) or
//! scripted (tests, replays).

use crate::error::MenuResult;

/// Answer to one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptResponse {
    /// Whether the user confirmed the selection
    pub confirmed: bool,
    /// 0-based selection as typed minus one. Not bounds-checked; may be
    /// negative or past the end of the option list.
    pub selected: i64,
}

/// Trait for presenting a screen of options.
///
/// Implementations can be:
/// - `TerminalPrompter`: numbered list on a text terminal, answers read line by line
/// - `ScriptedPrompter`: replays a fixed list of answers
pub trait Prompter {
    /// Show `options` under `prompt`, read a selection and a confirmation.
    ///
    /// `options` must be non-empty.
    fn prompt(&mut self, prompt: &str, options: &[String]) -> MenuResult<PromptResponse>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn prompt(&mut self, prompt: &str, options: &[String]) -> MenuResult<PromptResponse> {
        (**self).prompt(prompt, options)
    }
}
