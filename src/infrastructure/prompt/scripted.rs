//! Scripted Prompter
//!
//! Replays a fixed list of answers and records every screen it was shown.

use std::collections::VecDeque;

use crate::domain::ports::{PromptResponse, Prompter};
use crate::error::{MenuError, MenuResult};

/// Prompter that answers from a queue.
///
/// Running out of answers behaves like a closed input stream.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    responses: VecDeque<PromptResponse>,
    screens: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    /// Answers as `(confirmed, selected)` pairs, `selected` 0-based.
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = (bool, i64)>,
    {
        Self::from_responses(
            answers
                .into_iter()
                .map(|(confirmed, selected)| PromptResponse {
                    confirmed,
                    selected,
                }),
        )
    }

    pub fn from_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = PromptResponse>,
    {
        Self {
            responses: responses.into_iter().collect(),
            screens: Vec::new(),
        }
    }

    /// Option lists shown so far, in order
    pub fn screens(&self) -> &[Vec<String>] {
        &self.screens
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, _prompt: &str, options: &[String]) -> MenuResult<PromptResponse> {
        if options.is_empty() {
            return Err(MenuError::EmptyOptions);
        }
        self.screens.push(options.to_vec());
        self.responses.pop_front().ok_or(MenuError::InputClosed)
    }
}
