//! Navigator
//!
//! Drives a session: shows the screen at the current position through the
//! [`Prompter`] port, feeds the answer to [`NavigationState`], and repeats
//! until a leaf is confirmed or the user exits from the top layer.

use tracing::{debug, warn};

use crate::domain::entities::{MenuTree, NavigationState, Outcome, Transition};
use crate::domain::ports::Prompter;
use crate::error::MenuResult;

use super::policy::InputPolicy;

/// Walks a [`MenuTree`] with the user's answers.
pub struct Navigator<P>
where
    P: Prompter,
{
    prompter: P,
    policy: InputPolicy,
}

impl<P> Navigator<P>
where
    P: Prompter,
{
    /// Create a navigator that aborts on the first input error
    pub fn new(prompter: P) -> Self {
        Self {
            prompter,
            policy: InputPolicy::default(),
        }
    }

    /// Set the input error policy
    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Run one session over `tree`, showing `prompt` above every screen.
    ///
    /// Returns `Outcome::Exited` when the user leaves from the top layer.
    /// Input errors end the session unless the policy allows a retry.
    pub fn navigate(&mut self, tree: &MenuTree, prompt: &str) -> MenuResult<Outcome> {
        let mut state = NavigationState::new();
        let mut failures = 0u32;

        loop {
            let options = state.current_options(tree)?;
            let step = self
                .prompter
                .prompt(prompt, options)
                .and_then(|response| state.apply(tree, response));

            let transition = match step {
                Ok(transition) => {
                    failures = 0;
                    transition
                }
                Err(err) if err.is_input_error() && self.policy.allows_retry(failures + 1) => {
                    failures += 1;
                    warn!(
                        layer = state.layer,
                        branch = state.branch,
                        attempt = failures,
                        "{}",
                        err
                    );
                    continue;
                }
                Err(err) => return Err(err),
            };

            match transition {
                Transition::Declined => {
                    debug!(layer = state.layer, branch = state.branch, "selection declined");
                }
                Transition::Descended => {
                    debug!(
                        layer = state.layer,
                        branch = state.branch,
                        root_branch = state.root_branch,
                        "descended"
                    );
                }
                Transition::Backed => {
                    debug!(layer = state.layer, branch = state.branch, "backed out");
                }
                Transition::Finished(outcome) => {
                    match &outcome {
                        Outcome::Selected(selection) => debug!(
                            layer = selection.layer,
                            root_branch = selection.root_branch,
                            option = selection.option,
                            "leaf confirmed"
                        ),
                        Outcome::Exited => debug!("exit confirmed on top layer"),
                    }
                    return Ok(outcome);
                }
            }
        }
    }
}
