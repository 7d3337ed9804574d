//! Navigation state machine
//!
//! `NavigationState` holds where the user is in a [`MenuTree`] and applies one
//! prompt response at a time. It performs no I/O; the navigator in the
//! application layer feeds it responses from a [`Prompter`](crate::domain::ports::Prompter).

use serde::Serialize;

use crate::domain::ports::PromptResponse;
use crate::error::{MenuError, MenuResult};

use super::menu_tree::{Branch, MenuTree};

/// The confirmed leaf option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Layer the option was confirmed on
    pub layer: usize,
    /// Branch (screen) displayed on that layer
    pub root_branch: usize,
    /// Index of the option within that screen
    pub option: usize,
    /// Label of the confirmed option
    pub label: String,
    /// Option index confirmed on each layer, from the top down
    pub trail: Vec<usize>,
}

impl Selection {
    /// `(layer, root_branch, option)`
    pub fn as_triple(&self) -> (usize, usize, usize) {
        (self.layer, self.root_branch, self.option)
    }
}

/// How a navigation session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A leaf option was confirmed
    Selected(Selection),
    /// The exit option was confirmed on the top layer
    Exited,
}

impl Outcome {
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Outcome::Selected(selection) => Some(selection),
            Outcome::Exited => None,
        }
    }
}

/// Result of applying one prompt response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Confirmation declined; same screen again
    Declined,
    /// Moved one layer down into a submenu
    Descended,
    /// Exit/back on a deeper layer; now on the parent screen
    Backed,
    /// Session is over
    Finished(Outcome),
}

/// Where the user currently is.
///
/// Invariant: `parents.len() == layer` and `trail.len() == layer`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Whether the last response was confirmed
    pub confirmed: bool,
    /// Current depth
    pub layer: usize,
    /// Branch (screen) shown on the current layer
    pub branch: usize,
    /// Branch on the parent layer that led here
    pub root_branch: usize,
    parents: Vec<usize>,
    trail: Vec<usize>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Option indices confirmed on the layers above the current one
    pub fn trail(&self) -> &[usize] {
        &self.trail
    }

    /// Labels for the screen at the current position.
    pub fn current_options<'t>(&self, tree: &'t MenuTree) -> MenuResult<&'t [String]> {
        tree.options(self.layer, self.branch)
            .ok_or_else(|| MenuError::InvalidTree {
                reason: format!(
                    "no screen of options at layer {}, branch {}",
                    self.layer + 1,
                    self.branch + 1
                ),
            })
    }

    /// Apply one response from the prompter.
    ///
    /// On error the state is left untouched so the same screen can be shown
    /// again.
    pub fn apply(&mut self, tree: &MenuTree, response: PromptResponse) -> MenuResult<Transition> {
        let options = self.current_options(tree)?;

        if !response.confirmed {
            self.confirmed = false;
            return Ok(Transition::Declined);
        }

        let selected = usize::try_from(response.selected)
            .ok()
            .filter(|&idx| idx < options.len())
            .ok_or(MenuError::OutOfRangeSelection {
                selection: response.selected.saturating_add(1),
                available: options.len(),
            })?;
        let label = options[selected].clone();

        self.root_branch = self.branch;
        self.branch = selected;
        self.confirmed = true;
        self.layer += 1;

        match tree.branch(self.layer, selected) {
            None | Some(Branch::Leaf) => {
                let mut trail = self.trail.clone();
                trail.push(selected);
                Ok(Transition::Finished(Outcome::Selected(Selection {
                    layer: self.layer - 1,
                    root_branch: self.root_branch,
                    option: selected,
                    label,
                    trail,
                })))
            }
            Some(Branch::Exit) if self.layer == 1 => Ok(Transition::Finished(Outcome::Exited)),
            Some(Branch::Exit) => {
                // Back to the screen the parent layer showed.
                self.layer -= 2;
                self.branch = self.parents.pop().unwrap_or_default();
                self.trail.pop();
                self.root_branch = self.parents.last().copied().unwrap_or_default();
                self.confirmed = false;
                Ok(Transition::Backed)
            }
            Some(Branch::Submenu(_)) => {
                self.parents.push(self.root_branch);
                self.trail.push(selected);
                Ok(Transition::Descended)
            }
        }
    }
}
