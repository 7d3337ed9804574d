//! Menu tree entity
//!
//! A menu is stored as layers of branches of option labels. The branch at
//! index `i` of layer `n` is the screen reached by confirming option `i` on
//! any screen of layer `n - 1`. Layer 0 is entered at branch 0.

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};

/// What confirming an option leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum Branch {
    /// Another screen of options
    Submenu(Vec<String>),
    /// Nothing below: confirming the option that leads here ends the session
    Leaf,
    /// Reserved exit/back slot
    Exit,
}

impl Branch {
    pub fn submenu<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Branch::Submenu(labels.into_iter().map(Into::into).collect())
    }

    /// Option labels, if this branch is a screen
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Branch::Submenu(labels) => Some(labels),
            Branch::Leaf | Branch::Exit => None,
        }
    }
}

// JSON shape: a label list is a screen, `[]` is the exit slot, `null` is a leaf.
impl From<Option<Vec<String>>> for Branch {
    fn from(raw: Option<Vec<String>>) -> Self {
        match raw {
            None => Branch::Leaf,
            Some(labels) if labels.is_empty() => Branch::Exit,
            Some(labels) => Branch::Submenu(labels),
        }
    }
}

impl From<Branch> for Option<Vec<String>> {
    fn from(branch: Branch) -> Self {
        match branch {
            Branch::Submenu(labels) => Some(labels),
            Branch::Exit => Some(Vec::new()),
            Branch::Leaf => None,
        }
    }
}

/// One depth level of the menu
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layer {
    branches: Vec<Branch>,
}

impl Layer {
    pub fn new(branches: Vec<Branch>) -> Self {
        Self { branches }
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn branch(&self, index: usize) -> Option<&Branch> {
        self.branches.get(index)
    }
}

/// Read-only menu supplied by the caller for a navigation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MenuTree {
    layers: Vec<Layer>,
}

impl MenuTree {
    /// Build a validated tree.
    pub fn new(layers: Vec<Layer>) -> MenuResult<Self> {
        let tree = Self { layers };
        tree.validate()?;
        Ok(tree)
    }

    /// Build from plain nested label lists. An empty list marks an exit slot.
    ///
    /// ```
    /// use menutree::MenuTree;
    ///
    /// let tree = MenuTree::from_labels(vec![
    ///     vec![vec!["A", "B", "Exit"]],
    ///     vec![vec!["X", "Y"], vec!["Z"], vec![]],
    /// ])
    /// .unwrap();
    /// assert_eq!(tree.depth(), 2);
    /// ```
    pub fn from_labels<S: Into<String>>(layers: Vec<Vec<Vec<S>>>) -> MenuResult<Self> {
        let layers = layers
            .into_iter()
            .map(|branches| {
                Layer::new(
                    branches
                        .into_iter()
                        .map(|labels| {
                            let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
                            Branch::from(Some(labels))
                        })
                        .collect(),
                )
            })
            .collect();
        Self::new(layers)
    }

    /// Parse a JSON tree literal (`[[["A","B","Exit"]], [["X"], null, []]]`).
    pub fn from_json(json: &str) -> MenuResult<Self> {
        let layers: Vec<Layer> = serde_json::from_str(json)?;
        Self::new(layers)
    }

    /// Number of layers
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Branch at `(layer, branch)`, or `None` when nothing is defined there.
    pub fn branch(&self, layer: usize, branch: usize) -> Option<&Branch> {
        self.layers.get(layer)?.branch(branch)
    }

    /// Option labels shown at `(layer, branch)`, if that position is a screen.
    pub fn options(&self, layer: usize, branch: usize) -> Option<&[String]> {
        self.branch(layer, branch)?.options()
    }

    fn validate(&self) -> MenuResult<()> {
        match self.branch(0, 0) {
            Some(Branch::Submenu(_)) => {}
            Some(other) => {
                return Err(invalid(format!(
                    "layer 1 must open with a screen of options, found {:?}",
                    other
                )))
            }
            None => return Err(invalid("menu has no top-level screen")),
        }

        for (layer_idx, layer) in self.layers.iter().enumerate() {
            for (branch_idx, branch) in layer.branches().iter().enumerate() {
                if let Branch::Submenu(labels) = branch {
                    if labels.is_empty() {
                        return Err(invalid(format!(
                            "screen {} in layer {} has no options",
                            branch_idx + 1,
                            layer_idx + 1
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

impl<'de> Deserialize<'de> for MenuTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let layers = Vec::<Layer>::deserialize(deserializer)?;
        MenuTree::new(layers).map_err(serde::de::Error::custom)
    }
}

fn invalid(reason: impl Into<String>) -> MenuError {
    MenuError::InvalidTree {
        reason: reason.into(),
    }
}
