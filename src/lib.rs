//! menutree - layered terminal menu navigator
//!
//! A menu is a tree of numbered option screens. The user types an option
//! number, confirms it, and walks down into submenus or back out through
//! reserved exit slots until a leaf option is confirmed.
//!
//! ```
//! use menutree::{MenuTree, Navigator, Outcome, ScriptedPrompter};
//!
//! let tree = MenuTree::from_labels(vec![
//!     vec![vec!["A", "B", "Exit"]],
//!     vec![vec!["X", "Y"], vec!["Z"], vec![]],
//! ])
//! .unwrap();
//!
//! // Confirm "A", then confirm "X".
//! let prompter = ScriptedPrompter::new([(true, 0), (true, 0)]);
//! let outcome = Navigator::new(prompter).navigate(&tree, "Pick one:").unwrap();
//!
//! match outcome {
//!     Outcome::Selected(selection) => assert_eq!(selection.as_triple(), (1, 0, 0)),
//!     Outcome::Exited => unreachable!(),
//! }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod exit_codes;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{InputPolicy, Navigator};
pub use config::Config;
pub use domain::entities::{Branch, Layer, MenuTree, NavigationState, Outcome, Selection, Transition};
pub use domain::ports::{PromptResponse, Prompter};
pub use error::{MenuError, MenuResult};
pub use infrastructure::prompt::{ScriptedPrompter, TerminalPrompter, TerminalStyle};
