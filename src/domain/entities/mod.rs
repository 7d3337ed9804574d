//! Domain Entities
//!
//! The menu tree supplied by the caller and the navigation state walked over it.

pub mod menu_tree;
pub mod navigation;

pub use menu_tree::{Branch, Layer, MenuTree};
pub use navigation::{NavigationState, Outcome, Selection, Transition};
