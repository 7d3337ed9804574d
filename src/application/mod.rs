//! Application Layer
//!
//! Orchestrates a navigation session.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain navigation rules (those are in `NavigationState`)
//! - Coordinates between the prompter and the state machine
//!
//! ## Use Cases
//!
//! - `Navigator` - Runs a session until a leaf is confirmed or the user exits
//! - `InputPolicy` - Abort or retry when the user types something unusable

pub mod navigator;
pub mod policy;

pub use navigator::Navigator;
pub use policy::InputPolicy;
