//! Domain Layer
//!
//! Pure navigation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Menu tree and navigation state
//! - `ports/` - Interface the navigator uses to talk to the user
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never reads input or writes to the terminal
//! 2. **Ports & Adapters** - All user interaction goes through the `Prompter` port

pub mod entities;
pub mod ports;
