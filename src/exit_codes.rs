//! Stable exit codes for the menutree binary.

/// An option was confirmed, or the user exited from the top layer.
pub const OK: i32 = 0;
/// Unexpected failure (I/O, broken terminal).
pub const FAILURE: i32 = 1;
/// Invalid configuration or menu tree.
pub const INVALID: i32 = 2;
/// The user's answer could not be used, or input ended early.
pub const INPUT: i32 = 3;
