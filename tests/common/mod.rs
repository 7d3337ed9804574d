//! Common test utilities for menutree CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory and config home, plus a runner
//!   that pipes scripted answers into the binary
//! - Fixtures: Reusable menu tree literals

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
