//! Configuration module for menutree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MENUTREE_*)
//! 3. Explicit `--config` file, else `./menutree.toml`
//! 4. User config (~/.config/menutree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{resolve, ConfigWarning, EnvWarning, CONFIG_FILE_NAME};
pub use types::{ClearMode, Config, DisplayConfig, InputConfig, OnInvalid};
