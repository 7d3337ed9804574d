//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::InputPolicy;
use crate::error::MenuResult;
use crate::infrastructure::prompt::TerminalStyle;
use crate::ui::render::{DEFAULT_CONFIRM_TEXT, DEFAULT_MARKER};

use super::loader::{self, ConfigWarning, EnvWarning};

/// When to clear the screen before redrawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearMode {
    /// Only on an interactive, non-dumb terminal outside CI
    #[default]
    Auto,
    Always,
    Never,
}

/// What to do after an unusable answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnInvalid {
    /// End the session with the error
    #[default]
    Abort,
    /// Show the same screen again
    Retry,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub clear: ClearMode,

    #[serde(default = "default_marker")]
    pub marker: String,

    #[serde(default = "default_confirm_text")]
    pub confirm_text: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clear: ClearMode::default(),
            marker: default_marker(),
            confirm_text: default_confirm_text(),
        }
    }
}

impl DisplayConfig {
    /// Prompter style, with the clear mode already resolved against the terminal
    pub fn terminal_style(&self, clear: bool) -> TerminalStyle {
        TerminalStyle {
            clear,
            marker: self.marker.clone(),
            confirm_text: self.confirm_text.clone(),
        }
    }
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_confirm_text() -> String {
    DEFAULT_CONFIRM_TEXT.to_string()
}

/// Input handling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub on_invalid: OnInvalid,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            on_invalid: OnInvalid::default(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl InputConfig {
    pub fn policy(&self) -> InputPolicy {
        match self.on_invalid {
            OnInvalid::Abort => InputPolicy::Abort,
            OnInvalid::Retry => InputPolicy::Retry {
                max_attempts: self.max_attempts.max(1),
            },
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (MENUTREE_* prefix), reporting
    /// values that were not understood.
    pub fn with_env_overrides(self) -> (Self, Vec<EnvWarning>) {
        loader::with_env_overrides(self)
    }
}
