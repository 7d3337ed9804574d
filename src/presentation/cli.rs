//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ClearMode, Config, OnInvalid};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearWhen {
    Auto,
    Always,
    Never,
}

impl From<ClearWhen> for ClearMode {
    fn from(when: ClearWhen) -> Self {
        match when {
            ClearWhen::Auto => ClearMode::Auto,
            ClearWhen::Always => ClearMode::Always,
            ClearWhen::Never => ClearMode::Never,
        }
    }
}

/// menutree - walk a layered menu and print the confirmed option
#[derive(Parser, Debug)]
#[command(name = "menutree")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Type an option number, then confirm with y or Enter (n goes back to the same screen)."
)]
pub struct Cli {
    /// Text shown above every screen
    #[arg(short, long, default_value = "Select an option:")]
    pub prompt: String,

    /// Menu as a JSON literal: layers of screens of labels ([] = exit/back slot, null = leaf)
    #[arg(long, value_name = "JSON")]
    pub tree: Option<String>,

    /// Configuration file (default: ./menutree.toml, then the user config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the same screen again after invalid input instead of aborting
    #[arg(long)]
    pub retry: bool,

    /// When to clear the screen between redraws
    #[arg(long, value_enum)]
    pub clear: Option<ClearWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Layer CLI flags over a loaded configuration
    pub fn apply_to(&self, mut config: Config) -> Config {
        if self.retry {
            config.input.on_invalid = OnInvalid::Retry;
        }
        if let Some(clear) = self.clear {
            config.display.clear = clear.into();
        }
        config
    }
}
