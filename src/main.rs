//! menutree CLI
//!
//! Usage: menutree [--tree <JSON>] [--prompt <TEXT>]
//!
//! Walks the menu on the terminal and prints `layer root_branch option` for
//! the confirmed option. Prints nothing when the user exits from the top.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use menutree::config::{self, Config};
use menutree::exit_codes;
use menutree::presentation::output::{
    exit_code_for, format_env_warning, format_error, format_selection, format_warning,
};
use menutree::presentation::sample::sample_tree;
use menutree::presentation::{create_navigator, Cli};
use menutree::{MenuTree, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();
    menutree::logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::OK as u8),
        Err(err) => {
            eprint!("{}", format_error(&err));
            ExitCode::from(exit_code_for(&err) as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    tracing::debug!(?config, "configuration resolved");

    let tree = match &cli.tree {
        Some(json) => MenuTree::from_json(json).context("failed to read --tree")?,
        None => sample_tree()?,
    };

    let mut navigator = create_navigator(&config);
    match navigator.navigate(&tree, &cli.prompt)? {
        Outcome::Selected(selection) => println!("{}", format_selection(&selection, cli.json)),
        Outcome::Exited => tracing::info!("exited from the top layer"),
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let user_dir = dirs::config_dir();

    let (config, warnings, source) = config::resolve(cli.config.as_deref(), &cwd, user_dir.as_deref())
        .with_context(|| match &cli.config {
            Some(path) => format!("failed to load config {}", path.display()),
            None => "failed to load config".to_string(),
        })?;

    if let Some(source) = &source {
        tracing::debug!(path = %source.display(), "loaded config");
    }
    for warning in &warnings {
        eprint!("{}", format_warning(warning));
    }

    let (config, env_warnings) = config.with_env_overrides();
    for warning in &env_warnings {
        eprint!("{}", format_env_warning(warning));
    }

    Ok(cli.apply_to(config))
}
