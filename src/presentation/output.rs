//! Output Rendering
//!
//! Formats the session result and errors for the terminal.

use crate::config::{ConfigWarning, EnvWarning};
use crate::domain::entities::Selection;
use crate::error::MenuError;
use crate::exit_codes;

/// Result line: `layer root_branch option`, or a JSON object.
pub fn format_selection(selection: &Selection, json: bool) -> String {
    if json {
        serde_json::to_string(selection).unwrap_or_else(|_| format_triple(selection))
    } else {
        format_triple(selection)
    }
}

fn format_triple(selection: &Selection) -> String {
    let (layer, root_branch, option) = selection.as_triple();
    format!("{} {} {}", layer, root_branch, option)
}

pub fn format_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => format!(
            "[WARN] unknown config key '{}' in {} (did you mean '{}'?)\n",
            warning.key, location, suggestion
        ),
        None => format!("[WARN] unknown config key '{}' in {}\n", warning.key, location),
    }
}

pub fn format_env_warning(warning: &EnvWarning) -> String {
    format!(
        "[WARN] ignoring {}='{}' (expected {})\n",
        warning.var, warning.value, warning.expected
    )
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {:#}\n", err);

    let hint = match err.downcast_ref::<MenuError>() {
        Some(e) if e.is_input_error() => {
            Some("rerun with --retry to show the screen again after invalid input")
        }
        Some(MenuError::InvalidTree { .. }) | Some(MenuError::InvalidTreeLiteral(_)) => Some(
            "--tree expects layers of screens of labels, e.g. [[[\"A\",\"Exit\"]],[null,[]]]",
        ),
        _ => None,
    };
    if let Some(hint) = hint {
        out.push_str(&format!("  hint: {}\n", hint));
    }

    out
}

/// Exit code for a failed run.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<MenuError>() {
        Some(e) if e.is_input_error() => exit_codes::INPUT,
        Some(MenuError::InputClosed) => exit_codes::INPUT,
        Some(MenuError::InvalidTree { .. })
        | Some(MenuError::InvalidTreeLiteral(_))
        | Some(MenuError::Config { .. })
        | Some(MenuError::EmptyOptions) => exit_codes::INVALID,
        _ => exit_codes::FAILURE,
    }
}
