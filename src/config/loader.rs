//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

use super::types::{ClearMode, Config, OnInvalid};

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "menutree.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// An environment override whose value was not understood and was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvWarning {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| MenuError::Config {
        file: path.to_path_buf(),
        message: format!("cannot read file: {}", e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the configuration to use.
///
/// An explicit path must exist. Otherwise `cwd/menutree.toml`, then
/// `user_config_dir/menutree/config.toml`, then defaults. Environment
/// overrides are not applied here.
///
/// Returns the config, its warnings, and the file it came from.
pub fn resolve(
    explicit: Option<&Path>,
    cwd: &Path,
    user_config_dir: Option<&Path>,
) -> MenuResult<(Config, Vec<ConfigWarning>, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((config, warnings, Some(path.to_path_buf())));
    }

    let candidates = std::iter::once(cwd.join(CONFIG_FILE_NAME))
        .chain(user_config_dir.map(|dir| dir.join("menutree").join("config.toml")));

    for candidate in candidates {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((config, warnings, Some(candidate)));
        }
    }

    Ok((Config::default(), Vec::new(), None))
}

/// Apply environment variable overrides (MENUTREE_* prefix).
///
/// Unrecognized values leave the setting as it was and produce a warning.
pub fn with_env_overrides(config: Config) -> (Config, Vec<EnvWarning>) {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<EnvWarning>) {
    let mut warnings = Vec::new();
    let mut reject = |var: &'static str, value: String, expected: &'static str| {
        warnings.push(EnvWarning {
            var,
            value,
            expected,
        })
    };

    if let Some(mode) = get_env("MENUTREE_CLEAR") {
        match mode.trim().to_lowercase().as_str() {
            "auto" => config.display.clear = ClearMode::Auto,
            "always" | "1" | "true" => config.display.clear = ClearMode::Always,
            "never" | "0" | "false" => config.display.clear = ClearMode::Never,
            _ => reject("MENUTREE_CLEAR", mode, "auto, always or never"),
        }
    }

    if let Some(policy) = get_env("MENUTREE_ON_INVALID") {
        match policy.trim().to_lowercase().as_str() {
            "abort" => config.input.on_invalid = OnInvalid::Abort,
            "retry" => config.input.on_invalid = OnInvalid::Retry,
            _ => reject("MENUTREE_ON_INVALID", policy, "abort or retry"),
        }
    }

    if let Some(attempts) = get_env("MENUTREE_MAX_ATTEMPTS") {
        match attempts.trim().parse::<u32>() {
            Ok(n) => config.input.max_attempts = n,
            Err(_) => reject("MENUTREE_MAX_ATTEMPTS", attempts, "a whole number"),
        }
    }

    (config, warnings)
}

/// First line defining `key` as a TOML key or table header, 1-based.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim();
            let is_assignment = line
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            let is_header = line
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .is_some_and(|name| name.trim() == key);
            is_assignment || is_header
        })
        .map(|idx| idx + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "display",
    "clear",
    "marker",
    "confirm_text",
    "input",
    "on_invalid",
    "max_attempts",
];

/// Closest known key within two edits.
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(dist, _)| *dist <= 2)
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, single row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != *cb));
            diagonal = above;
        }
    }

    row[b.len()]
}
