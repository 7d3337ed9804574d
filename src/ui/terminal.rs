use is_terminal::IsTerminal;

use crate::config::ClearMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub is_dumb: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Whether clear-screen escape sequences would do what they say.
    pub fn can_clear(&self) -> bool {
        self.is_tty && !self.is_dumb && !self.is_ci
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();

    TerminalCapabilities {
        is_tty,
        is_dumb: term.eq_ignore_ascii_case("dumb"),
        is_ci: is_ci_env(&get_env),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

/// Resolve the configured clear mode against what the terminal supports.
pub fn should_clear(mode: ClearMode, caps: TerminalCapabilities) -> bool {
    match mode {
        ClearMode::Always => true,
        ClearMode::Never => false,
        ClearMode::Auto => caps.can_clear(),
    }
}
