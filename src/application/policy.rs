//! Input error policy

/// What the navigator does when the user types something unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Surface the first input error and end the session
    #[default]
    Abort,
    /// Show the same screen again, giving up after `max_attempts`
    /// consecutive input errors
    Retry { max_attempts: u32 },
}

impl InputPolicy {
    /// Whether another attempt is allowed after `failures` consecutive errors.
    pub fn allows_retry(&self, failures: u32) -> bool {
        match self {
            InputPolicy::Abort => false,
            InputPolicy::Retry { max_attempts } => failures < *max_attempts,
        }
    }
}
