//! Error types for menutree
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for menutree operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu navigation
#[derive(Error, Debug)]
pub enum MenuError {
    /// Selection line could not be parsed as an integer
    #[error("Please enter a valid selection (got '{input}')")]
    InvalidSelectionFormat { input: String },

    /// Confirmation line was not y/n/empty
    #[error("Input was not Y/n (got '{input}')")]
    InvalidConfirmationFormat { input: String },

    /// A well-formed number that does not name an option on the current screen.
    /// `selection` is the 1-based number as typed.
    #[error("selection {selection} is out of range (choose 1-{available})")]
    OutOfRangeSelection { selection: i64, available: usize },

    /// The prompter was handed an empty option list
    #[error("cannot prompt with an empty option list")]
    EmptyOptions,

    /// Menu tree failed validation
    #[error("invalid menu tree: {reason}")]
    InvalidTree { reason: String },

    /// Tree literal was not valid JSON of the expected shape
    #[error("invalid menu tree literal: {0}")]
    InvalidTreeLiteral(#[from] serde_json::Error),

    /// Input stream ended while waiting for an answer
    #[error("input closed before an answer was given")]
    InputClosed,

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MenuError {
    /// Errors caused by what the user typed. A host may re-prompt on these.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MenuError::InvalidSelectionFormat { .. }
                | MenuError::InvalidConfirmationFormat { .. }
                | MenuError::OutOfRangeSelection { .. }
        )
    }
}
