//! Terminal Prompter
//!
//! Shows a numbered option list and reads the selection and the Y/n
//! confirmation one line at a time.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::domain::ports::{PromptResponse, Prompter};
use crate::error::{MenuError, MenuResult};
use crate::ui::render::{clear_screen, render_screen, DEFAULT_CONFIRM_TEXT, DEFAULT_MARKER};

/// Display settings for the terminal prompter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalStyle {
    /// Emit clear-screen sequences before each redraw
    pub clear: bool,
    /// Appended to the selected line on the confirmation screen
    pub marker: String,
    /// Question printed under the marked list
    pub confirm_text: String,
}

impl Default for TerminalStyle {
    fn default() -> Self {
        Self {
            clear: true,
            marker: DEFAULT_MARKER.to_string(),
            confirm_text: DEFAULT_CONFIRM_TEXT.to_string(),
        }
    }
}

/// Prompter over a line-oriented reader and a writer.
///
/// Both are generic so sessions can be scripted with in-memory buffers.
pub struct TerminalPrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    input: R,
    output: W,
    style: TerminalStyle,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout
    pub fn stdio(style: TerminalStyle) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), style)
    }
}

impl<R, W> TerminalPrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, style: TerminalStyle) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    pub fn style(&self) -> &TerminalStyle {
        &self.style
    }

    /// Give back the writer, e.g. to inspect what was drawn
    pub fn into_output(self) -> W {
        self.output
    }

    fn draw(&mut self, prompt: &str, options: &[String], marked: Option<usize>) -> MenuResult<()> {
        if self.style.clear {
            clear_screen(&mut self.output)?;
        }
        let screen = render_screen(prompt, options, marked, &self.style.marker);
        self.output.write_all(screen.as_bytes())?;
        Ok(())
    }

    fn read_line(&mut self) -> MenuResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::InputClosed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

impl<R, W> Prompter for TerminalPrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    fn prompt(&mut self, prompt: &str, options: &[String]) -> MenuResult<PromptResponse> {
        if options.is_empty() {
            return Err(MenuError::EmptyOptions);
        }

        self.draw(prompt, options, None)?;
        self.output.flush()?;
        let selected = parse_selection(&self.read_line()?)?;

        self.draw(prompt, options, usize::try_from(selected).ok())?;
        writeln!(self.output, "{}", self.style.confirm_text)?;
        self.output.flush()?;
        let confirmed = parse_confirmation(&self.read_line()?)?;

        Ok(PromptResponse {
            confirmed,
            selected,
        })
    }
}

/// Parse a typed 1-based selection into a 0-based index.
///
/// The result is not bounds-checked.
pub fn parse_selection(line: &str) -> MenuResult<i64> {
    line.trim()
        .parse::<i64>()
        .map(|n| n.saturating_sub(1))
        .map_err(|_| MenuError::InvalidSelectionFormat {
            input: line.to_string(),
        })
}

/// `y` or an empty line confirms, `n` declines (case-insensitive).
pub fn parse_confirmation(line: &str) -> MenuResult<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "" => Ok(true),
        "n" => Ok(false),
        _ => Err(MenuError::InvalidConfirmationFormat {
            input: line.to_string(),
        }),
    }
}
