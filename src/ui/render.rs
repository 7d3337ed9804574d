//! Screen rendering for the numbered option list.
//!
//! Everything here renders to strings or to a generic writer so the
//! terminal prompter can be driven over in-memory buffers.

use std::io::{self, Write};

use crossterm::{cursor, queue, terminal};

/// Default marker appended to the selected line
pub const DEFAULT_MARKER: &str = " <";

/// Default confirmation question
pub const DEFAULT_CONFIRM_TEXT: &str = "Are you sure?(Y/n):";

/// Number options for display: `"1: label"`, `"2: label"`, ...
pub fn format_options(options: &[String]) -> Vec<String> {
    options
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}: {}", i + 1, label))
        .collect()
}

/// Render the prompt followed by the numbered options.
///
/// `marked` appends `marker` to that line. An index past the end marks nothing.
pub fn render_screen(
    prompt: &str,
    options: &[String],
    marked: Option<usize>,
    marker: &str,
) -> String {
    let mut out = String::new();
    out.push_str(prompt);
    out.push('\n');

    for (i, line) in format_options(options).into_iter().enumerate() {
        out.push_str(&line);
        if marked == Some(i) {
            out.push_str(marker);
        }
        out.push('\n');
    }

    out
}

/// Move to the top-left corner and clear the whole screen.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All)
    )
}
