use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Prints the version banner to stdout when asked for.
pub fn banner(enabled: bool) {
    if !enabled {
        return;
    }

    let text_content: String = format!("⟦ FLORIST v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .color(colors::SEPARATOR);

    println!("{sep}{text}{sep}");
}

/// Reports a failed command on stderr as `Error: <message>`.
///
/// Kept uncolored so the line stays stable for anything reading stderr.
pub fn error<E: Display + std::fmt::Debug>(err: &E) {
    debug!(?err, "command failed");
    eprintln!("Error: {err}");
}
