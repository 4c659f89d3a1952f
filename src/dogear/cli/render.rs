//! # Rendering
//!
//! Turns command results into terminal text. Layout (numbering, padding)
//! is computed with `unicode-width` so names with wide characters still line
//! up; colors come from `colored`, which honors `NO_COLOR`.

use colored::*;
use dogear::api::{CmdMessage, MessageLevel};
use dogear::model::Bookmark;
use unicode_width::UnicodeWidthStr;

pub fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        output.push_str(&format_message(message));
        output.push('\n');
    }
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Same as [`print_messages`] but on stderr, for commands whose stdout is
/// consumed by the shell.
pub fn eprint_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        eprint!("{}", output);
    }
}

/// Numbered `name = path` lines with the `=` signs aligned.
pub fn render_bookmark_list(bookmarks: &[Bookmark]) -> String {
    let index_width = bookmarks.len().to_string().len();
    let name_width = bookmarks
        .iter()
        .map(|b| b.name.width())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (i, bookmark) in bookmarks.iter().enumerate() {
        let index = format!("{:>width$}.", i + 1, width = index_width);
        let padding = " ".repeat(name_width.saturating_sub(bookmark.name.width()));
        output.push_str(&format!(
            "  {} {}{} = {}\n",
            index.dimmed(),
            bookmark.name.bold(),
            padding,
            bookmark.path
        ));
    }
    output
}
