//! # Store Codec
//!
//! The bookmark file is plain text, one bookmark per line:
//!
//! ```text
//! docs=/home/me/docs
//! weird=/tmp/a=b
//! ```
//!
//! Each line is split on its **first** `=`; everything after it is the path,
//! so paths may contain `=` themselves. Blank lines are ignored and a trailing
//! `\r` is dropped so files edited on Windows still load.
//!
//! Parsing never fails. Lines that cannot become a bookmark are skipped and
//! returned as [`MalformedLine`]s so the caller can surface them:
//!
//! - no `=` at all ([`MalformedReason::MissingSeparator`])
//! - nothing before the `=` ([`MalformedReason::EmptyName`])
//! - a name already defined on an earlier line
//!   ([`MalformedReason::DuplicateName`]); the first definition wins
//!
//! Serialization writes `name=path\n` for each bookmark, in order, and nothing
//! else, so `parse(serialize(parse(t).bookmarks))` yields the same bookmarks as
//! `parse(t)`.

use crate::model::Bookmark;
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

pub const SEPARATOR: char = '=';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    MissingSeparator,
    EmptyName,
    DuplicateName,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingSeparator => write!(f, "missing '{}' separator", SEPARATOR),
            MalformedReason::EmptyName => write!(f, "empty bookmark name"),
            MalformedReason::DuplicateName => write!(f, "name already defined earlier"),
        }
    }
}

/// A line of the store file that was skipped while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number in the source text.
    pub line_number: usize,
    pub content: String,
    pub reason: MalformedReason,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} ({})",
            self.line_number, self.content, self.reason
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStore {
    pub bookmarks: Vec<Bookmark>,
    pub malformed: Vec<MalformedLine>,
}

enum Line<'a> {
    Blank,
    Entry { name: &'a str, path: &'a str },
    Malformed(MalformedReason),
}

fn parse_line(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    match line.split_once(SEPARATOR) {
        None => Line::Malformed(MalformedReason::MissingSeparator),
        Some(("", _)) => Line::Malformed(MalformedReason::EmptyName),
        Some((name, path)) => Line::Entry { name, path },
    }
}

/// Parses store text into bookmarks, in file order.
pub fn parse(text: &str) -> ParsedStore {
    let mut parsed = ParsedStore::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let reason = match parse_line(line) {
            Line::Blank => continue,
            Line::Entry { name, path } => {
                if seen.insert(name) {
                    parsed.bookmarks.push(Bookmark::new(name, path));
                    continue;
                }
                MalformedReason::DuplicateName
            }
            Line::Malformed(reason) => reason,
        };

        let malformed = MalformedLine {
            line_number: idx + 1,
            content: line.to_string(),
            reason,
        };
        warn!(line = malformed.line_number, %reason, "skipping malformed store line");
        parsed.malformed.push(malformed);
    }

    parsed
}

/// Renders bookmarks back into store text.
pub fn serialize(bookmarks: &[Bookmark]) -> String {
    let mut out = String::new();
    for bm in bookmarks {
        out.push_str(&bm.name);
        out.push(SEPARATOR);
        out.push_str(&bm.path);
        out.push('\n');
    }
    out
}
