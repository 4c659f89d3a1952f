use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookmarkStore;

/// Fuzzy search: case-insensitive substring over names and paths.
pub fn run(store: &BookmarkStore, term: &str) -> Result<CmdResult> {
    let found: Vec<_> = store.matches(term)?.into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No bookmarks match '{}'.",
            term.trim()
        )));
    }
    Ok(result.with_listed(found))
}
