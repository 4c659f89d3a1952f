use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{is_valid_directory, BookmarkStore};
use crate::system::Filesystem;

/// Removes every bookmark whose path is no longer an existing directory.
pub fn run<F: Filesystem>(store: &mut BookmarkStore, fs: &F) -> Result<CmdResult> {
    if store.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No bookmarks to clean.")));
    }

    let removed = store.retain(|bm| is_valid_directory(fs, &bm.path));
    if removed.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "All bookmarks point to existing directories.",
        )));
    }

    let mut result = CmdResult::default().mutated();
    for bm in &removed {
        result.add_message(CmdMessage::success(format!("Removed stale bookmark: {}", bm)));
    }
    result.add_message(CmdMessage::info(format!(
        "Cleaned {} bookmark{}.",
        removed.len(),
        if removed.len() == 1 { "" } else { "s" }
    )));
    Ok(result.with_listed(removed))
}
