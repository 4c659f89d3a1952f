use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookmarkStore;

/// Removes the bookmark pointing at `cwd`.
pub fn run(store: &mut BookmarkStore, cwd: &str) -> Result<CmdResult> {
    let removed = store.remove_by_path(cwd)?;
    Ok(CmdResult::default()
        .mutated()
        .with_message(CmdMessage::success(format!(
            "Unfolded bookmark: {}",
            removed
        ))))
}
