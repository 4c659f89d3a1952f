use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookmarkStore;

/// Exact lookup of a bookmark by name. Does not reorder the store.
pub fn run(store: &BookmarkStore, name: &str) -> Result<CmdResult> {
    let path = store.find(name)?;
    Ok(CmdResult::default().with_found_path(path))
}
