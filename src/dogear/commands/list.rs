use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookmarkStore;

/// Every bookmark, in store order.
pub fn run(store: &BookmarkStore) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.is_empty() {
        result.add_message(CmdMessage::info("No bookmarks yet."));
    }
    Ok(result.with_listed(store.list().to_vec()))
}
