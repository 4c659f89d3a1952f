use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookmarkStore;

pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// The most recently added bookmarks, newest first.
pub fn run(store: &BookmarkStore, limit: usize) -> Result<CmdResult> {
    let recent: Vec<_> = store.recent(limit).into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if recent.is_empty() {
        result.add_message(CmdMessage::info("No bookmarks yet."));
    }
    Ok(result.with_listed(recent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::bookmark_store::fixtures::store_of;

    #[test]
    fn empty_store() {
        let result = run(&BookmarkStore::new(), DEFAULT_RECENT_LIMIT).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].content, "No bookmarks yet.");
    }

    #[test]
    fn caps_display_but_not_store() {
        let store = store_of(&[("a", "/a"), ("b", "/b"), ("c", "/c")]);
        let result = run(&store, 2).unwrap();
        let names: Vec<_> = result.listed.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b"]);
        assert!(!result.mutated);
        assert_eq!(store.len(), 3);
    }
}
