//! Review bookmarks one at a time and delete the unwanted ones.
//!
//! For every bookmark, in store order, the user answers:
//! - `y`: delete it now
//! - `q`: stop here (end of input also stops)
//! - anything else: keep it and move on
//!
//! Deletions are applied as they happen, so quitting keeps them. So does a
//! failure to read an answer: the session ends there and reports it.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookmarkStore;
use crate::system::{is_accept, Prompter, QUIT};
use tracing::warn;

pub fn run<P: Prompter>(store: &mut BookmarkStore, prompter: &mut P) -> Result<CmdResult> {
    if store.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No bookmarks to edit.")));
    }

    let snapshot = store.list().to_vec();
    let total = snapshot.len();
    let mut deleted = 0;
    let mut read_error = None;

    for (i, bookmark) in snapshot.iter().enumerate() {
        let question = format!(
            "{}/{}) {}\nDelete this bookmark (y/n/q)? ",
            i + 1,
            total,
            bookmark
        );
        let answer = match prompter.ask(&question) {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "stopped reading answers");
                read_error = Some(e);
                break;
            }
        };
        match answer.as_deref() {
            None | Some(QUIT) => break,
            a if is_accept(a) => {
                store.remove_by_name(&bookmark.name)?;
                deleted += 1;
                prompter.tell(&CmdMessage::success(format!(
                    "{} has been deleted",
                    bookmark.name
                )));
            }
            _ => {}
        }
    }

    let mut result = CmdResult::default();
    if deleted > 0 {
        result.mutated = true;
        result.add_message(CmdMessage::info(format!(
            "Deleted {} of {} bookmarks.",
            deleted, total
        )));
    } else {
        result.add_message(CmdMessage::info("No bookmarks deleted."));
    }
    if let Some(e) = read_error {
        result.add_message(CmdMessage::warning(format!(
            "Stopped early, could not read an answer: {}",
            e
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Bookmark;
    use crate::store::bookmark_store::fixtures::store_of;
    use crate::system::fixtures::ScriptedPrompter;

    fn three() -> BookmarkStore {
        store_of(&[("one", "/1"), ("two", "/2"), ("three", "/3")])
    }

    #[test]
    fn accepting_everything_empties_store() {
        let mut store = three();
        let mut prompter = ScriptedPrompter::new(["y", "y", "y"]);
        let result = run(&mut store, &mut prompter).unwrap();

        assert!(store.is_empty());
        assert!(result.mutated);
        assert_eq!(prompter.told.len(), 3);
        assert_eq!(prompter.told[0], "one has been deleted");
    }

    #[test]
    fn quit_first_leaves_store_untouched() {
        let mut store = three();
        let before = store.clone();
        let mut prompter = ScriptedPrompter::new(["q"]);
        let result = run(&mut store, &mut prompter).unwrap();

        assert_eq!(store, before);
        assert!(!result.mutated);
        assert_eq!(prompter.questions.len(), 1);
    }

    #[test]
    fn near_misses_decline() {
        let mut store = three();
        let before = store.clone();
        let mut prompter = ScriptedPrompter::new(["n", "garbage", "y     "]);
        let result = run(&mut store, &mut prompter).unwrap();

        assert_eq!(store, before);
        assert!(!result.mutated);
        assert_eq!(prompter.questions.len(), 3);
    }

    #[test]
    fn quit_keeps_earlier_deletions() {
        let mut store = three();
        let mut prompter = ScriptedPrompter::new(["n", "y", "q"]);
        let result = run(&mut store, &mut prompter).unwrap();

        assert!(result.mutated);
        assert_eq!(
            store.list(),
            &[Bookmark::new("one", "/1"), Bookmark::new("three", "/3")]
        );
    }

    #[test]
    fn quit_stops_before_later_entries() {
        let mut store = three();
        let mut prompter = ScriptedPrompter::new(["y", "q", "y"]);
        run(&mut store, &mut prompter).unwrap();

        assert_eq!(
            store.list(),
            &[Bookmark::new("two", "/2"), Bookmark::new("three", "/3")]
        );
        assert_eq!(prompter.remaining(), 1);
    }

    #[test]
    fn end_of_input_stops_session() {
        let mut store = three();
        let mut prompter = ScriptedPrompter::new(["y"]);
        run(&mut store, &mut prompter).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(prompter.questions.len(), 2);
    }

    #[test]
    fn read_failure_keeps_confirmed_deletions() {
        let mut store = three();
        let mut prompter = ScriptedPrompter::new(["y"]).failing_when_exhausted();
        let result = run(&mut store, &mut prompter).unwrap();

        assert!(result.mutated);
        assert_eq!(store.len(), 2);
        assert_eq!(prompter.told, vec!["one has been deleted"]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }

    #[test]
    fn describes_each_bookmark() {
        let mut store = three();
        let mut prompter = ScriptedPrompter::new(["n", "n", "n"]);
        run(&mut store, &mut prompter).unwrap();

        assert!(prompter.questions[0].starts_with("1/3) one = /1"));
        assert!(prompter.questions[2].starts_with("3/3) three = /3"));
    }

    #[test]
    fn empty_store_never_prompts() {
        let mut store = BookmarkStore::new();
        let mut prompter = ScriptedPrompter::new(["y"]);
        let result = run(&mut store, &mut prompter).unwrap();

        assert!(prompter.questions.is_empty());
        assert!(!result.mutated);
        assert_eq!(result.messages[0].content, "No bookmarks to edit.");
    }
}
