//! Bookmark the current directory under a name.
//!
//! Folding is split in two steps. [`decide`] is a pure function that looks at
//! the store and says what folding `(name, cwd)` would mean:
//!
//! | name taken? | cwd bookmarked? | decision |
//! |---|---|---|
//! | no | no | [`FoldDecision::Add`] |
//! | yes, at cwd | yes | [`FoldDecision::NoOp`] |
//! | yes, elsewhere | either | [`FoldDecision::RenamePrompt`]: move the name to cwd? |
//! | no | yes, under another name | [`FoldDecision::OverwritePrompt`]: rename that bookmark? |
//!
//! [`run`] then performs the decision, asking the user through a
//! [`Prompter`] when a conflict needs an answer. Only the literal `y` accepts.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DogearError, Result};
use crate::model::Bookmark;
use crate::store::BookmarkStore;
use crate::system::{is_accept, Prompter};
use crate::validation::validate_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldDecision {
    /// Neither the name nor the directory is bookmarked.
    Add,
    /// This exact pair already exists.
    NoOp(Bookmark),
    /// The name points at another directory. Accepting moves it to cwd.
    ///
    /// `also_at_cwd` is a different bookmark that already points at cwd; it is
    /// dropped on accept so no two bookmarks share a directory.
    RenamePrompt {
        existing: Bookmark,
        also_at_cwd: Option<Bookmark>,
    },
    /// cwd is bookmarked under another name. Accepting renames that bookmark.
    OverwritePrompt { existing: Bookmark },
}

pub fn decide(store: &BookmarkStore, name: &str, cwd: &str) -> FoldDecision {
    let by_path = store.get_by_path(cwd);
    match store.get(name) {
        Some(existing) if existing.path == cwd => FoldDecision::NoOp(existing.clone()),
        Some(existing) => FoldDecision::RenamePrompt {
            existing: existing.clone(),
            also_at_cwd: by_path.cloned(),
        },
        None => match by_path {
            Some(existing) => FoldDecision::OverwritePrompt {
                existing: existing.clone(),
            },
            None => FoldDecision::Add,
        },
    }
}

pub fn run<P: Prompter>(
    store: &mut BookmarkStore,
    prompter: &mut P,
    name: &str,
    cwd: &str,
) -> Result<CmdResult> {
    validate_name(name).map_err(|reason| DogearError::InvalidName {
        name: name.to_string(),
        reason,
    })?;
    if cwd.contains(['\n', '\r']) {
        return Err(DogearError::UnstorablePath(cwd.to_string()));
    }

    match decide(store, name, cwd) {
        FoldDecision::Add => {
            store.add(name, cwd)?;
            Ok(CmdResult::default()
                .mutated()
                .with_message(CmdMessage::success(format!(
                    "Folded bookmark: {}",
                    Bookmark::new(name, cwd)
                ))))
        }
        FoldDecision::NoOp(existing) => Ok(CmdResult::default().with_message(CmdMessage::info(
            format!("Already bookmarked: {}", existing),
        ))),
        FoldDecision::RenamePrompt {
            existing,
            also_at_cwd,
        } => {
            let mut question = format!("This bookmark name already exists:\n   {}\n", existing);
            if let Some(other) = &also_at_cwd {
                question.push_str(&format!(
                    "This directory is also bookmarked as:\n   {}\nIt will be removed.\n",
                    other
                ));
            }
            question.push_str("Would you like to overwrite it (y/n)? ");
            if !is_accept(prompter.ask(&question)?.as_deref()) {
                return Ok(declined());
            }

            let mut result = CmdResult::default().mutated();
            if let Some(other) = also_at_cwd {
                store.remove_by_name(&other.name)?;
                result.add_message(CmdMessage::info(format!(
                    "Removed bookmark that pointed here: {}",
                    other
                )));
            }
            store.repoint(name, cwd)?;
            result.add_message(CmdMessage::success(format!(
                "Overwrote bookmark: {}",
                Bookmark::new(name, cwd)
            )));
            Ok(result)
        }
        FoldDecision::OverwritePrompt { existing } => {
            let question = format!(
                "This is already bookmarked under another name:\n   {}\nWould you like to change the name (y/n)? ",
                existing
            );
            if !is_accept(prompter.ask(&question)?.as_deref()) {
                return Ok(declined());
            }

            store.rename(&existing.name, name)?;
            Ok(CmdResult::default()
                .mutated()
                .with_message(CmdMessage::success(format!(
                    "Renamed bookmark: {} -> {}",
                    existing.name, name
                ))))
        }
    }
}

fn declined() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info("Bookmarks left unchanged."))
}
