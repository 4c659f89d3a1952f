//! # Command Layer
//!
//! One module per user-facing operation. Each `run` function takes the loaded
//! [`BookmarkStore`](crate::store::BookmarkStore) plus whatever collaborators
//! it needs ([`Filesystem`](crate::system::Filesystem),
//! [`Prompter`](crate::system::Prompter)) and returns a [`CmdResult`].
//!
//! Commands never print and never persist. They set [`CmdResult::mutated`]
//! when they changed the store; the API layer decides whether to write.

use crate::model::Bookmark;

pub mod clean;
pub mod config;
pub mod edit;
pub mod find;
pub mod fold;
pub mod like;
pub mod list;
pub mod recent;
pub mod unfold;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The store was changed and must be written back.
    pub mutated: bool,
    pub listed: Vec<Bookmark>,
    /// The path a lookup resolved to.
    pub found_path: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn mutated(mut self) -> Self {
        self.mutated = true;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, bookmarks: Vec<Bookmark>) -> Self {
        self.listed = bookmarks;
        self
    }

    pub fn with_found_path(mut self, path: impl Into<String>) -> Self {
        self.found_path = Some(path.into());
        self
    }
}
