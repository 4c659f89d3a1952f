//! # Storage Layer
//!
//! Two pieces live here:
//!
//! - [`BookmarkStore`]: the in-memory, ordered collection that every command
//!   operates on. It owns the uniqueness rules and the lookup semantics.
//! - [`StoreBackend`]: raw text persistence for that collection. The backend
//!   knows nothing about bookmarks; [`crate::codec`] turns its text into a
//!   store and back.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production, a single text file (by default
//!   `~/.dogear_store`) written atomically.
//! - [`memory::MemBackend`]: in-memory text for testing, no persistence.
//!
//! ## Lifecycle
//!
//! A process loads the store once, runs one command against it, and writes it
//! back only if the command changed something. The file is the only state that
//! outlives a process.

use crate::error::Result;

pub mod bookmark_store;
pub mod fs;
pub mod memory;

pub use bookmark_store::{is_valid_directory, BookmarkStore};

/// Raw text persistence for the bookmark file.
pub trait StoreBackend {
    /// Reads the whole store text. `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replaces the whole store text.
    /// MUST be atomic so a crash never leaves a half-written store.
    fn write(&self, contents: &str) -> Result<()>;

    /// Human readable location of the store, for messages.
    fn location(&self) -> String;
}
