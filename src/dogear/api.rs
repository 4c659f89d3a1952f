//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all dogear operations, whatever the UI.
//!
//! Every call follows the same lifecycle:
//!
//! 1. read the store text from the [`StoreBackend`] and parse it
//! 2. run exactly one command against the in-memory store
//! 3. write the store back **only** if the command reports a mutation
//!
//! Lines the codec skipped while loading are appended to the result as
//! warnings, so the user learns about them without the load failing.
//!
//! ## Generic Over Collaborators
//!
//! `DogearApi<B, F>` is generic over the store backend and the filesystem:
//! - Production: `DogearApi<FileBackend, OsFilesystem>`
//! - Testing: `DogearApi<MemBackend, FakeFilesystem>`
//!
//! Interactive commands take the [`Prompter`] per call since only they need it.

use crate::codec::MalformedLine;
use crate::commands;
use crate::error::{DogearError, Result};
use crate::store::{BookmarkStore, StoreBackend};
use crate::system::{Filesystem, Prompter};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct DogearApi<B: StoreBackend, F: Filesystem> {
    backend: B,
    fs: F,
    recent_limit: usize,
}

impl<B: StoreBackend, F: Filesystem> DogearApi<B, F> {
    pub fn new(backend: B, fs: F) -> Self {
        Self {
            backend,
            fs,
            recent_limit: commands::recent::DEFAULT_RECENT_LIMIT,
        }
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit.max(1);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Bookmark the current directory as `name`.
    pub fn fold<P: Prompter>(&mut self, prompter: &mut P, name: &str) -> Result<CmdResult> {
        let cwd = self.cwd()?;
        self.with_store(|store| commands::fold::run(store, prompter, name, &cwd))
    }

    /// Remove the bookmark for the current directory.
    pub fn unfold(&mut self) -> Result<CmdResult> {
        let cwd = self.cwd()?;
        self.with_store(|store| commands::unfold::run(store, &cwd))
    }

    pub fn find(&mut self, name: &str) -> Result<CmdResult> {
        self.with_store(|store| commands::find::run(store, name))
    }

    pub fn like(&mut self, term: &str) -> Result<CmdResult> {
        self.with_store(|store| commands::like::run(store, term))
    }

    pub fn list(&mut self) -> Result<CmdResult> {
        self.with_store(|store| commands::list::run(store))
    }

    pub fn recent(&mut self) -> Result<CmdResult> {
        let limit = self.recent_limit;
        self.with_store(|store| commands::recent::run(store, limit))
    }

    pub fn edit<P: Prompter>(&mut self, prompter: &mut P) -> Result<CmdResult> {
        self.with_store(|store| commands::edit::run(store, prompter))
    }

    pub fn clean(&mut self) -> Result<CmdResult> {
        self.with_store(|store| commands::clean::run(store, &self.fs))
    }

    /// Path of the directory the user is in, as stored in bookmarks.
    pub fn cwd(&self) -> Result<String> {
        self.fs
            .current_dir()?
            .into_os_string()
            .into_string()
            .map_err(|raw| {
                DogearError::UnstorablePath(PathBuf::from(raw).display().to_string())
            })
    }

    fn with_store<Op>(&self, op: Op) -> Result<CmdResult>
    where
        Op: FnOnce(&mut BookmarkStore) -> Result<CmdResult>,
    {
        let backend = &self.backend;
        let text = backend.read()?.unwrap_or_default();
        let (mut store, malformed) = BookmarkStore::parse(&text);
        debug!(
            location = %backend.location(),
            bookmarks = store.len(),
            skipped = malformed.len(),
            "store loaded"
        );

        let mut result = op(&mut store)?;
        if result.mutated {
            backend.write(&store.serialize())?;
        }
        result.messages.extend(malformed_warnings(&malformed, backend));
        Ok(result)
    }
}

fn malformed_warnings<B: StoreBackend>(
    malformed: &[MalformedLine],
    backend: &B,
) -> Vec<CmdMessage> {
    malformed
        .iter()
        .map(|line| {
            CmdMessage::warning(format!(
                "Skipped malformed line in {}: {}",
                backend.location(),
                line
            ))
        })
        .collect()
}

/// Shows or changes settings. Needs no store, so it works even when the
/// configured store path is unusable.
pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
