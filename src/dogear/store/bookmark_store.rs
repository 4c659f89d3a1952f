use crate::codec::{self, MalformedLine};
use crate::error::{DogearError, Result};
use crate::model::Bookmark;
use crate::system::Filesystem;
use std::path::Path;
use tracing::debug;

/// Ordered bookmark collection.
///
/// Names are unique (case-sensitive). New bookmarks are appended, so the tail
/// of the list holds the most recently added ones; reads never reorder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from store text, returning the lines that were skipped.
    pub fn parse(text: &str) -> (Self, Vec<MalformedLine>) {
        let parsed = codec::parse(text);
        (
            Self {
                bookmarks: parsed.bookmarks,
            },
            parsed.malformed,
        )
    }

    pub fn serialize(&self) -> String {
        codec::serialize(&self.bookmarks)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn get(&self, name: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|bm| bm.name == name)
    }

    pub fn get_by_path(&self, path: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|bm| bm.path == path)
    }

    /// Appends a bookmark. Fails if the name or the path is already taken.
    pub fn add(&mut self, name: &str, path: &str) -> Result<()> {
        if self.get(name).is_some() {
            return Err(DogearError::DuplicateName(name.to_string()));
        }
        if self.get_by_path(path).is_some() {
            return Err(DogearError::DuplicatePath(path.to_string()));
        }
        debug!(name, path, "adding bookmark");
        self.bookmarks.push(Bookmark::new(name, path));
        Ok(())
    }

    /// Removes the first bookmark pointing at `path`.
    pub fn remove_by_path(&mut self, path: &str) -> Result<Bookmark> {
        let pos = self
            .bookmarks
            .iter()
            .position(|bm| bm.path == path)
            .ok_or_else(|| DogearError::PathNotBookmarked(path.to_string()))?;
        let removed = self.bookmarks.remove(pos);
        debug!(name = %removed.name, path, "removed bookmark by path");
        Ok(removed)
    }

    pub fn remove_by_name(&mut self, name: &str) -> Result<Bookmark> {
        let pos = self
            .position(name)
            .ok_or_else(|| DogearError::BookmarkNotFound(name.to_string()))?;
        let removed = self.bookmarks.remove(pos);
        debug!(name, path = %removed.path, "removed bookmark by name");
        Ok(removed)
    }

    /// Exact, case-sensitive lookup. Returns the bookmarked path.
    pub fn find(&self, name: &str) -> Result<&str> {
        self.get(name)
            .map(|bm| bm.path.as_str())
            .ok_or_else(|| DogearError::BookmarkNotFound(name.to_string()))
    }

    /// Points an existing bookmark at a new path, keeping its position.
    pub fn repoint(&mut self, name: &str, path: &str) -> Result<()> {
        let pos = self
            .position(name)
            .ok_or_else(|| DogearError::BookmarkNotFound(name.to_string()))?;
        debug!(name, path, "repointing bookmark");
        self.bookmarks[pos].path = path.to_string();
        Ok(())
    }

    /// Renames an existing bookmark, keeping its position.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        if old != new && self.get(new).is_some() {
            return Err(DogearError::DuplicateName(new.to_string()));
        }
        let pos = self
            .position(old)
            .ok_or_else(|| DogearError::BookmarkNotFound(old.to_string()))?;
        debug!(old, new, "renaming bookmark");
        self.bookmarks[pos].name = new.to_string();
        Ok(())
    }

    /// The `limit` most recently added bookmarks, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&Bookmark> {
        self.bookmarks.iter().rev().take(limit).collect()
    }

    /// Case-insensitive substring search over names and paths, in store order.
    pub fn matches(&self, term: &str) -> Result<Vec<&Bookmark>> {
        if term.trim().is_empty() {
            return Err(DogearError::EmptyTerm);
        }
        let needle = term.to_lowercase();
        Ok(self
            .bookmarks
            .iter()
            .filter(|bm| {
                bm.name.to_lowercase().contains(&needle)
                    || bm.path.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Keeps only the bookmarks for which `keep` returns true; returns the rest.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<Bookmark>
    where
        F: FnMut(&Bookmark) -> bool,
    {
        let (kept, dropped): (Vec<_>, Vec<_>) =
            self.bookmarks.drain(..).partition(|bm| keep(bm));
        self.bookmarks = kept;
        dropped
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.bookmarks.iter().position(|bm| bm.name == name)
    }
}

/// Whether `path` is currently an existing directory.
pub fn is_valid_directory<F: Filesystem + ?Sized>(fs: &F, path: &str) -> bool {
    fs.is_dir(Path::new(path))
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a store from `(name, path)` pairs, bypassing conflict checks.
    pub fn store_of(pairs: &[(&str, &str)]) -> BookmarkStore {
        BookmarkStore {
            bookmarks: pairs
                .iter()
                .map(|(name, path)| Bookmark::new(*name, *path))
                .collect(),
        }
    }
}
