use crate::validation::NameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DogearError {
    #[error("Invalid bookmark name '{name}': {reason}")]
    InvalidName { name: String, reason: NameError },

    #[error("Search term cannot be empty")]
    EmptyTerm,

    #[error("Path cannot be bookmarked (contains a line break): {0}")]
    UnstorablePath(String),

    #[error("{0}")]
    InvalidConfig(String),

    #[error("Unknown bookmark: {0}")]
    BookmarkNotFound(String),

    #[error("This directory hasn't been bookmarked: {0}")]
    PathNotBookmarked(String),

    #[error("Bookmark name already exists: {0}")]
    DuplicateName(String),

    #[error("Path is already bookmarked: {0}")]
    DuplicatePath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl DogearError {
    /// Process exit status for this error class.
    ///
    /// Usage errors exit with 2, lookup misses with 1, and anything caused by
    /// the environment (files, config) with 3.
    pub fn exit_code(&self) -> i32 {
        match self {
            DogearError::InvalidName { .. }
            | DogearError::EmptyTerm
            | DogearError::UnstorablePath(_)
            | DogearError::InvalidConfig(_) => 2,
            DogearError::BookmarkNotFound(_) | DogearError::PathNotBookmarked(_) => 1,
            DogearError::DuplicateName(_) | DogearError::DuplicatePath(_) => 1,
            DogearError::Io(_) | DogearError::Serialization(_) | DogearError::Config(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DogearError>;
