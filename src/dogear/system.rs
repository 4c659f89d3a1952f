//! # Host Collaborators
//!
//! The commands never touch the real filesystem or terminal directly. They
//! talk to these traits instead:
//!
//! - [`Filesystem`]: directory checks and the current working directory
//! - [`Prompter`]: asks a question and reads one line of answer
//!
//! Production uses [`OsFilesystem`] here and the terminal prompter in the CLI.
//! Tests use the fakes in [`fixtures`].

use crate::commands::CmdMessage;
use crate::error::Result;
use std::env;
use std::path::{Path, PathBuf};

/// The answer that accepts a prompt. Anything else declines.
pub const ACCEPT: &str = "y";
/// The answer that ends an edit session early.
pub const QUIT: &str = "q";

pub trait Filesystem {
    /// Whether `path` currently exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// The directory the user is working in.
    fn current_dir(&self) -> Result<PathBuf>;
}

pub trait Prompter {
    /// Shows `question` and reads one line of input.
    ///
    /// Returns `Ok(None)` at end of input. The line terminator is removed,
    /// nothing else is trimmed.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Shows a message immediately, in the middle of an interactive session.
    fn tell(&mut self, message: &CmdMessage);
}

/// True only for the exact accept token.
pub fn is_accept(answer: Option<&str>) -> bool {
    answer == Some(ACCEPT)
}

/// Removes a single trailing `\n` or `\r\n`.
pub fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Prefers `$PWD` when it names the same directory as the process cwd, so
    /// bookmarks keep the logical path the shell shows (symlinks unresolved).
    fn current_dir(&self) -> Result<PathBuf> {
        let physical = env::current_dir()?;
        if let Some(logical) = env::var_os("PWD").map(PathBuf::from) {
            if logical.is_absolute() && same_dir(&logical, &physical) {
                return Ok(logical);
            }
        }
        Ok(physical)
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::cell::Cell;
    use std::collections::{HashSet, VecDeque};

    /// A filesystem where only the listed directories exist.
    pub struct FakeFilesystem {
        dirs: HashSet<PathBuf>,
        cwd: PathBuf,
        queries: Cell<usize>,
    }

    impl FakeFilesystem {
        pub fn new(cwd: impl Into<PathBuf>) -> Self {
            Self {
                dirs: HashSet::new(),
                cwd: cwd.into(),
                queries: Cell::new(0),
            }
        }

        pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
            self.dirs.insert(dir.into());
            self
        }

        /// Number of `is_dir` calls made so far.
        pub fn queries(&self) -> usize {
            self.queries.get()
        }
    }

    impl Filesystem for FakeFilesystem {
        fn is_dir(&self, path: &Path) -> bool {
            self.queries.set(self.queries.get() + 1);
            self.dirs.contains(path)
        }

        fn current_dir(&self) -> Result<PathBuf> {
            Ok(self.cwd.clone())
        }
    }

    /// Replays canned answers and records everything it was shown.
    #[derive(Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
        fail_when_exhausted: bool,
        pub questions: Vec<String>,
        pub told: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                fail_when_exhausted: false,
                questions: Vec::new(),
                told: Vec::new(),
            }
        }

        /// Running out of answers is a read error instead of end of input.
        pub fn failing_when_exhausted(mut self) -> Self {
            self.fail_when_exhausted = true;
            self
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, question: &str) -> Result<Option<String>> {
            self.questions.push(question.to_string());
            match self.answers.pop_front() {
                None if self.fail_when_exhausted => {
                    Err(std::io::Error::other("input closed").into())
                }
                answer => Ok(answer),
            }
        }

        fn tell(&mut self, message: &CmdMessage) {
            self.told.push(message.content.clone());
        }
    }
}
