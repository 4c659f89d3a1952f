use super::StoreBackend;
use crate::error::{DogearError, Result};
use std::cell::{Cell, RefCell};

/// In-memory store text for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` since dogear is single-threaded and the backend trait takes
/// `&self` for writes.
#[derive(Default)]
pub struct MemBackend {
    text: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let backend = Self::new();
        *backend.text.borrow_mut() = Some(text.to_string());
        backend
    }

    /// Current text, as the next `read` would see it.
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl StoreBackend for MemBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.text.borrow().clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(DogearError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        *self.text.borrow_mut() = Some(contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
