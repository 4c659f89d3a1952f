use super::StoreBackend;
use crate::error::{DogearError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

/// The bookmark file on disk.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(DogearError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dogear_store".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl StoreBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                debug!(path = %self.path.display(), bytes = text.len(), "loaded store");
                Ok(Some(text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no store file yet");
                Ok(None)
            }
            Err(e) => Err(DogearError::Io(e)),
        }
    }

    fn write(&self, contents: &str) -> Result<()> {
        self.ensure_parent()?;

        // Atomic Write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, contents).map_err(DogearError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DogearError::Io(e));
        }

        debug!(path = %self.path.display(), bytes = contents.len(), "saved store");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
