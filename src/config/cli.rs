use crate::core::DocumentStore;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// [`DocumentStore`] that places the output document in a directory on
/// the local filesystem, creating the directory if needed.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }
}

impl DocumentStore for LocalStorage {
    async fn write_document(&self, name: &str, data: &[u8]) -> Result<String> {
        fs::create_dir_all(&self.base_path).map_err(|e| ConvertError::OutputWriteError {
            path: self.base_path.display().to_string(),
            reason: e.to_string(),
        })?;

        let full_path = self.base_path.join(name);
        fs::write(&full_path, data).map_err(|e| ConvertError::OutputWriteError {
            path: full_path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(full_path.display().to_string())
    }
}
