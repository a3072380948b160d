use crate::domain::ports::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;

/// Blocking filesystem storage. Paths are used as given; parent
/// directories are not created on write, so a missing directory
/// surfaces as a write error.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| ConvertError::InputRead {
            path: path.to_string(),
            source,
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        // fs::write truncates, so an existing file is overwritten.
        fs::write(path, data).map_err(|source| ConvertError::OutputWrite {
            path: path.to_string(),
            source,
        })
    }
}
