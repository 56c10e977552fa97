//! A key-value storage backed by local files

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::traits::KeyValueStorage;

/// A [`KeyValueStorage`] that stores each key in its own file under one folder.
///
/// Key names are sanitized before they become file names, so versioned keys like
/// `todos.v1` are safe on every platform. The folder is created lazily on the first
/// write.
#[derive(Clone, Debug)]
pub struct FileStorage {
    folder: PathBuf,
}

impl FileStorage {
    pub fn new(folder: &Path) -> Self {
        Self { folder: PathBuf::from(folder) }
    }

    fn file_for_key(&self, key: &str) -> PathBuf {
        self.folder.join(format!("{}.json", sanitize_filename::sanitize(key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.file_for_key(key);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("Unable to read file {:?}: {}", path, err);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.folder).map_err(|source| StorageError::Write {
            key: key.to_string(),
            source,
        })?;

        let path = self.file_for_key(key);
        std::fs::write(&path, value).map_err(|source| StorageError::Write {
            key: key.to_string(),
            source,
        })
    }
}
