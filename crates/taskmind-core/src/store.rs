use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

/// Logical keys of the persisted state. One JSON file per key.
pub const KEY_DARK_MODE: &str = "dark-mode";
pub const KEY_TASKS: &str = "tasks";
pub const KEY_NOTES: &str = "notes";
pub const KEY_PROFILE: &str = "profile";

/// Storage failures are never fatal to a screen: callers either propagate
/// them to a `*_or_default` wrapper or log and drop them on write.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failure at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed payload under key {key:?}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode payload for key {key:?}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String-keyed, string-valued store backed by one file per key.
///
/// A `get` immediately after a completed `set` observes the new value;
/// writes go through a temp file in the same directory and are renamed
/// into place.
#[derive(Debug)]
pub struct FileStore {
    pub data_dir: PathBuf,
}

impl FileStore {
    #[tracing::instrument(skip(data_dir))]
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        let data_dir = data_dir.to_path_buf();
        fs::create_dir_all(&data_dir).map_err(|source| StorageError::Io {
            path: data_dir.clone(),
            source,
        })?;

        info!(data_dir = %data_dir.display(), "opened store");
        Ok(Self { data_dir })
    }

    /// Returns `Ok(None)` when the key has never been written.
    #[tracing::instrument(skip(self))]
    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => {
                debug!(key, bytes = raw.len(), "read key");
                Ok(Some(raw))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(key, "key not present");
                Ok(None)
            }
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    #[tracing::instrument(skip(self, value))]
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        debug!(key, bytes = value.len(), "writing key atomically");

        let io_err = |source| StorageError::Io {
            path: path.clone(),
            source,
        };

        let mut temp = NamedTempFile::new_in(&self.data_dir).map_err(io_err)?;
        temp.write_all(value.as_bytes()).map_err(io_err)?;
        temp.flush().map_err(io_err)?;

        temp.persist(&path).map_err(|err| StorageError::Io {
            path: path.clone(),
            source: err.error,
        })?;

        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}
