use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConnectError, Result};

/// A durable key/value slot store, in the manner of browser local storage.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Storage that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Storage backed by one `<key>.json` file per slot inside a directory.
///
/// Writes go to a temporary sibling file that is then renamed over the slot,
/// so a reader sees either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConnectError::Storage {
                key: key.to_owned(),
                source: e,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage_err = |source| ConnectError::Storage {
            key: key.to_owned(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(storage_err)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(storage_err)?;
        fs::rename(&tmp, self.slot_path(key)).map_err(storage_err)?;

        debug!(key, bytes = value.len(), "wrote storage slot");
        Ok(())
    }
}
