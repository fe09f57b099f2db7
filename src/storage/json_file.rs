use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, info};

/// Validated expense entry, appended to the record file as a JSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub title: String,

    /// Kept as a JSON number so integers and floats round-trip untouched.
    pub amount: Number,

    pub date: String,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StorageError {
    fn io(path: &Path, source: io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Record store backed by a single JSON array file.
///
/// Stored entries are handled as raw JSON values so records written by other
/// tools (missing fields, extra keys) are served and rewritten unchanged.
/// Every call goes back to disk; there is no in-memory copy. Appends are
/// serialized through `write_lock` so two writers in this process cannot
/// drop each other's records.
pub struct JsonFileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and an empty `[]` file if missing.
    /// Existing files are left untouched.
    pub fn initialize(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }

        if !self.path.exists() {
            fs::write(&self.path, "[]").map_err(|e| StorageError::io(&self.path, e))?;
            info!(path = %self.path.display(), "Created empty record file");
        }

        Ok(())
    }

    pub fn load(&self) -> Result<Vec<Value>, StorageError> {
        let contents = fs::read(&self.path).map_err(|e| StorageError::io(&self.path, e))?;

        serde_json::from_slice(&contents).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file with `records`. Not crash-safe: an interrupted write
    /// can leave a truncated file behind.
    pub fn save(&self, records: &[Value]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json).map_err(|e| StorageError::io(&self.path, e))?;

        debug!(records = records.len(), "Record file rewritten");
        Ok(())
    }

    /// Load, push, save. Returns the new record count.
    pub fn append(&self, record: ExpenseRecord) -> Result<usize, StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let record = serde_json::to_value(record)?;
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)?;

        Ok(records.len())
    }

    pub fn count(&self) -> Result<usize, StorageError> {
        Ok(self.load()?.len())
    }
}
