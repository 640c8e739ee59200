use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use escalas_core::models::result::{SaveContext, ScoreResult, StoredResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StorageError;
use crate::state::{load_state, save_state};
use crate::store::{fresh_id, newest_first, system_clock, Clock, ResultStore};

/// Current on-disk format version of the result log.
pub const CURRENT_VERSION: u32 = 1;

/// On-disk shape of the result log, in append order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultLog {
    pub version: u32,
    #[serde(default)]
    pub results: Vec<StoredResult>,
}

impl Default for ResultLog {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            results: Vec::new(),
        }
    }
}

/// Result store backed by a single JSON file.
///
/// Every operation reads the file, applies its change and rewrites the file
/// before returning. Operations are serialized by an internal lock, so one
/// store can be shared between threads. Open it once at startup and drop it
/// at shutdown.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
    clock: Clock,
}

impl JsonFileStore {
    /// Open (or prepare to create) the log at `path`. The parent directory
    /// is created if needed; the file itself is only written on first save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        tracing::info!(path = %path.display(), exists = path.exists(), "result store opened");
        Ok(Self {
            path,
            lock: Mutex::new(()),
            clock: system_clock(),
        })
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: impl Fn() -> jiff::Timestamp + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn locked(&self) -> Result<MutexGuard<'_, ()>, StorageError> {
        self.lock.lock().map_err(|_| StorageError::Poisoned)
    }

    fn read_log(&self) -> Result<ResultLog, StorageError> {
        let log: ResultLog = load_state(&self.path)?.unwrap_or_default();
        if log.version > CURRENT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: log.version,
                supported: CURRENT_VERSION,
            });
        }
        Ok(log)
    }

    fn write_log(&self, mut log: ResultLog) -> Result<(), StorageError> {
        log.version = CURRENT_VERSION;
        save_state(&self.path, &log)
    }
}

impl ResultStore for JsonFileStore {
    fn save(&self, result: &ScoreResult, context: SaveContext) -> Result<StoredResult, StorageError> {
        let _guard = self.locked()?;
        let mut log = self.read_log()?;

        let id = fresh_id(&log.results);
        let stored = StoredResult::new(id, result, context, (self.clock)());
        log.results.push(stored.clone());
        self.write_log(log)?;

        tracing::info!(
            id = %stored.id,
            scale = %stored.scale_id,
            score = stored.score,
            "result saved"
        );
        Ok(stored)
    }

    fn try_list_all(&self) -> Result<Vec<StoredResult>, StorageError> {
        let _guard = self.locked()?;
        let log = self.read_log()?;
        Ok(newest_first(log.results))
    }

    fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        let _guard = self.locked()?;
        let mut log = self.read_log()?;

        let before = log.results.len();
        log.results.retain(|r| r.id != id);
        if log.results.len() == before {
            tracing::debug!(%id, "delete: no such result");
            return Ok(false);
        }

        self.write_log(log)?;
        tracing::info!(%id, "result deleted");
        Ok(true)
    }

    fn delete_all(&self) -> Result<(), StorageError> {
        let _guard = self.locked()?;
        self.write_log(ResultLog::default())?;
        tracing::info!(path = %self.path.display(), "all results deleted");
        Ok(())
    }
}
