use std::sync::{Mutex, MutexGuard};

use escalas_core::models::result::{SaveContext, ScoreResult, StoredResult};
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::{fresh_id, newest_first, system_clock, Clock, ResultStore};

/// In-process result store. Nothing survives the process.
pub struct MemoryStore {
    results: Mutex<Vec<StoredResult>>,
    clock: Clock,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(Vec::new()),
            clock: system_clock(),
        }
    }

    pub fn with_clock(mut self, clock: impl Fn() -> jiff::Timestamp + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    fn locked(&self) -> Result<MutexGuard<'_, Vec<StoredResult>>, StorageError> {
        self.results.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl ResultStore for MemoryStore {
    fn save(&self, result: &ScoreResult, context: SaveContext) -> Result<StoredResult, StorageError> {
        let mut results = self.locked()?;
        let stored = StoredResult::new(fresh_id(&results), result, context, (self.clock)());
        results.push(stored.clone());
        Ok(stored)
    }

    fn try_list_all(&self) -> Result<Vec<StoredResult>, StorageError> {
        Ok(newest_first(self.locked()?.clone()))
    }

    fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut results = self.locked()?;
        let before = results.len();
        results.retain(|r| r.id != id);
        Ok(results.len() != before)
    }

    fn delete_all(&self) -> Result<(), StorageError> {
        self.locked()?.clear();
        Ok(())
    }
}
