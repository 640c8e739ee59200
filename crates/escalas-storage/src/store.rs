use escalas_core::models::result::{SaveContext, ScoreResult, StoredResult};
use uuid::Uuid;

use crate::error::StorageError;

/// Source of `created_at` timestamps.
pub type Clock = Box<dyn Fn() -> jiff::Timestamp + Send + Sync>;

pub(crate) fn system_clock() -> Clock {
    Box::new(jiff::Timestamp::now)
}

/// Owner of the persisted result log. Nothing else mutates it.
///
/// Every call completes its write (or reports the failure) before returning.
/// There is no background queue and no built-in retry.
pub trait ResultStore: Send + Sync {
    /// Append a new entry with a fresh id and the current time.
    fn save(&self, result: &ScoreResult, context: SaveContext) -> Result<StoredResult, StorageError>;

    /// Every entry, most recent first.
    fn try_list_all(&self) -> Result<Vec<StoredResult>, StorageError>;

    /// Remove one entry. Returns whether anything was removed; an unknown id
    /// is not an error.
    fn delete(&self, id: Uuid) -> Result<bool, StorageError>;

    /// Remove every entry.
    fn delete_all(&self) -> Result<(), StorageError>;

    /// Like [`ResultStore::try_list_all`], but a read failure shows as an
    /// empty history instead of an error.
    fn list_all(&self) -> Vec<StoredResult> {
        match self.try_list_all() {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read saved results, showing none");
                Vec::new()
            }
        }
    }
}

/// Newest first. Among equal timestamps the later append comes first.
pub(crate) fn newest_first(mut results: Vec<StoredResult>) -> Vec<StoredResult> {
    results.reverse();
    results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    results
}

/// A v4 id not already present in `existing`.
pub(crate) fn fresh_id(existing: &[StoredResult]) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if existing.iter().all(|r| r.id != id) {
            return id;
        }
    }
}
