use std::io::Write;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

/// Load a JSON state file. Returns `None` when the file does not exist.
pub fn load_state<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let body = match std::fs::read(path) {
        Ok(body) => body,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let value: T = serde_json::from_slice(&body)?;
    Ok(Some(value))
}

/// Save a JSON state file. Writes and syncs a sibling temp file, then
/// renames it over the target, so readers never see a half-written file.
/// The temp file is removed if any step fails.
pub fn save_state<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");
    if let Err(e) = write_synced(&tmp_path, &body).and_then(|()| std::fs::rename(&tmp_path, path)) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), bytes = body.len(), "state written");
    Ok(())
}

fn write_synced(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(body)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }

    file.sync_all()
}
