use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalasConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Result log location. `None` means the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Directory of extra `*.json` scale definitions loaded next to the
    /// built-in ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales_dir: Option<PathBuf>,
}

impl Default for EscalasConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_file: None,
            scales_dir: None,
        }
    }
}

impl EscalasConfig {
    /// Result log path after applying defaults.
    pub fn resolved_data_file(&self) -> eyre::Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => default_data_file(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("escalas"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn default_data_file() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("escalas").join("results.json"))
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> eyre::Result<EscalasConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(EscalasConfig::default());
        }
        Err(e) => {
            return Err(eyre::eyre!("failed to read config at {}: {e}", path.display()));
        }
    };

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(raw) => u32::try_from(raw).map_err(|_| {
            eyre::eyre!(
                "config_version {raw} is newer than this build supports ({CURRENT_VERSION}). \
                 Please update escalas."
            )
        })?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: EscalasConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update escalas."
        ));
    }

    // v0 → v1: unversioned file with the v1 fields; only the version stamp is added
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("stamped unversioned config as v1");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(path: &Path, config: &EscalasConfig) -> eyre::Result<()> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    escalas_storage::state::save_state(path, &stamped)?;
    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
