use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ctas_analytics::DEFAULT_LIST_LIMIT;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "ctas-triage";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtasConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Directory holding both record logs.
    pub data_dir: PathBuf,
    pub decisions_file: String,
    pub feedback_file: String,
    /// Entries shown per level by `list`. Added in v1.
    pub list_limit: usize,
    pub created_at: jiff::Timestamp,
}

impl CtasConfig {
    /// Defaults rooted at the platform data directory. File names match the
    /// logs written by earlier deployments.
    pub fn with_defaults() -> eyre::Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
        Ok(Self::in_dir(base.join(APP_DIR)))
    }

    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: data_dir.into(),
            decisions_file: "records.json".to_string(),
            feedback_file: "feedback.json".to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn decisions_path(&self) -> PathBuf {
        self.data_dir.join(&self.decisions_file)
    }

    pub fn feedback_path(&self) -> PathBuf {
        self.data_dir.join(&self.feedback_file)
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR).join("config.json"))
}

pub fn load_config(path: &Path) -> eyre::Result<CtasConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: CtasConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Load the config at `path`, or fall back to defaults when none exists.
pub fn load_or_default(path: &Path) -> eyre::Result<CtasConfig> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        CtasConfig::with_defaults()
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update ctas."
        ));
    }

    // v0 → v1: add list_limit
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("list_limit")
            .or_insert(serde_json::Value::Number(DEFAULT_LIST_LIMIT.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added list_limit)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &CtasConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
