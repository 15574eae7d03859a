use std::path::{Path, PathBuf};

use bookshelf_analyzer::config::AnalyzerConfig;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when changing shape, and add the
/// transform to [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookshelfConfig {
    /// Schema version. Missing or 0 means an unstamped file.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    /// Snapshot file for analysis history. `None` means the platform data
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            analyzer: AnalyzerConfig::default(),
            store_path: None,
            log_level: default_log_level(),
        }
    }
}

impl BookshelfConfig {
    /// The configured snapshot path, or the platform default.
    pub fn resolved_store_path(&self) -> eyre::Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => {
                let base =
                    dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
                Ok(base.join("bookshelf").join("store.json"))
            }
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("bookshelf").join("config.json"))
}

/// Load the config at `path`. A missing file yields defaults.
pub fn load_config(path: &Path) -> eyre::Result<BookshelfConfig> {
    if !path.exists() {
        return Ok(BookshelfConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

/// Parse config JSON, running migrations before deserializing.
pub fn parse_config(contents: &str) -> eyre::Result<BookshelfConfig> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: BookshelfConfig = serde_json::from_value(migrated)?;
    config.analyzer.validate()?;
    Ok(config)
}

/// Bring raw config JSON up to [`CURRENT_VERSION`].
///
/// Unversioned files already have the current shape and are only stamped.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update bookshelf."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
    obj.insert(
        "config_version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );

    Ok(json)
}

pub fn save_config(config: &BookshelfConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
