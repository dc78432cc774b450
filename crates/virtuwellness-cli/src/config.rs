use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::logging::LogFormat;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const MODEL_PATH_ENV: &str = "VIRTUWELLNESS_MODEL_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Also report scores rescaled onto `0..=normalize_to`.
    #[serde(default)]
    pub normalize_to: Option<f64>,
    /// Bag-of-words sentiment model. Absent means lexicon only.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    #[serde(default = "default_model_timeout_ms")]
    pub model_timeout_ms: u64,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_model_timeout_ms() -> u64 {
    250
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            normalize_to: None,
            model_path: None,
            model_timeout_ms: default_model_timeout_ms(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn model_timeout(&self) -> Duration {
        Duration::from_millis(self.model_timeout_ms)
    }

    /// Apply environment overrides on top of the file contents.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var(MODEL_PATH_ENV)
            && !path.trim().is_empty()
        {
            self.model_path = Some(PathBuf::from(path));
        }
        self
    }

    fn check(&self) -> eyre::Result<()> {
        if let Some(target) = self.normalize_to
            && !(target.is_finite() && target > 0.0)
        {
            return Err(eyre::eyre!(
                "normalize_to must be a positive number, got {target}"
            ));
        }
        if self.model_timeout_ms == 0 {
            return Err(eyre::eyre!("model_timeout_ms must be greater than zero"));
        }
        Ok(())
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("virtuwellness").join("config.json"))
}

/// Load config from `path`, or the platform default. A missing file yields
/// defaults.
pub fn load_config(path: Option<&Path>) -> eyre::Result<AppConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> eyre::Result<AppConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AppConfig = serde_json::from_value(migrated)?;
    config.check()?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update VirtuWellness."
        ));
    }

    // v0 → v1: boolean `normalized_scale` (0–10 display) becomes `normalize_to`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(flag) = obj.remove("normalized_scale")
            && flag.as_bool() == Some(true)
        {
            obj.entry("normalize_to")
                .or_insert(serde_json::Value::from(10.0));
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (normalized_scale → normalize_to)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &AppConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

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
