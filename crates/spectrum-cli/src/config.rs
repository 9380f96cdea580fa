use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spectrum_features::encoder::{EncoderConfig, UnknownValuePolicy};
use spectrum_features::scaling::ScalingConfig;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_MODEL_PATH: &str = "modelo_autismo.safetensors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub model_path: PathBuf,
    /// Added in v1. Older configs are migrated to `lenient`, which is how
    /// they behaved.
    #[serde(default)]
    pub unknown_values: UnknownValuePolicy,
    #[serde(default)]
    pub scaling: ScalingConfig,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            unknown_values: UnknownValuePolicy::default(),
            scaling: ScalingConfig::default(),
        }
    }
}

impl SpectrumConfig {
    pub fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig {
            scaling: self.scaling,
            unknown_values: self.unknown_values,
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("spectrum").join("config.json"))
}

/// Load the config at `path`. A missing file yields defaults unless
/// `required` is set (the user named the file explicitly).
pub fn load_config(path: &Path, required: bool) -> eyre::Result<SpectrumConfig> {
    if !path.exists() {
        if required {
            return Err(eyre::eyre!("config file not found: {}", path.display()));
        }
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(SpectrumConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> eyre::Result<SpectrumConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: SpectrumConfig = serde_json::from_value(migrated)?;
    config.scaling.validate()?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Spectrum."
        ));
    }

    // v0 → v1: unknown answers were always encoded as absent
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("unknown_values")
            .or_insert(serde_json::Value::String("lenient".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added unknown_values)");
    }

    Ok(json)
}

pub fn save_config(config: &SpectrumConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
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
