use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::pipeline::DEFAULT_THRESHOLD;

/// How the CLI prints feature vectors and verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown format: {s} (use 'text' or 'json')")),
        }
    }
}

/// Global configuration loaded from `~/.config/phishfeat/config.toml`.
///
/// The feature schema and its keyword/TLD tables are deliberately not here:
/// they are fixed by the models trained against them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhishfeatConfig {
    /// Default output format for `extract` and `classify`.
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Decision threshold applied to models whose file does not set one.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Model parameters used by `classify` when `--model` is not given.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Scaler parameters used by `classify` when `--scaler` is not given.
    #[serde(default)]
    pub scaler_path: Option<PathBuf>,
    /// Worker threads for `batch` (None = one per CPU).
    #[serde(default)]
    pub batch_threads: Option<usize>,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for PhishfeatConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            threshold: DEFAULT_THRESHOLD,
            model_path: None,
            scaler_path: None,
            batch_threads: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishfeat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishfeatConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PhishfeatConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PhishfeatConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
