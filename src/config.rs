use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::widgets::date_picker::DEFAULT_DATE_FORMAT;
use crate::widgets::date_range::DEFAULT_RANGE_FORMAT;
use crate::widgets::date_time::DEFAULT_DATE_TIME_FORMAT;
use crate::widgets::DateConstraints;

const APP_DIR: &str = "spring-widgets";
const CONFIG_FILE: &str = "config.json";

/// Settings for the demo screen. Selection values themselves are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub searchable: bool,
    pub max_selected: Option<usize>,
    pub show_time: bool,
    pub clearable: bool,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub excluded_dates: Vec<NaiveDate>,
    pub date_format: String,
    pub range_format: String,
    pub date_time_format: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            searchable: true,
            max_selected: Some(3),
            show_time: true,
            clearable: true,
            min_date: None,
            max_date: None,
            excluded_dates: Vec::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            range_format: DEFAULT_RANGE_FORMAT.to_string(),
            date_time_format: DEFAULT_DATE_TIME_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("min_date {min} is after max_date {max}")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },
    #[error("max_selected must be at least 1")]
    ZeroCap,
}

impl DemoConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(ConfigError::InvertedBounds { min, max });
            }
        }
        if self.max_selected == Some(0) {
            return Err(ConfigError::ZeroCap);
        }
        Ok(())
    }

    pub fn constraints(&self) -> DateConstraints {
        DateConstraints {
            min: self.min_date,
            max: self.max_date,
            excluded: self.excluded_dates.clone(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}

/// Directory for log files, next to the config file.
pub fn data_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR))
}

/// Loads config from `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    if !path.exists() {
        return Ok(DemoConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &DemoConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

/// Resolves `--config` or the per-user default, then loads it.
pub fn resolve_config(explicit: Option<&Path>) -> Result<DemoConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => match default_config_path() {
            Some(path) => load_config(&path),
            None => Ok(DemoConfig::default()),
        },
    }
}
