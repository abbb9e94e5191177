//! Application configuration loaded from `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::DayTintError;
use crate::services::annotator::AnnotatorConfig;

const APP_DIR: &str = "day-tint";
const CONFIG_FILE: &str = "config.toml";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the settings document lives; defaults under the user data dir.
    pub settings_path: Option<PathBuf>,
    pub annotator: AnnotatorConfig,
}

impl AppConfig {
    /// Default location of `config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let base = directories::BaseDirs::new().context("Failed to get base directories")?;
        Ok(base.config_dir().join(APP_DIR).join(CONFIG_FILE))
    }

    /// Default location of the settings document
    pub fn default_settings_path() -> Result<PathBuf> {
        let base = directories::BaseDirs::new().context("Failed to get base directories")?;
        Ok(base.data_dir().join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, DayTintError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DayTintError> {
        let annotator = &self.annotator;
        for (name, value) in [
            ("dark_opacity", annotator.dark_opacity),
            ("light_opacity", annotator.light_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DayTintError::Config(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("day_key_attribute", &annotator.day_key_attribute),
            ("date_attribute", &annotator.date_attribute),
            ("marker_attribute", &annotator.marker_attribute),
        ] {
            if value.trim().is_empty() {
                return Err(DayTintError::Config(format!("{} cannot be empty", name)));
            }
        }

        Ok(())
    }

    /// Settings path from config, falling back to the default location.
    pub fn resolve_settings_path(&self) -> Result<PathBuf> {
        match &self.settings_path {
            Some(path) => Ok(path.clone()),
            None => Self::default_settings_path(),
        }
    }
}
