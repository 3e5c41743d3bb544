//! Configuration file handling for LightBoxKit
//!
//! Supports JSON and TOML files. Configuration is organized into sections:
//! - Generator parameters of the night light box
//! - Material and joinery settings
//! - Laser settings for G-code output
//! - Output format and drawing options
//!
//! Every field has a default, so a file only needs the values it changes.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use lightboxkit_camtools::{
    ExportOptions, LaserSettings, NightLightBoxParameters, OutputFormat, SvgOptions,
    ToolkitSettings,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                other.unwrap_or("no extension")
            ))
            .into()),
        }
    }
}

/// Output format and drawing options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Offset the cuts by half the burn
    pub kerf_compensation: bool,
    pub svg: SvgOptions,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Svg,
            kerf_compensation: true,
            svg: SvgOptions::default(),
        }
    }
}

/// Complete configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Night light box parameters
    pub generator: NightLightBoxParameters,
    /// Material thickness, burn and joinery
    pub material: ToolkitSettings,
    /// Laser settings
    pub laser: LaserSettings,
    /// Output settings
    pub output: OutputSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the configuration file, if the platform has a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lightboxkit").join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::of(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => self.to_toml()?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("cannot write {}: {}", path.display(), e))
        })?;
        debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    pub fn to_toml(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.material.validate()?;
        self.generator.validate(self.material.thickness)?;
        self.laser.validate()?;

        let stroke = self.output.svg.stroke_width;
        if !stroke.is_finite() || stroke <= 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "output.svg.stroke_width".to_string(),
                value: stroke.to_string(),
            }
            .into());
        }
        if self.output.svg.border < 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "output.svg.border".to_string(),
                value: self.output.svg.border.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Merge another config into this one. Sections left at their defaults
    /// in `other` keep the values of this config.
    pub fn merge(&mut self, other: &Config) {
        if other.generator != NightLightBoxParameters::default() {
            self.generator = other.generator.clone();
        }
        if other.material != ToolkitSettings::default() {
            self.material = other.material.clone();
        }
        if other.laser != LaserSettings::default() {
            self.laser = other.laser.clone();
        }
        if other.output != OutputSettings::default() {
            self.output = other.output.clone();
        }
    }

    /// Export options for this configuration. `description` goes into the
    /// file header where the format has one.
    pub fn export_options(&self, description: Vec<String>) -> ExportOptions {
        ExportOptions {
            format: self.output.format,
            burn: if self.output.kerf_compensation {
                self.material.burn
            } else {
                0.0
            },
            svg: self.output.svg.clone(),
            laser: self.laser.clone(),
            description,
        }
    }
}
