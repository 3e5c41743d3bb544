//! LightBoxKit Settings Crate
//!
//! Handles the configuration file: generator parameters, material, laser
//! and output settings.

pub mod config;
pub mod error;

pub use config::{Config, OutputSettings, CONFIG_FILE_NAME};
pub use error::{ConfigError, SettingsError, SettingsResult};
