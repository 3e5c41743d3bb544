//! Saving and loading configuration files

use lightboxkit_camtools::{BoxStyle, OutputFormat};
use lightboxkit_settings::{Config, SettingsError};
use tempfile::tempdir;

fn customized() -> Config {
    let mut config = Config::new();
    config.generator.box_style = BoxStyle::ExtraCustomizableFace;
    config.generator.lock_screw_diameter = 3.0;
    config.generator.back_extra_holes = "C 10 10 6\nR 30 10 12 8".to_string();
    config.material.thickness = 4.0;
    config.laser.passes = 2;
    config.output.format = OutputFormat::Gcode;
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("box.toml");
    let config = customized();
    config.save_to_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[generator]"));
    assert!(text.contains("extra customizable face"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("box.json");
    let config = customized();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_unknown_extension_is_refused() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("box.yaml");
    assert!(matches!(
        Config::new().save_to_file(&path),
        Err(SettingsError::Config(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_invalid_file_is_refused_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("box.toml");
    std::fs::write(&path, "[generator]\nmargin = 10.0\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Parameter(_))
    ));

    std::fs::write(&path, "[generator\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::TomlError(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::LoadError(_))
    ));
}
