//! Settings loading and saving
//!
//! Uses RON (Rusty Object Notation) for a human-editable settings file.
//! A missing file is not an error: the app runs on defaults and writes the
//! file back out so there is something to edit next time.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::gesture::DEFAULT_SCALE_RESISTANCE;

/// Error type for settings loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Tunables for the demo app and the gesture recognizers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dampening applied to the raw pinch ratio (1.0 = undampened)
    pub scale_resistance: f32,
    /// Side length of the square corner-handle hit box, in pixels
    pub handle_size: f32,
    /// Rotation the seeded ROI starts with, in degrees
    pub initial_rotation_degrees: f32,
    /// Side length of the seeded square ROI, in pixels
    pub roi_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale_resistance: DEFAULT_SCALE_RESISTANCE,
            handle_size: 44.0,
            initial_rotation_degrees: 30.0,
            roi_size: 200.0,
        }
    }
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if !settings.scale_resistance.is_finite() || settings.scale_resistance <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "scale_resistance must be finite and positive, got {}",
            settings.scale_resistance
        )));
    }
    if !settings.handle_size.is_finite() || settings.handle_size <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "handle_size must be finite and positive, got {}",
            settings.handle_size
        )));
    }
    if !settings.roi_size.is_finite() || settings.roi_size <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "roi_size must be finite and positive, got {}",
            settings.roi_size
        )));
    }
    if !settings.initial_rotation_degrees.is_finite() {
        return Err(ConfigError::ValidationError(format!(
            "initial_rotation_degrees must be finite, got {}",
            settings.initial_rotation_degrees
        )));
    }
    Ok(())
}

/// Load settings from a RON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let settings: Settings = ron::from_str(&contents)?;
    validate(&settings)?;
    Ok(settings)
}

/// Save settings to a RON file
pub fn save_settings<P: AsRef<Path>>(settings: &Settings, path: P) -> Result<(), ConfigError> {
    let config = ron::ser::PrettyConfig::new().indentor("  ".to_string());
    let ron_string = ron::ser::to_string_pretty(settings, config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

/// Load settings, falling back to defaults (and writing them out) when the
/// file does not exist yet. Parse and validation errors still surface.
pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        return load_settings(path);
    }
    let settings = Settings::default();
    save_settings(&settings, path)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.ron");
        let settings = Settings {
            scale_resistance: 1.0,
            handle_size: 32.0,
            initial_rotation_degrees: 15.0,
            roi_size: 150.0,
        };
        save_settings(&settings, &path).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert!((loaded.scale_resistance - 1.0).abs() < 0.001);
        assert!((loaded.handle_size - 32.0).abs() < 0.001);
        assert!((loaded.initial_rotation_degrees - 15.0).abs() < 0.001);
        assert!((loaded.roi_size - 150.0).abs() < 0.001);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(scale_resistance: 0.5)").unwrap();

        let loaded = load_settings(&path).unwrap();
        assert!((loaded.scale_resistance - 0.5).abs() < 0.001);
        assert!((loaded.handle_size - Settings::default().handle_size).abs() < 0.001);
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.ron");
        assert!(!path.exists());

        let settings = load_or_init(&path).unwrap();
        assert!(path.exists());
        assert!((settings.scale_resistance - DEFAULT_SCALE_RESISTANCE).abs() < 0.001);

        // Second load reads the file it just wrote
        let again = load_or_init(&path).unwrap();
        assert!((again.roi_size - settings.roi_size).abs() < 0.001);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(scale_resistance: -1.0)").unwrap();
        assert!(matches!(
            load_settings(&path),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "not ron at all {{{").unwrap();
        assert!(matches!(load_settings(&path), Err(ConfigError::ParseError(_))));
    }
}
