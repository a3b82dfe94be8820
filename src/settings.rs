//! Game settings
//!
//! Read from a JSON file named by `SPACE_CHALLENGE_SETTINGS`; anything missing
//! falls back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Countdown length for every player's turn (seconds)
    pub time_limit_secs: u32,
    /// Longest name the name-entry buffers accept
    pub max_name_len: usize,

    // === Markers ===
    pub board_width: f32,
    pub board_height: f32,
    pub max_marker_diameter: f32,
    /// Marker RNG seed (0 = let the caller pick one)
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_limit_secs: TIME_LIMIT_SECS,
            max_name_len: MAX_NAME_LEN,
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            max_marker_diameter: MAX_MARKER_DIAMETER,
            seed: 0,
        }
    }
}

impl Settings {
    /// Environment variable holding the settings file path
    pub const ENV_VAR: &'static str = "SPACE_CHALLENGE_SETTINGS";

    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load from the file named by [`Self::ENV_VAR`], or use defaults.
    ///
    /// A file that is named but unreadable or invalid is an error; an unset
    /// variable is not.
    pub fn load() -> Result<Self, SettingsError> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load_from(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.time_limit_secs == 0 {
            return Err(SettingsError::Invalid("time_limit_secs must be positive".into()));
        }
        if self.max_name_len == 0 {
            return Err(SettingsError::Invalid("max_name_len must be positive".into()));
        }
        if !(self.board_width > 0.0 && self.board_height > 0.0) {
            return Err(SettingsError::Invalid("board size must be positive".into()));
        }
        if !(self.max_marker_diameter > 0.0) {
            return Err(SettingsError::Invalid(
                "max_marker_diameter must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.time_limit_secs, 3);
        assert_eq!(settings.max_name_len, 10);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "time_limit_secs": 5, "seed": 42 }"#).unwrap();
        assert_eq!(settings.time_limit_secs, 5);
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.max_name_len, MAX_NAME_LEN);
        assert_eq!(settings.board_width, BOARD_WIDTH);
    }

    #[test]
    fn test_rejects_zero_time_limit() {
        let err = Settings::from_json(r#"{ "time_limit_secs": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_board() {
        let err = Settings::from_json(r#"{ "board_width": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ nope").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Settings::load_from("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
