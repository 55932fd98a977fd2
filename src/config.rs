//! User settings
//!
//! Settings live in a small YAML file. Every key is optional:
//!
//! ```yaml
//! default-voicing: drop2
//! store-path: /home/me/chords.json
//! playback:
//!   chord-duration: 3.0
//!   volume: 0.6
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HypersynError;
use crate::playback::PlaybackOptions;
use crate::storage::default_store_path;
use crate::voicing::Voicing;

/// Settings as written in YAML
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSettings {
    pub default_voicing: Option<String>,
    pub store_path: Option<PathBuf>,
    pub playback: Option<PlaybackOptions>,
}

/// Resolved settings with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub default_voicing: Voicing,
    pub store_path: PathBuf,
    pub playback: PlaybackOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_voicing: Voicing::Closed,
            store_path: default_store_path(),
            playback: PlaybackOptions::default(),
        }
    }
}

/// Default location of the settings file.
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("hypersyn");
    path.push("config.yaml");
    path
}

impl Settings {
    /// Parse settings from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, HypersynError> {
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }
        let raw: RawSettings =
            serde_yaml::from_str(content).map_err(|e| HypersynError::Config(e.to_string()))?;
        Settings::from_raw(raw)
    }

    fn from_raw(raw: RawSettings) -> Result<Self, HypersynError> {
        let defaults = Settings::default();

        // Strict lookup: unknown ids are reported
        let default_voicing = match raw.default_voicing {
            Some(id) => id.parse::<Voicing>()?,
            None => defaults.default_voicing,
        };

        let playback = raw.playback.unwrap_or(defaults.playback);
        playback.validate()?;

        Ok(Settings {
            default_voicing,
            store_path: raw.store_path.unwrap_or(defaults.store_path),
            playback,
        })
    }

    /// Load settings from `path`. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, HypersynError> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)?;
        Settings::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_overrides() {
        let yaml = r#"
default-voicing: drop2
store-path: /tmp/chords.json
playback:
  chord-duration: 3.0
  volume: 0.5
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.default_voicing, Voicing::Drop2);
        assert_eq!(settings.store_path, PathBuf::from("/tmp/chords.json"));
        assert_eq!(settings.playback.chord_duration, 3.0);
        assert_eq!(settings.playback.volume, 0.5);
        // Unset playback keys keep their defaults
        assert_eq!(settings.playback.attack, 1.0);
        assert_eq!(settings.playback.sample_rate, 44_100);
    }

    #[test]
    fn test_unknown_voicing_is_error() {
        let err = Settings::from_yaml("default-voicing: drop9").unwrap_err();
        assert!(matches!(err, HypersynError::UnknownVoicing(id) if id == "drop9"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Settings::from_yaml("playback:\n  volume: 2.0"),
            Err(HypersynError::Playback(_))
        ));
        assert!(matches!(
            Settings::from_yaml("playback:\n  chord-duration: 0"),
            Err(HypersynError::Playback(_))
        ));
        assert!(matches!(
            Settings::from_yaml("playback:\n  sample-rate: 0"),
            Err(HypersynError::Playback(_))
        ));
        assert!(matches!(
            Settings::from_yaml("tempo: 120"),
            Err(HypersynError::Config(_))
        ));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        for yaml in [
            "playback:\n  chord-duration: .inf",
            "playback:\n  chord-duration: .nan",
            "playback:\n  detune-cents: .inf",
            "playback:\n  attack: .nan",
            "playback:\n  release: -1.0",
            "playback:\n  cutoff: -.inf",
            "playback:\n  volume: .nan",
        ] {
            assert!(
                matches!(Settings::from_yaml(yaml), Err(HypersynError::Playback(_))),
                "{}",
                yaml
            );
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "default-voicing: spread\n").unwrap();
        assert_eq!(Settings::load(&path).unwrap().default_voicing, Voicing::Spread);
    }
}
