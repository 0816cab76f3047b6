//! # Configuration Module
//!
//! Tunables for generation, discovery, and crossfading, read from an optional
//! TOML file in the platform config directory:
//! - Linux: `~/.config/moodjourney/config.toml`
//! - macOS: `~/Library/Application Support/moodjourney/config.toml`
//! - Windows: `%APPDATA%\moodjourney\config.toml`
//!
//! Every field has a default, so a partial file only overrides what it names.
//! A missing file means defaults; an unreadable or malformed file is logged
//! and also means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "moodjourney";
const CONFIG_FILE: &str = "config.toml";

/// Limits and constants the validator and generator work with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Fewer mood matches than this is an error.
    pub min_songs: usize,
    /// Fewer mood matches than this is a warning.
    pub comfortable_songs: usize,
    pub mood_threshold: f64,
    pub average_song_minutes: f64,
    pub min_duration_minutes: u32,
    pub max_duration_minutes: u32,
    /// Planned length of an open-ended journey.
    pub open_ended_minutes: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            min_songs: 10,
            comfortable_songs: 20,
            mood_threshold: 0.5,
            average_song_minutes: 3.5,
            min_duration_minutes: 15,
            max_duration_minutes: 240,
            open_ended_minutes: crate::arc::OPEN_ENDED_MINUTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverySettings {
    pub max_search_genres: usize,
    /// Most tracks requested from the discovery search.
    pub discovery_limit: usize,
    pub forgotten_gems_limit: usize,
    pub forgotten_gems_threshold: f64,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            max_search_genres: 5,
            discovery_limit: 20,
            forgotten_gems_limit: 10,
            forgotten_gems_threshold: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossfadeSettings {
    pub enabled: bool,
    pub poll_interval_ms: u64,
    /// Volume a fade-in ramps up to, 0-100.
    pub target_volume: u8,
}

impl Default for CrossfadeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_interval_ms: 500,
            target_volume: 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generation: GenerationSettings,
    pub discovery: DiscoverySettings,
    pub crossfade: CrossfadeSettings,
}

impl AppConfig {
    /// Load from the platform config file, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("No config directory on this platform, using defaults");
                Self::default()
            }
        }
    }

    /// Load from an explicit path, falling back to defaults.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e:#}. Using defaults.");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Write this configuration as TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Platform path of the config file, if the platform has a config directory.
#[must_use]
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_documented_constants() {
        let config = AppConfig::default();
        assert_eq!(config.generation.min_songs, 10);
        assert_eq!(config.generation.comfortable_songs, 20);
        assert_eq!(config.generation.mood_threshold, 0.5);
        assert_eq!(config.generation.average_song_minutes, 3.5);
        assert_eq!(config.generation.open_ended_minutes, 180);
        assert_eq!(config.discovery.max_search_genres, 5);
        assert_eq!(config.crossfade.poll_interval_ms, 500);
        assert!(config.crossfade.enabled);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&temp_dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_named_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[generation]\nmin_songs = 12\n\n[crossfade]\nenabled = false\n").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.generation.min_songs, 12);
        assert_eq!(config.generation.comfortable_songs, 20, "unnamed fields keep defaults");
        assert!(!config.crossfade.enabled);
        assert_eq!(config.discovery, DiscoverySettings::default());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[generation\nmin_songs = ").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);
        let mut config = AppConfig::default();
        config.discovery.forgotten_gems_limit = 3;

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path), config);
    }

    #[test]
    fn test_config_path_is_app_scoped() {
        if let Some(path) = get_config_path() {
            assert!(path.ends_with("moodjourney/config.toml"));
        }
    }
}
