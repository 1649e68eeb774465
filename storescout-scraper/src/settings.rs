//! Shared application settings.
//!
//! The CLI reads defaults from `~/.config/storescout/settings.toml`; flag
//! values override file values, which override the built-in defaults.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use storescout_core::SortOrder;

/// Persisted defaults for aggregation runs and exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Countries to aggregate over; `None` means the platform default set
    pub countries: Option<Vec<String>>,
    pub language: String,
    /// Reviews requested per country
    pub count: usize,
    pub sort: SortOrder,
    /// Directory for exported JSON documents
    pub export_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            countries: None,
            language: "en".to_string(),
            count: 100,
            sort: SortOrder::Newest,
            export_dir: None,
        }
    }
}

/// Canonical path to the settings file: `~/.config/storescout/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("storescout").join("settings.toml")
}

impl Settings {
    /// Load settings, falling back to defaults when the file is missing.
    /// A file that fails to parse is reported and ignored rather than
    /// blocking every command.
    pub fn load() -> Self {
        let path = settings_path();
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring unreadable settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings, creating parent directories as needed.
    pub fn save(&self) -> io::Result<()> {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let serialized = toml::to_string_pretty(self).map_err(io::Error::other)?;

        // Write atomically
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Export directory, defaulting to `./exports`.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("exports"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let settings = Settings {
            countries: Some(vec!["us".to_string(), "jp".to_string()]),
            language: "de".to_string(),
            count: 50,
            sort: SortOrder::Helpfulness,
            export_dir: Some(PathBuf::from("/tmp/exports")),
        };
        let serialized = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: Settings = toml::from_str("language = \"fr\"\n").unwrap();
        assert_eq!(parsed.language, "fr");
        assert_eq!(parsed.count, 100);
        assert_eq!(parsed.sort, SortOrder::Newest);
        assert_eq!(parsed.countries, None);
    }

    #[test]
    fn test_default_export_dir() {
        assert_eq!(Settings::default().export_dir(), PathBuf::from("exports"));
    }
}
