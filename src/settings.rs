//! App settings with persistence
//!
//! Settings are read from `<config dir>/stardrift/settings.toml`; a default
//! file is written on first run so there is something to edit next time.

use std::fs;
use std::path::PathBuf;

use bevy::prelude::*;
use serde::Deserialize;
use serde::Serialize;

const SETTINGS_FILENAME: &str = "settings.toml";

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub window: WindowSettings,
    pub input:  InputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width:  f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width:  1280.0,
            height: 720.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// How many scroll units one line-unit wheel tick is worth. Browsers
    /// use roughly 40px per line, which is what the drift constants were
    /// tuned against.
    pub line_scroll_pixels: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            line_scroll_pixels: 40.0,
        }
    }
}

impl AppSettings {
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stardrift"))
    }

    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join(SETTINGS_FILENAME))
    }

    /// Load settings from disk, or fall back to defaults. A missing file is
    /// not an error; the defaults are written out in its place.
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("could not determine config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            let defaults = Self::default();
            if let Err(e) = defaults.save() {
                warn!("failed to write default settings: {e}");
            }
            return defaults;
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("loaded settings from {}", path.display());
                    settings
                },
                Err(e) => {
                    warn!("failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                },
            },
            Err(e) => {
                warn!("failed to read {}: {e}, using defaults", path.display());
                Self::default()
            },
        }
    }

    /// Save settings to disk, creating the config directory if needed.
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("could not determine config directory");
        };
        fs::create_dir_all(&dir)?;
        let content = toml::to_string_pretty(self)?;
        fs::write(dir.join(SETTINGS_FILENAME), content)?;
        Ok(())
    }
}
