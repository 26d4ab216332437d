/// Gallery configuration
///
/// Read from `<config dir>/samskruthi-gallery/config.json` unless a path is
/// given on the command line. Every field has a default, so a partial file
/// (or no file at all) is fine.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{GalleryError, Result};
use crate::state::spans::SpanMode;

const APP_DIR: &str = "samskruthi-gallery";
const CONFIG_FILE: &str = "config.json";

/// Window theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn theme(&self) -> iced::Theme {
        match self {
            ThemeChoice::Light => iced::Theme::Light,
            ThemeChoice::Dark => iced::Theme::Dark,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory the image paths are relative to
    pub assets_root: PathBuf,
    /// How masonry row-spans are drawn
    pub span_mode: SpanMode,
    /// Generate and use downscaled thumbnails for the grid
    pub thumbnails: bool,
    /// Narrowest a grid column may get, in pixels
    pub min_column_width: f32,
    pub theme: ThemeChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("assets"),
            span_mode: SpanMode::Random,
            thumbnails: true,
            min_column_width: 300.0,
            theme: ThemeChoice::Light,
        }
    }
}

impl Config {
    /// Default config file location
    /// - Linux: ~/.config/samskruthi-gallery/config.json
    /// - macOS: ~/Library/Application Support/samskruthi-gallery/config.json
    /// - Windows: %APPDATA%\samskruthi-gallery\config.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(GalleryError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_json(&json).map_err(|source| GalleryError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` (or the default location), falling back to the
    /// defaults with a warning when the file is unreadable or invalid
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => return Self::default(),
        };

        Self::load(&path).unwrap_or_else(|err| {
            warn!("{}, using defaults", err);
            Self::default()
        })
    }
}
