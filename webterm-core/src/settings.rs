//! Persisted terminal settings
//!
//! The theme and the command history survive between sessions. Storage is
//! behind [`SettingsStore`] so the browser can use LocalStorage while the
//! native CLI writes a JSON file.

use crate::theme::ThemeName;
use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings as stored (JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub history: Vec<String>,
}

fn default_theme() -> String {
    ThemeName::default().to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            history: vec![],
        }
    }
}

impl Settings {
    /// Stored theme, unknown names falling back to the default
    pub fn theme_name(&self) -> ThemeName {
        ThemeName::from_name_or_default(&self.theme)
    }
}

/// Where settings are loaded from and saved to
pub trait SettingsStore {
    /// Load saved settings, `None` if nothing was saved yet
    fn load(&self) -> Result<Option<Settings>>;

    fn save(&mut self, settings: &Settings) -> Result<()>;
}

/// In-memory store (tests, ephemeral sessions)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<Settings>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            saved: Some(settings),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Settings>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.saved = Some(settings.clone());
        Ok(())
    }
}

/// Settings kept in a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&content)?;
        log::info!("Settings loaded from {:?}", self.path);
        Ok(Some(settings))
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}
