//! Configuration loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use webterm_core::{Filesystem, TerminalConfig};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub filesystem: FilesystemConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SettingsConfig {
    /// JSON file holding theme + history; in-memory when absent
    pub path: Option<PathBuf>,
}

/// Extra entries added to the default filesystem
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FilesystemConfig {
    #[serde(default)]
    pub directories: Vec<String>,
    #[serde(default)]
    pub files: Vec<FileConfig>,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
    /// Paths that `cd` refuses to enter
    #[serde(default)]
    pub forbidden: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileConfig {
    pub path: String,
    #[serde(default)]
    pub contents: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkConfig {
    pub path: String,
    pub target: String,
}

impl FilesystemConfig {
    /// Build the default filesystem plus the configured entries
    pub fn build(&self) -> Result<Filesystem> {
        let mut fs = Filesystem::new();
        for dir in &self.directories {
            fs.create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {:?}", dir))?;
        }
        for file in &self.files {
            fs.create_file(&file.path, file.contents.as_str())
                .with_context(|| format!("Failed to create file {:?}", file.path))?;
        }
        for link in &self.links {
            fs.create_link(&link.path, &link.target)
                .with_context(|| format!("Failed to create link {:?}", link.path))?;
        }
        for path in &self.forbidden {
            fs.set_accessible(path, false)
                .with_context(|| format!("Failed to restrict {:?}", path))?;
        }
        Ok(fs)
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
