use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seed document to load the board tree from at startup.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Where the theme preference is persisted.
    #[serde(default)]
    pub theme_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskboard").join("config.toml"))
    }

    /// Permissive load: a missing, unreadable, or malformed config file falls
    /// back to the defaults rather than failing startup.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    fn load_from(path: &PathBuf) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        toml::from_str(&content).ok()
    }

    /// Theme file to use when none is configured.
    pub fn default_theme_path() -> Option<PathBuf> {
        Self::config_path().map(|p| p.with_file_name("theme"))
    }

    pub fn effective_theme_path(&self) -> Option<PathBuf> {
        self.theme_file.clone().or_else(Self::default_theme_path)
    }
}
