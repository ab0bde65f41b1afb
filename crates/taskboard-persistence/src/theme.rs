use std::path::{Path, PathBuf};
use taskboard_core::TaskboardResult;

/// The two presentation modes. Persisted as the plain strings `"light"` and
/// `"dark"` under a single fixed key (one file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Durable store for a single string preference
/// Implements the load half permissively: anything unreadable reads as absent
#[async_trait::async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn save(&self, value: &str) -> TaskboardResult<()>;
    async fn load(&self) -> Option<String>;
    fn path(&self) -> &Path;
}

/// File-backed theme preference store
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the persisted theme, defaulting to light when the preference is
    /// absent or unparseable. The next save repairs a bad file.
    pub async fn load_theme(&self) -> Theme {
        match self.load().await {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                tracing::warn!(
                    "Unrecognized theme value {:?} in {}, defaulting to light",
                    value,
                    self.path.display()
                );
                Theme::default()
            }),
            None => Theme::default(),
        }
    }

    /// Persist the theme. Fire-and-forget: a failed write is logged and not
    /// retried, the in-memory theme stays authoritative for the session.
    pub async fn save_theme(&self, theme: Theme) {
        if let Err(e) = self.save(theme.as_str()).await {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
    }

    /// Write the value through a temp file and rename it into place, so a
    /// crash mid-write leaves the previous preference intact. The temp file
    /// lives in the same directory to keep the rename on one filesystem.
    async fn write_value(&self, value: &str) -> TaskboardResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        tokio::fs::create_dir_all(parent).await?;

        let temp = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp.path().to_path_buf();
        tokio::fs::write(&temp_path, value.as_bytes()).await?;
        // Rename is atomic on POSIX
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl PreferenceStore for ThemeStore {
    async fn save(&self, value: &str) -> TaskboardResult<()> {
        self.write_value(value).await?;
        tracing::info!("Saved preference to {}", self.path.display());
        Ok(())
    }

    async fn load(&self) -> Option<String> {
        tokio::fs::read_to_string(&self.path).await.ok()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_theme_round_trip() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("theme"));

        store.save_theme(Theme::Dark).await;
        assert_eq!(store.load_theme().await, Theme::Dark);

        store.save_theme(Theme::Light).await;
        assert_eq!(store.load_theme().await, Theme::Light);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_value_cleanly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");
        let store = ThemeStore::new(&path);

        store.save_theme(Theme::Dark).await;
        store.save_theme(Theme::Light).await;

        // The file holds exactly the latest value, no remnants of the old one.
        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(raw, "light");
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("prefs/ui/theme"));

        store.save_theme(Theme::Dark).await;
        assert_eq!(store.load_theme().await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_missing_file_defaults_to_light() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("absent"));
        assert_eq!(store.load_theme().await, Theme::Light);
    }

    #[tokio::test]
    async fn test_garbage_value_defaults_to_light() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");
        tokio::fs::write(&path, "solarized").await.unwrap();

        let store = ThemeStore::new(&path);
        assert_eq!(store.load_theme().await, Theme::Light);
    }

    #[tokio::test]
    async fn test_persisted_value_is_plain_string() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");
        let store = ThemeStore::new(&path);

        store.save_theme(Theme::Dark).await;
        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(raw, "dark");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
