//! Theme service with persisted preferences
//!
//! The prefs file is a small versioned JSON document. Writes go through a
//! temp file and an atomic rename, so a crash mid-write leaves the previous
//! prefs intact.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

use crate::palette::{Palette, ThemeMode};

/// File name of the prefs document inside the config directory
const PREFS_KEY: &str = "casa.prefs";

/// Current prefs document version
const PREFS_VERSION: u32 = 1;

/// Errors raised while loading or persisting theme prefs
#[derive(Debug, Error)]
pub enum ThemeStorageError {
    #[error("prefs IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prefs JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Versioned prefs document as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrefsFile {
    version: u32,
    key: String,
    data: ThemePrefs,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ThemePrefs {
    mode: ThemeMode,
}

/// Process-wide theme state
///
/// Construct one, `load` it at startup, and inject it everywhere a screen
/// needs colors. Mode reads are cheap; mode changes persist before they
/// return.
pub struct ThemeService {
    path: PathBuf,
    mode: RwLock<ThemeMode>,
}

impl ThemeService {
    /// Service persisting into the given config directory
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            path: config_dir.as_ref().join(PREFS_KEY),
            mode: RwLock::new(ThemeMode::default()),
        }
    }

    /// Initialize the mode from the persisted prefs
    ///
    /// A missing file means first launch and keeps the default light mode.
    /// A prefs document from a different version is ignored with a warning
    /// rather than failing startup.
    pub async fn load(&self) -> Result<ThemeMode, ThemeStorageError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No theme prefs yet, using default");
                return Ok(self.mode());
            }
            Err(err) => return Err(err.into()),
        };

        let prefs: PrefsFile = serde_json::from_str(&text)?;
        if prefs.version != PREFS_VERSION {
            warn!(
                found = prefs.version,
                expected = PREFS_VERSION,
                "Theme prefs version mismatch, using default"
            );
            return Ok(self.mode());
        }

        *self.mode.write().expect("theme lock poisoned") = prefs.data.mode;
        debug!(mode = ?prefs.data.mode, "Theme prefs loaded");
        Ok(prefs.data.mode)
    }

    /// The current mode
    pub fn mode(&self) -> ThemeMode {
        *self.mode.read().expect("theme lock poisoned")
    }

    /// The palette for the current mode
    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.mode())
    }

    /// Switch to a mode and persist the choice
    pub async fn set_mode(&self, mode: ThemeMode) -> Result<(), ThemeStorageError> {
        *self.mode.write().expect("theme lock poisoned") = mode;
        self.persist(mode).await
    }

    /// Flip between light and dark, persisting the result
    pub async fn toggle(&self) -> Result<ThemeMode, ThemeStorageError> {
        let next = self.mode().toggled();
        self.set_mode(next).await?;
        Ok(next)
    }

    async fn persist(&self, mode: ThemeMode) -> Result<(), ThemeStorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let document = PrefsFile {
            version: PREFS_VERSION,
            key: PREFS_KEY.to_string(),
            data: ThemePrefs { mode },
        };
        let content = serde_json::to_string_pretty(&document)?;

        // Temp file then rename keeps the previous prefs on a failed write
        let temp_path = self.path.with_file_name(format!("{PREFS_KEY}.tmp"));
        fs::write(&temp_path, &content).await?;
        fs::rename(&temp_path, &self.path).await?;

        debug!(mode = ?mode, "Theme prefs saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_first_launch_defaults_to_light() {
        let dir = TempDir::new().unwrap();
        let service = ThemeService::new(dir.path());

        assert_eq!(service.load().await.unwrap(), ThemeMode::Light);
        assert_eq!(service.palette(), Palette::light());
    }

    #[tokio::test]
    async fn test_mode_survives_restart() {
        let dir = TempDir::new().unwrap();

        let service = ThemeService::new(dir.path());
        service.load().await.unwrap();
        assert_eq!(service.toggle().await.unwrap(), ThemeMode::Dark);

        // A fresh service reads the persisted choice
        let reopened = ThemeService::new(dir.path());
        assert_eq!(reopened.load().await.unwrap(), ThemeMode::Dark);
        assert_eq!(reopened.palette(), Palette::dark());
    }

    #[tokio::test]
    async fn test_set_mode_is_idempotent_on_disk() {
        let dir = TempDir::new().unwrap();
        let service = ThemeService::new(dir.path());

        service.set_mode(ThemeMode::Dark).await.unwrap();
        service.set_mode(ThemeMode::Dark).await.unwrap();
        assert_eq!(service.mode(), ThemeMode::Dark);

        // No stray temp file after the rename
        assert!(!dir.path().join("casa.prefs.tmp").exists());
    }

    #[tokio::test]
    async fn test_version_mismatch_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PREFS_KEY);
        let document = r#"{"version": 99, "key": "casa.prefs", "data": {"mode": "dark"}}"#;
        tokio::fs::write(&path, document).await.unwrap();

        let service = ThemeService::new(dir.path());
        assert_eq!(service.load().await.unwrap(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_corrupt_prefs_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PREFS_KEY);
        tokio::fs::write(&path, "{not json").await.unwrap();

        let service = ThemeService::new(dir.path());
        assert!(matches!(
            service.load().await,
            Err(ThemeStorageError::Json(_))
        ));
    }
}
