// src/core/preferences.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::i18n::Locale;

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No configuration directory available")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, PreferencesError>;

/// User-facing display preferences.
///
/// Passed explicitly to whatever renders output; nothing reads the store
/// behind the caller's back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub locale: Locale,
}

impl Preferences {
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}

/// JSON file holding the [`Preferences`].
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
    fallback: Preferences,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fallback: Preferences::default(),
        }
    }

    /// Preferences reported while nothing has been saved yet.
    pub fn with_fallback(mut self, fallback: Preferences) -> Self {
        self.fallback = fallback;
        self
    }

    /// Store at `preferences.json` in the platform config directory.
    ///
    /// The directory itself is created on the first save.
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "rustpassgen", "rustpassgen").ok_or(PreferencesError::NoConfigDir)?;
        Ok(Self::new(dirs.config_dir().join("preferences.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored preferences, or the fallback when nothing is stored yet.
    pub fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            log::debug!("No preferences at {}, using defaults", self.path.display());
            return Ok(self.fallback);
        }

        let content = fs::read_to_string(&self.path)?;
        let preferences = serde_json::from_str(&content)?;
        Ok(preferences)
    }

    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(preferences)?;
        fs::write(&self.path, content)?;
        log::debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }

    /// Load, apply `change`, save, and return the new value.
    pub fn update<F>(&self, change: F) -> Result<Preferences>
    where
        F: FnOnce(&mut Preferences),
    {
        let mut preferences = self.load()?;
        change(&mut preferences);
        self.save(&preferences)?;
        Ok(preferences)
    }
}
