//! # Theme State
//!
//! The persisted theme preference. Stands in for the browser's local
//! key-value storage: a small TOML file in the platform data directory.
//!
//! ## Degradation
//! Missing file → Light default. Corrupt file → logged, Light default.
//! Failed save → logged, in-memory state still flips. The theme never blocks
//! anything.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use shopfront_core::Theme;

/// File name of the preference file inside the data directory.
const THEME_FILE: &str = "theme.toml";

/// On-disk shape of the preference file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ThemePrefs {
    theme: Theme,
}

// =============================================================================
// Theme Store
// =============================================================================

/// File-backed store for the theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Opens the store at the platform data directory
    /// (e.g. `~/.local/share/shopfront/theme.toml` on Linux).
    ///
    /// Returns None when no home directory can be determined; callers fall
    /// back to an in-memory default.
    pub fn open_default() -> Option<Self> {
        let dirs = ProjectDirs::from("com", "shopfront", "shopfront")?;
        Some(ThemeStore {
            path: dirs.data_dir().join(THEME_FILE),
        })
    }

    /// Opens a store at an explicit path (tests, portable installs).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        ThemeStore { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the preference; any failure degrades to the Light default.
    pub fn load(&self) -> Theme {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!(path = %self.path.display(), "no theme preference on disk, defaulting");
                return Theme::default();
            }
        };

        match toml::from_str::<ThemePrefs>(&raw) {
            Ok(prefs) => prefs.theme,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "corrupt theme preference, defaulting");
                Theme::default()
            }
        }
    }

    /// Persists the preference, creating the data directory if needed.
    pub fn save(&self, theme: Theme) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let prefs = ThemePrefs { theme };
        let raw = toml::to_string(&prefs).map_err(std::io::Error::other)?;
        fs::write(&self.path, raw)
    }
}

// =============================================================================
// Theme State
// =============================================================================

/// In-memory theme plus its backing store.
#[derive(Debug)]
pub struct ThemeState {
    store: Option<ThemeStore>,
    current: Mutex<Theme>,
}

impl ThemeState {
    /// Loads the persisted preference (Light when absent).
    pub fn load(store: Option<ThemeStore>) -> Self {
        let current = store.as_ref().map(ThemeStore::load).unwrap_or_default();
        ThemeState {
            store,
            current: Mutex::new(current),
        }
    }

    /// The active theme.
    pub fn current(&self) -> Theme {
        *self.current.lock().expect("Theme mutex poisoned")
    }

    /// Flips the theme, persists the new value, and returns it.
    ///
    /// A failed save is logged and does not undo the flip.
    pub fn toggle(&self) -> Theme {
        let mut current = self.current.lock().expect("Theme mutex poisoned");
        *current = current.toggled();
        let theme = *current;
        drop(current);

        if let Some(store) = &self.store {
            if let Err(err) = store.save(theme) {
                warn!(error = %err, "failed to persist theme preference");
            }
        }
        theme
    }
}
