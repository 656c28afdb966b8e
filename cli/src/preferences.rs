//! User preferences persistence.
//!
//! Stores user preferences in `~/.crossword-puzzler/preferences.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for preferences operations.
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    /// The last puzzle file that loaded successfully.
    ///
    /// Entering an empty filename at the puzzle prompt opens it again.
    #[serde(default)]
    pub last_puzzle: Option<PathBuf>,
}

/// Get the preferences file path (`~/.crossword-puzzler/preferences.json`).
pub fn preferences_path() -> Result<PathBuf, PreferencesError> {
    let home = dirs::home_dir().ok_or(PreferencesError::NoHomeDir)?;
    Ok(home.join(".crossword-puzzler").join("preferences.json"))
}

/// Load preferences from disk.
///
/// Returns default preferences if the file doesn't exist or can't be read.
pub fn load_preferences() -> Preferences {
    match preferences_path() {
        Ok(path) => load_preferences_from(&path),
        Err(_) => Preferences::default(),
    }
}

fn load_preferences_from(path: &Path) -> Preferences {
    if !path.exists() {
        return Preferences::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("could not read {}: {}", path.display(), e);
            return Preferences::default();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        log::warn!("ignoring malformed preferences in {}: {}", path.display(), e);
        Preferences::default()
    })
}

/// Save preferences to disk.
pub fn save_preferences(prefs: &Preferences) -> Result<(), PreferencesError> {
    save_preferences_to(&preferences_path()?, prefs)
}

fn save_preferences_to(path: &Path, prefs: &Preferences) -> Result<(), PreferencesError> {
    // Ensure the directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(prefs)?;
    std::fs::write(path, json)?;
    log::debug!("saved preferences to {}", path.display());

    Ok(())
}
