// SPDX-License-Identifier: MPL-2.0
//! Store state persistence.
//!
//! Transient state that should survive restarts but is not a user
//! preference (unlike `settings.toml`). Stored as TOML in the platform
//! data directory.
//!
//! Path resolution:
//! 1. `WAYFARE_DATA_DIR` environment variable (if set)
//! 2. Platform-specific data directory

use crate::config::APP_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const STATE_FILE: &str = "state.toml";

/// Environment variable overriding the data directory (tests, portable
/// installs).
pub const DATA_DIR_ENV: &str = "WAYFARE_DATA_DIR";

/// Store state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreState {
    /// Ids of favourited locations.
    #[serde(default)]
    pub favourites: Vec<String>,
}

impl StoreState {
    /// Loads persisted state from the default location.
    ///
    /// Returns the state plus an optional notification key when the file
    /// existed but could not be used; a missing file is not a warning.
    pub fn load() -> (Self, Option<&'static str>) {
        let Some(path) = state_file_path() else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(state) => (state, None),
                Err(_) => (Self::default(), Some("notification-state-parse-error")),
            },
            Err(_) => (Self::default(), Some("notification-state-read-error")),
        }
    }

    /// Saves the state, creating the parent directory if needed.
    ///
    /// Returns an optional notification key if saving failed.
    pub fn save(&self) -> Option<&'static str> {
        let Some(path) = state_file_path() else {
            return None;
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-write-error");
            }
        }

        let content = match toml::to_string_pretty(self) {
            Ok(content) => content,
            Err(_) => return Some("notification-state-write-error"),
        };

        match fs::write(&path, content) {
            Ok(()) => None,
            Err(_) => Some("notification-state-write-error"),
        }
    }
}

fn state_file_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Some(PathBuf::from(dir).join(STATE_FILE));
    }
    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(STATE_FILE);
        path
    })
}
