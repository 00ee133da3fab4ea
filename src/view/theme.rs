//! Color theme and its persisted preference.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Preference key holding the theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
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

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Errors from a preference store.
#[derive(Debug)]
pub enum PreferenceError {
    Io(std::io::Error),
    Format(serde_json::Error),
    Unavailable(String),
}

impl std::fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::Io(e) => write!(f, "preference I/O error: {}", e),
            PreferenceError::Format(e) => write!(f, "preference format error: {}", e),
            PreferenceError::Unavailable(msg) => write!(f, "preference store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for PreferenceError {}

impl From<std::io::Error> for PreferenceError {
    fn from(err: std::io::Error) -> Self {
        PreferenceError::Io(err)
    }
}

impl From<serde_json::Error> for PreferenceError {
    fn from(err: serde_json::Error) -> Self {
        PreferenceError::Format(err)
    }
}

/// Client-local key/value preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences persisted as a JSON object in a single file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, PreferenceError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.load()?.remove(key))
    }

    /// Write through a temp file renamed into place. A corrupt file is
    /// replaced instead of blocking every later write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = match self.load() {
            Ok(values) => values,
            Err(PreferenceError::Format(e)) => {
                tracing::warn!(path = ?self.path, "Replacing corrupt preference file: {}", e);
                HashMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, serde_json::to_vec_pretty(&values)?)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
