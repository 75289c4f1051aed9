//! Light/dark theme preference.
//!
//! The only thing the site persists. Stored as one key in a small JSON
//! key/value file in the data directory, read once at startup and written
//! on every toggle.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::SiteResult;

/// Preferences file name inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Key the theme is stored under.
pub const THEME_KEY: &str = "phoenix-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Class applied to the root element.
    pub fn class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored or command-line value; anything unknown is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON-file backed key/value preference store.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store rooted at `data_dir`. Nothing is touched until load/save.
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(PREFERENCES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored theme, or the default if the file is missing or unreadable.
    pub fn load(&self) -> ThemeMode {
        self.load_or(ThemeMode::default())
    }

    /// Stored theme, or `fallback` if nothing usable has been saved.
    pub fn load_or(&self, fallback: ThemeMode) -> ThemeMode {
        match self.read_entries() {
            Ok(entries) => entries
                .get(THEME_KEY)
                .and_then(Value::as_str)
                .and_then(ThemeMode::parse)
                .unwrap_or(fallback),
            Err(e) => {
                warn!(path = ?self.path, "Failed to read preferences: {}", e);
                fallback
            }
        }
    }

    /// Persist `mode`, keeping any other keys in the file.
    pub fn save(&self, mode: ThemeMode) -> SiteResult<()> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(THEME_KEY.to_string(), Value::from(mode.as_str()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        debug!(%mode, path = ?self.path, "theme saved");
        Ok(())
    }

    /// Every entry in the file, whatever its value type.
    fn read_entries(&self) -> SiteResult<Map<String, Value>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn toggle_flips() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::open(dir.path());
        assert_eq!(store.load(), ThemeMode::Light);
        assert_eq!(store.load_or(ThemeMode::Dark), ThemeMode::Dark);
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::open(dir.path().join("nested"));
        store.save(ThemeMode::Dark).unwrap();
        assert_eq!(ThemeStore::open(dir.path().join("nested")).load(), ThemeMode::Dark);
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::open(dir.path());
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), ThemeMode::Light);
    }

    #[test]
    fn save_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::open(dir.path());
        fs::write(store.path(), r#"{"other":"kept","phoenix-theme":"light"}"#).unwrap();
        store.save(ThemeMode::Dark).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"other\": \"kept\""));
        assert!(raw.contains("\"phoenix-theme\": \"dark\""));
    }

    #[test]
    fn non_string_entries_do_not_hide_theme() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::open(dir.path());
        fs::write(
            store.path(),
            r#"{"volume":3,"recent":["a","b"],"phoenix-theme":"dark"}"#,
        )
        .unwrap();
        assert_eq!(store.load(), ThemeMode::Dark);

        store.save(ThemeMode::Light).unwrap();
        let raw: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["volume"], Value::from(3));
        assert_eq!(raw["recent"], serde_json::json!(["a", "b"]));
        assert_eq!(raw[THEME_KEY], Value::from("light"));
        assert_eq!(store.load(), ThemeMode::Light);
    }

    #[test]
    fn non_string_theme_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::open(dir.path());
        fs::write(store.path(), r#"{"phoenix-theme":true}"#).unwrap();
        assert_eq!(store.load_or(ThemeMode::Dark), ThemeMode::Dark);
    }

    #[test]
    fn parse_is_lenient_about_case() {
        assert_eq!(ThemeMode::parse(" Dark "), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("sepia"), None);
    }
}
