//! Durable client-side preferences
//!
//! The site stores a single flag, `animationsEnabled`, as a JSON boolean.
//! [`FilePreferences`] persists it under the user's config directory the way
//! the desktop shell keeps its recent-files list; [`MemoryPreferences`] backs
//! server renders and tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::env::Environment;
use crate::error::{SiteError, SiteResult};

/// Key of the hero animation toggle
pub const ANIMATIONS_ENABLED_KEY: &str = "animationsEnabled";

/// Key-value store behind [`Environment::preference`]
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);
}

/// Volatile store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// JSON file store; every write is saved immediately
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Default location: `<config dir>/pakhims/preferences.json`
    pub fn default_path() -> SiteResult<PathBuf> {
        let mut path = dirs::config_dir().ok_or(SiteError::NoConfigDir)?;
        path.push("pakhims");
        path.push("preferences.json");
        Ok(path)
    }

    /// Open the store at the default location
    pub fn open_default() -> SiteResult<Self> {
        Ok(Self::open(Self::default_path()?))
    }

    /// Open the store at `path`. Unreadable or corrupt files start empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(values) => {
                    ::log::debug!("Loaded {} preferences from {}", values.len(), path.display());
                    values
                }
                Err(e) => {
                    ::log::warn!("Failed to parse preferences: {}, starting fresh", e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ::log::debug!("Preference file not found, starting fresh");
                BTreeMap::new()
            }
            Err(e) => {
                ::log::warn!("Failed to read preferences: {}, starting fresh", e);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Write the store to disk
    pub fn save(&self) -> SiteResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        ::log::debug!("Saved {} preferences", self.values.len());
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save() {
            ::log::warn!("Failed to save preferences: {}", e);
        }
    }
}

/// Read the animation toggle. Absent or unparseable values mean enabled.
pub fn animations_enabled(env: &dyn Environment) -> bool {
    match env.preference(ANIMATIONS_ENABLED_KEY) {
        Some(raw) => match serde_json::from_str::<bool>(&raw) {
            Ok(enabled) => enabled,
            Err(e) => {
                ::log::warn!("Ignoring invalid {} value {:?}: {}", ANIMATIONS_ENABLED_KEY, raw, e);
                true
            }
        },
        None => true,
    }
}

/// Persist the animation toggle
pub fn store_animations_enabled(env: &mut dyn Environment, enabled: bool) {
    env.set_preference(ANIMATIONS_ENABLED_KEY, if enabled { "true" } else { "false" });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::virtual_env::VirtualEnvironment;

    fn temp_store_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("pakhims-prefs-{}-{}", name, std::process::id()));
        path.push("preferences.json");
        path
    }

    #[test]
    fn test_animation_preference_defaults_to_enabled() {
        let env = VirtualEnvironment::new();
        assert!(animations_enabled(&env));
    }

    #[test]
    fn test_animation_preference_round_trips_through_store() {
        let mut env = VirtualEnvironment::new();
        store_animations_enabled(&mut env, false);
        assert_eq!(env.preference(ANIMATIONS_ENABLED_KEY).as_deref(), Some("false"));
        assert!(!animations_enabled(&env));
    }

    #[test]
    fn test_garbage_preference_falls_back_to_enabled() {
        let mut env = VirtualEnvironment::new();
        env.set_preference(ANIMATIONS_ENABLED_KEY, "maybe");
        assert!(animations_enabled(&env));
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let path = temp_store_path("persist");
        let _ = fs::remove_file(&path);

        let mut store = FilePreferences::open(&path);
        assert_eq!(store.get(ANIMATIONS_ENABLED_KEY), None);
        store.set(ANIMATIONS_ENABLED_KEY, "false");

        let reopened = FilePreferences::open(&path);
        assert_eq!(reopened.get(ANIMATIONS_ENABLED_KEY).as_deref(), Some("false"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let path = temp_store_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        let store = FilePreferences::open(&path);
        assert_eq!(store.get(ANIMATIONS_ENABLED_KEY), None);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
