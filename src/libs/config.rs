//! Named credential profiles and their on-disk file.
//!
//! The file lives at `~/.sloneek/config.json` and has the shape
//! `{ "profiles": { "<name>": Profile, ... } }`. The profile named
//! `_default` is used whenever a command runs without `--profile`.
//!
//! ## Lifecycle
//!
//! - `init` collects a [`Profile`] interactively and [`ConfigStore::upsert`]s it
//! - profiles are only ever replaced whole, never patched
//! - [`ConfigStore::remove`] deletes one; when a single profile survives and it
//!   is not `_default`, it is renamed to `_default`
//!
//! ## Legacy files
//!
//! Older releases stored a single profile at the top level. Such a file is
//! read as a store holding that profile under `_default`. A top-level
//! `activeProfile` key from another old format is dropped on load and never
//! written back.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sloneek::libs::config::ConfigStore;
//!
//! let store = ConfigStore::read()?;
//! let profile = store.resolve(Some("work"))?;
//! println!("Logging as {}", profile.user.name);
//! # Ok::<(), sloneek::libs::error::SloneekError>(())
//! ```

use super::data_storage::DataStorage;
use super::error::SloneekError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_PROFILE: &str = "_default";
const LEGACY_ACTIVE_PROFILE_KEY: &str = "activeProfile";
const PROFILES_KEY: &str = "profiles";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    /// Stored in clear text.
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Named {
    pub uuid: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlanningEventRef {
    pub uuid: String,
    pub detail_uuid: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WorkHours {
    pub start: String,
    pub end: String,
}

impl Default for WorkHours {
    fn default() -> Self {
        Self {
            start: "8:00".to_string(),
            end: "16:00".to_string(),
        }
    }
}

/// Credentials plus the defaults used when logging work.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub credentials: Credentials,
    pub user: Named,
    pub client: Named,
    pub project: Named,
    pub planning_event: PlanningEventRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Named>>,
    pub work_hours: WorkHours,
    /// ISO-8601 instant of the last write.
    pub timestamp: String,
}

/// Outcome of [`ConfigStore::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub name: String,
    pub removed: Profile,
    /// Name of the profile that was renamed to `_default`, if any.
    pub renamed: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigStore {
    pub profiles: BTreeMap<String, Profile>,
}

impl ConfigStore {
    pub fn path() -> PathBuf {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    pub fn exists() -> bool {
        Self::path().exists()
    }

    /// Loads the profiles file, failing with [`SloneekError::ConfigNotFound`]
    /// when it has not been created yet.
    pub fn read() -> Result<Self, SloneekError> {
        let path = Self::path();
        tracing::debug!(path = %path.display(), "reading config");

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SloneekError::ConfigNotFound(path.display().to_string()))
            }
            Err(e) => return Err(SloneekError::Config(e.to_string())),
        };
        Self::from_json(&text)
    }

    /// Parses a config blob, migrating the legacy single-profile layout.
    pub fn from_json(text: &str) -> Result<Self, SloneekError> {
        let mut value: Value = serde_json::from_str(text).map_err(|e| SloneekError::Config(e.to_string()))?;

        let Some(object) = value.as_object_mut() else {
            return Err(SloneekError::Config("expected a JSON object".to_string()));
        };

        if !object.contains_key(PROFILES_KEY) {
            let legacy: Profile = serde_json::from_value(value).map_err(|e| SloneekError::Config(e.to_string()))?;
            let mut store = Self::default();
            store.profiles.insert(DEFAULT_PROFILE.to_string(), legacy);
            return Ok(store);
        }

        object.remove(LEGACY_ACTIVE_PROFILE_KEY);
        serde_json::from_value(value).map_err(|e| SloneekError::Config(e.to_string()))
    }

    /// Rewrites the whole file; the new content is written next to it and
    /// renamed into place.
    pub fn save(&self) -> Result<(), SloneekError> {
        let storage = DataStorage::new();
        let path = storage.ensure_path(CONFIG_FILE_NAME)?;
        let tmp_path = storage.get_path(&format!("{}.tmp", CONFIG_FILE_NAME));
        tracing::debug!(path = %path.display(), "writing config");

        let json = serde_json::to_string_pretty(self).map_err(|e| SloneekError::Config(e.to_string()))?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// The named profile, or `_default` when no name is given.
    pub fn resolve(&self, name: Option<&str>) -> Result<&Profile, SloneekError> {
        if self.profiles.is_empty() {
            return Err(SloneekError::NoProfiles);
        }

        let name = name.unwrap_or(DEFAULT_PROFILE);
        self.profiles
            .get(name)
            .ok_or_else(|| SloneekError::ProfileNotFound(name.to_string()))
    }

    /// Inserts or replaces the profile stored under `name` (`_default` when
    /// `None`).
    pub fn upsert(&mut self, name: Option<&str>, profile: Profile) {
        self.profiles
            .insert(name.unwrap_or(DEFAULT_PROFILE).to_string(), profile);
    }

    pub fn remove(&mut self, name: &str) -> Result<Removal, SloneekError> {
        let removed = self
            .profiles
            .remove(name)
            .ok_or_else(|| SloneekError::ProfileNotFound(name.to_string()))?;

        let mut renamed = None;
        if self.profiles.len() == 1 {
            if let Some(remaining) = self.profiles.keys().next().cloned() {
                if remaining != DEFAULT_PROFILE {
                    if let Some(profile) = self.profiles.remove(&remaining) {
                        self.profiles.insert(DEFAULT_PROFILE.to_string(), profile);
                        renamed = Some(remaining);
                    }
                }
            }
        }

        Ok(Removal {
            name: name.to_string(),
            removed,
            renamed,
        })
    }
}
