//! File-backed profile store.
//!
//! Persists the registry as a JSON document and rewrites the file after
//! every mutating operation. The same document shape is used for the
//! config file and for import/export files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::registry::ProfileRegistry;
use super::types::{Profile, StoreError};

/// Schema version written into every document.
const SCHEMA_VERSION: &str = "1.0";

/// On-disk document shape.
#[derive(Debug, Serialize, Deserialize)]
struct ProfileDocument {
    models: Vec<Profile>,
    #[serde(default)]
    current_model: Option<String>,
    #[serde(default)]
    export_time: Option<String>,
    #[serde(default = "default_version")]
    version: String,
}

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

/// Profile registry bound to a JSON config file.
///
/// Every mutating operation persists immediately; there is no batching and
/// no ambient singleton. Callers hold the store by value and pass it
/// around explicitly.
pub struct ProfileStore {
    path: PathBuf,
    registry: ProfileRegistry,
}

impl ProfileStore {
    /// Open the store at the default location.
    ///
    /// Default path: `~/.claude_model_manager/config.json`
    pub fn open() -> Result<Self, StoreError> {
        Self::open_at(Self::default_path()?)
    }

    /// Open the store at a specific path.
    ///
    /// Creates parent directories if they don't exist. A missing or
    /// malformed config file degrades to an empty registry with a logged
    /// warning; it never fails the open.
    pub fn open_at(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let registry = Self::load_registry(&path);
        Ok(Self { path, registry })
    }

    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let home = dirs::home_dir().ok_or_else(|| {
            StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine home directory",
            ))
        })?;
        Ok(home.join(".claude_model_manager").join("config.json"))
    }

    /// Fail-soft load of the registry from `path`.
    fn load_registry(path: &Path) -> ProfileRegistry {
        if !path.exists() {
            debug!(path = %path.display(), "No config file yet, starting with empty registry");
            return ProfileRegistry::new();
        }

        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read config file, starting with empty registry");
                return ProfileRegistry::new();
            }
        };

        let document = match serde_json::from_str::<ProfileDocument>(&json) {
            Ok(document) => document,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Config file is malformed, starting with empty registry");
                return ProfileRegistry::new();
            }
        };

        match Self::registry_from_document(document) {
            Ok(registry) => {
                debug!(path = %path.display(), profiles = registry.len(), "Loaded profile registry");
                registry
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Config file is inconsistent, starting with empty registry");
                ProfileRegistry::new()
            }
        }
    }

    /// Build a registry from a parsed document, enforcing invariants.
    ///
    /// A `current_model` that names no profile in the document is dropped
    /// rather than rejected.
    fn registry_from_document(document: ProfileDocument) -> Result<ProfileRegistry, StoreError> {
        let mut registry = ProfileRegistry::new();
        for profile in document.models {
            registry
                .add(profile)
                .map_err(|e| StoreError::Format(e.to_string()))?;
        }

        if let Some(name) = document.current_model {
            if registry.contains(&name) {
                registry.set_current(&name)?;
            } else {
                warn!(profile = %name, "Current profile not present in document, clearing");
            }
        }

        Ok(registry)
    }

    /// Serialize the registry and write it to `path`.
    fn write_document(&self, path: &Path) -> Result<(), StoreError> {
        let document = ProfileDocument {
            models: self.registry.profiles().to_vec(),
            current_model: self.registry.current_name().map(String::from),
            export_time: Some(chrono::Utc::now().to_rfc3339()),
            version: SCHEMA_VERSION.to_string(),
        };

        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| StoreError::Format(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Persist the registry to the config file.
    ///
    /// Sets file permissions to 0600 on Unix (the file holds API keys).
    pub fn save(&self) -> Result<(), StoreError> {
        self.write_document(&self.path)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) =
                fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
            {
                warn!(path = %self.path.display(), error = %e, "Failed to set config file permissions");
            }
        }

        Ok(())
    }

    // =========================================================================
    // Mutating operations (each one persists)
    // =========================================================================

    /// Add a profile and persist.
    pub fn add(&mut self, profile: Profile) -> Result<(), StoreError> {
        self.registry.add(profile)?;
        self.save()
    }

    /// Replace the profile stored under `name` and persist.
    pub fn update(&mut self, name: &str, profile: Profile) -> Result<(), StoreError> {
        self.registry.update(name, profile)?;
        self.save()
    }

    /// Remove a profile and persist. Clears `current` if it pointed there.
    pub fn remove(&mut self, name: &str) -> Result<Profile, StoreError> {
        let removed = self.registry.remove(name)?;
        self.save()?;
        Ok(removed)
    }

    /// Mark the named profile as active and persist.
    pub fn set_current(&mut self, name: &str) -> Result<(), StoreError> {
        self.registry.set_current(name)?;
        self.save()
    }

    // =========================================================================
    // Import / Export
    // =========================================================================

    /// Replace the registry with the contents of an external document.
    ///
    /// The file must match the persisted schema; a missing `models` array,
    /// a malformed entry or a duplicate name is a [`StoreError::Format`]
    /// and leaves the current registry untouched. Returns the number of
    /// imported profiles.
    pub fn import_from(&mut self, path: &Path) -> Result<usize, StoreError> {
        let json = fs::read_to_string(path)?;
        let document = serde_json::from_str::<ProfileDocument>(&json)
            .map_err(|e| StoreError::Format(e.to_string()))?;

        let registry = Self::registry_from_document(document)?;
        let count = registry.len();

        self.registry = registry;
        self.save()?;

        debug!(path = %path.display(), profiles = count, "Imported profile registry");
        Ok(count)
    }

    /// Write a snapshot of the registry to `path` with a fresh timestamp.
    pub fn export_to(&self, path: &Path) -> Result<(), StoreError> {
        self.write_document(path)?;
        debug!(path = %path.display(), profiles = self.registry.len(), "Exported profile registry");
        Ok(())
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// The config file path this store is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All profiles in insertion order.
    pub fn profiles(&self) -> &[Profile] {
        self.registry.profiles()
    }

    /// Get a profile by name.
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.registry.get(name)
    }

    /// Name of the active profile, if one is set.
    pub fn current_name(&self) -> Option<&str> {
        self.registry.current_name()
    }

    /// The active profile, if one is set.
    pub fn current_profile(&self) -> Option<&Profile> {
        self.registry.current_profile()
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if the store holds no profiles.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
