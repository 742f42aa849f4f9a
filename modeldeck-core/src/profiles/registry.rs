//! In-memory profile registry.

use super::types::{Profile, StoreError};

/// Ordered collection of profiles plus the active-profile pointer.
///
/// Insertion order is preserved and names are unique. `current` is a weak
/// reference: removing the profile it points at clears it, renaming the
/// profile it points at follows the rename. Persistence lives in
/// [`ProfileStore`](super::ProfileStore); this type never touches the
/// filesystem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
    current: Option<String>,
}

impl ProfileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile. Fails on a name collision, leaving the registry unchanged.
    pub fn add(&mut self, profile: Profile) -> Result<(), StoreError> {
        if self.contains(&profile.name) {
            return Err(StoreError::Validation(format!(
                "a profile named '{}' already exists",
                profile.name
            )));
        }
        self.profiles.push(profile);
        Ok(())
    }

    /// Replace the profile stored under `name`.
    ///
    /// The replacement may carry a different name (rename); `current`
    /// follows a rename. Renaming onto another existing profile fails.
    pub fn update(&mut self, name: &str, profile: Profile) -> Result<(), StoreError> {
        let index = self
            .position(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        if profile.name != name && self.contains(&profile.name) {
            return Err(StoreError::Validation(format!(
                "a profile named '{}' already exists",
                profile.name
            )));
        }

        if self.current.as_deref() == Some(name) {
            self.current = Some(profile.name.clone());
        }
        self.profiles[index] = profile;
        Ok(())
    }

    /// Remove the profile stored under `name`, returning it.
    ///
    /// Clears `current` if it pointed at the removed profile.
    pub fn remove(&mut self, name: &str) -> Result<Profile, StoreError> {
        let index = self
            .position(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
        Ok(self.profiles.remove(index))
    }

    /// Mark the named profile as active.
    pub fn set_current(&mut self, name: &str) -> Result<(), StoreError> {
        if !self.contains(name) {
            return Err(StoreError::NotFound(name.to_string()));
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    /// Get a profile by name.
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Check if a profile exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// All profiles in insertion order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Name of the active profile, if one is set.
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The active profile, if one is set.
    pub fn current_profile(&self) -> Option<&Profile> {
        self.current_name().and_then(|name| self.get(name))
    }

    /// Number of profiles in the registry.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile::new(name, "https://api.example.com", "claude-sonnet-4", "key").unwrap()
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = ProfileRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.current_name().is_none());
    }

    #[test]
    fn test_add_and_get() {
        let mut registry = ProfileRegistry::new();
        registry.add(profile("work")).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("work").unwrap().name, "work");
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn test_add_duplicate_fails_and_leaves_registry_unchanged() {
        let mut registry = ProfileRegistry::new();
        registry.add(profile("work")).unwrap();

        let before = registry.clone();
        let err = registry.add(profile("work")).unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut registry = ProfileRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.add(profile(name)).unwrap();
        }

        let names: Vec<&str> = registry.profiles().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut registry = ProfileRegistry::new();
        registry.add(profile("work")).unwrap();
        registry.add(profile("home")).unwrap();

        let replacement = Profile::new("work", "https://other.example.com", "m2", "").unwrap();
        registry.update("work", replacement).unwrap();

        assert_eq!(registry.get("work").unwrap().base_url, "https://other.example.com");
        // Order unchanged
        assert_eq!(registry.profiles()[0].name, "work");
    }

    #[test]
    fn test_update_missing_fails() {
        let mut registry = ProfileRegistry::new();
        assert!(matches!(
            registry.update("ghost", profile("ghost")),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_rename_follows_current() {
        let mut registry = ProfileRegistry::new();
        registry.add(profile("work")).unwrap();
        registry.set_current("work").unwrap();

        registry.update("work", profile("renamed")).unwrap();

        assert_eq!(registry.current_name(), Some("renamed"));
        assert!(registry.get("work").is_none());
    }

    #[test]
    fn test_update_rename_onto_existing_fails() {
        let mut registry = ProfileRegistry::new();
        registry.add(profile("work")).unwrap();
        registry.add(profile("home")).unwrap();

        assert!(matches!(
            registry.update("work", profile("home")),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_clears_current() {
        let mut registry = ProfileRegistry::new();
        registry.add(profile("work")).unwrap();
        registry.set_current("work").unwrap();

        let removed = registry.remove("work").unwrap();

        assert_eq!(removed.name, "work");
        assert!(registry.is_empty());
        assert!(registry.current_name().is_none());
    }

    #[test]
    fn test_remove_other_keeps_current() {
        let mut registry = ProfileRegistry::new();
        registry.add(profile("work")).unwrap();
        registry.add(profile("home")).unwrap();
        registry.set_current("work").unwrap();

        registry.remove("home").unwrap();

        assert_eq!(registry.current_name(), Some("work"));
    }

    #[test]
    fn test_set_current_missing_fails() {
        let mut registry = ProfileRegistry::new();
        assert!(matches!(
            registry.set_current("ghost"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_current_profile_resolves() {
        let mut registry = ProfileRegistry::new();
        registry.add(profile("work")).unwrap();
        assert!(registry.current_profile().is_none());

        registry.set_current("work").unwrap();
        assert_eq!(registry.current_profile().unwrap().name, "work");
    }

    #[test]
    fn test_add_activate_remove_scenario() {
        let mut registry = ProfileRegistry::new();
        registry
            .add(Profile::new("A", "https://x/", "m1", "k").unwrap())
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.current_name().is_none());

        registry.set_current("A").unwrap();
        assert_eq!(registry.current_name(), Some("A"));

        registry.remove("A").unwrap();
        assert!(registry.is_empty());
        assert!(registry.current_name().is_none());
    }
}
