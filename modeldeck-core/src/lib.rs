//! ModelDeck Core Library
//!
//! This crate provides the data layer for ModelDeck, a desktop manager for
//! Claude API endpoint profiles. It includes:
//!
//! - Validated profile records (name, base URL, model id, API key)
//! - An ordered in-memory registry with an active-profile pointer
//! - JSON-file persistence with import/export
//! - Environment-variable command rendering for switching profiles
//!
//! Everything is synchronous and single-threaded: file I/O is open-write-close
//! per call, and the GUI layer serializes access by owning the store.

pub mod profiles;

// Re-exports for convenience
pub use profiles::{
    environment_vars, render_commands, Profile, ProfileRegistry, ProfileStore, Shell, StoreError,
    ENV_API_KEY, ENV_AUTH_TOKEN, ENV_BASE_URL, ENV_MODEL,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn exports_are_accessible() {
        // Verify all public types are accessible
        fn _check_types(
            _profile: &Profile,
            _registry: &ProfileRegistry,
            _store: &ProfileStore,
            _error: &StoreError,
            _shell: Shell,
        ) {
        }
    }
}
