//! Profile record and store error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in the profile store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Bad or duplicate input (empty required field, name collision).
    #[error("Invalid profile: {0}")]
    Validation(String),
    /// No profile with the given name.
    #[error("Profile not found: {0}")]
    NotFound(String),
    /// A document that doesn't match the persisted schema.
    #[error("Malformed profile document: {0}")]
    Format(String),
    /// Filesystem failure reading or writing the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A named API endpoint configuration.
///
/// Invariants are enforced at construction: `name`, `base_url` and `model`
/// are non-empty and `base_url` parses as a URL. Deserialization funnels
/// through the same checks, so an invalid record cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct Profile {
    /// Unique display name (e.g. "anthropic-official").
    pub name: String,
    /// API base URL (e.g. "https://api.anthropic.com").
    pub base_url: String,
    /// Model identifier sent to the endpoint (e.g. "claude-sonnet-4-20250514").
    pub model: String,
    /// API key; an empty string means "not set".
    pub api_key: String,
}

impl Profile {
    /// Create a validated profile. Inputs are trimmed.
    pub fn new(name: &str, base_url: &str, model: &str, api_key: &str) -> Result<Self, StoreError> {
        let name = name.trim();
        let base_url = base_url.trim();
        let model = model.trim();

        if name.is_empty() {
            return Err(StoreError::Validation("name must not be empty".into()));
        }
        if base_url.is_empty() {
            return Err(StoreError::Validation("base URL must not be empty".into()));
        }
        if model.is_empty() {
            return Err(StoreError::Validation("model id must not be empty".into()));
        }
        if let Err(e) = url::Url::parse(base_url) {
            return Err(StoreError::Validation(format!(
                "base URL '{}' is not a valid URL: {}",
                base_url, e
            )));
        }

        Ok(Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            model: model.to_string(),
            api_key: api_key.trim().to_string(),
        })
    }

    /// Whether an API key is set.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Masked key for display ("sk-a...f3b2"); never the full key.
    pub fn api_key_preview(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 8 {
            return "****".to_string();
        }
        let prefix: String = chars[..4].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", prefix, suffix)
    }
}

/// Wire shape of a profile entry, before invariant checks.
#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    base_url: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    api_key: String,
}

impl TryFrom<RawProfile> for Profile {
    type Error = StoreError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        Profile::new(&raw.name, &raw.base_url, &raw.model, &raw.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_new_valid() {
        let profile = Profile::new("work", "https://api.anthropic.com", "claude-sonnet-4", "sk-1")
            .unwrap();
        assert_eq!(profile.name, "work");
        assert!(profile.has_api_key());
    }

    #[test]
    fn test_profile_new_trims_input() {
        let profile = Profile::new(" work ", " https://x/ ", " m1 ", " k ").unwrap();
        assert_eq!(profile.name, "work");
        assert_eq!(profile.base_url, "https://x/");
        assert_eq!(profile.model, "m1");
        assert_eq!(profile.api_key, "k");
    }

    #[test]
    fn test_profile_new_rejects_empty_fields() {
        assert!(matches!(
            Profile::new("", "https://x/", "m1", ""),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            Profile::new("a", "", "m1", ""),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            Profile::new("a", "https://x/", "", ""),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_profile_new_rejects_invalid_url() {
        assert!(matches!(
            Profile::new("a", "not a url", "m1", ""),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_profile_new_allows_empty_api_key() {
        let profile = Profile::new("a", "https://x/", "m1", "").unwrap();
        assert!(!profile.has_api_key());
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let err = serde_json::from_str::<Profile>(r#"{"name":"","base_url":"https://x/","model":"m"}"#);
        assert!(err.is_err());

        let ok: Profile =
            serde_json::from_str(r#"{"name":"a","base_url":"https://x/","model":"m"}"#).unwrap();
        assert_eq!(ok.api_key, "");
    }

    #[test]
    fn test_api_key_preview_masks() {
        let short = Profile::new("a", "https://x/", "m", "tiny").unwrap();
        assert_eq!(short.api_key_preview(), "****");

        let long = Profile::new("a", "https://x/", "m", "sk-ant-0123456789abcdef").unwrap();
        let preview = long.api_key_preview();
        assert!(preview.starts_with("sk-a"));
        assert!(preview.ends_with("cdef"));
        assert!(!preview.contains("0123456789"));
    }

    #[test]
    fn test_api_key_preview_handles_multibyte_keys() {
        let profile = Profile::new("a", "https://x/", "m", "ab🔑def🔑xyz").unwrap();
        assert_eq!(profile.api_key_preview(), "ab🔑d...🔑xyz");
    }
}
