//! Environment-variable rendering for the active profile.
//!
//! Pure functions only: mapping a profile to variables and rendering the
//! assignment lines never touches the process environment. Executing the
//! commands is the user's job.

use super::types::Profile;

/// Base URL consumed by Claude-compatible CLIs.
pub const ENV_BASE_URL: &str = "ANTHROPIC_BASE_URL";
/// Model identifier override.
pub const ENV_MODEL: &str = "ANTHROPIC_MODEL";
/// Credential variable for Anthropic-hosted endpoints.
pub const ENV_AUTH_TOKEN: &str = "ANTHROPIC_AUTH_TOKEN";
/// Credential variable for third-party endpoints.
pub const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";

/// Shell flavor for assignment commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// `export KEY="value"` (sh, bash, zsh)
    Posix,
    /// `set KEY="value"` (cmd.exe)
    WindowsCmd,
}

impl Shell {
    /// The flavor matching the platform this binary runs on.
    pub fn current() -> Self {
        if cfg!(windows) {
            Shell::WindowsCmd
        } else {
            Shell::Posix
        }
    }

    fn assignment(&self, key: &str, value: &str) -> String {
        match self {
            Shell::Posix => format!("export {}=\"{}\"", key, value),
            Shell::WindowsCmd => format!("set {}=\"{}\"", key, value),
        }
    }
}

/// Map a profile to its environment variables, in a fixed order.
///
/// Always emits the base URL and model id. When an API key is set, the
/// credential goes into `ANTHROPIC_AUTH_TOKEN` for Anthropic-hosted
/// endpoints and `ANTHROPIC_API_KEY` for everything else; the unused one
/// of the pair is emitted with an empty value so a stale assignment from
/// a previous switch cannot linger.
pub fn environment_vars(profile: &Profile) -> Vec<(String, String)> {
    let mut vars = vec![
        (ENV_BASE_URL.to_string(), profile.base_url.clone()),
        (ENV_MODEL.to_string(), profile.model.clone()),
    ];

    if profile.has_api_key() {
        if profile.base_url.to_lowercase().contains("anthropic") {
            vars.push((ENV_AUTH_TOKEN.to_string(), profile.api_key.clone()));
            vars.push((ENV_API_KEY.to_string(), String::new()));
        } else {
            vars.push((ENV_API_KEY.to_string(), profile.api_key.clone()));
            vars.push((ENV_AUTH_TOKEN.to_string(), String::new()));
        }
    }

    vars
}

/// Render the assignment lines for a profile in the given shell flavor.
pub fn render_commands(profile: &Profile, shell: Shell) -> Vec<String> {
    environment_vars(profile)
        .iter()
        .map(|(key, value)| shell.assignment(key, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anthropic_profile() -> Profile {
        Profile::new("official", "https://api.anthropic.com", "claude-sonnet-4", "sk-ant-1").unwrap()
    }

    fn proxy_profile() -> Profile {
        Profile::new("proxy", "https://llm.example.com/v1", "claude-sonnet-4", "pk-2").unwrap()
    }

    #[test]
    fn test_vars_always_include_base_url_and_model() {
        let profile = Profile::new("nokey", "https://llm.example.com", "m1", "").unwrap();
        let vars = environment_vars(&profile);

        assert_eq!(
            vars,
            vec![
                (ENV_BASE_URL.to_string(), "https://llm.example.com".to_string()),
                (ENV_MODEL.to_string(), "m1".to_string()),
            ]
        );
    }

    #[test]
    fn test_anthropic_endpoint_uses_auth_token() {
        let vars = environment_vars(&anthropic_profile());

        assert!(vars.contains(&(ENV_AUTH_TOKEN.to_string(), "sk-ant-1".to_string())));
        assert!(vars.contains(&(ENV_API_KEY.to_string(), String::new())));
    }

    #[test]
    fn test_other_endpoint_uses_api_key() {
        let vars = environment_vars(&proxy_profile());

        assert!(vars.contains(&(ENV_API_KEY.to_string(), "pk-2".to_string())));
        assert!(vars.contains(&(ENV_AUTH_TOKEN.to_string(), String::new())));
    }

    #[test]
    fn test_endpoint_match_is_case_insensitive() {
        let profile = Profile::new("odd", "https://API.ANTHROPIC.COM", "m1", "k").unwrap();
        let vars = environment_vars(&profile);

        assert!(vars.contains(&(ENV_AUTH_TOKEN.to_string(), "k".to_string())));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let profile = anthropic_profile();
        let first = render_commands(&profile, Shell::Posix);
        let second = render_commands(&profile, Shell::Posix);
        assert_eq!(first, second);
    }

    #[test]
    fn test_posix_rendering() {
        let commands = render_commands(&proxy_profile(), Shell::Posix);

        assert_eq!(commands[0], "export ANTHROPIC_BASE_URL=\"https://llm.example.com/v1\"");
        assert_eq!(commands[1], "export ANTHROPIC_MODEL=\"claude-sonnet-4\"");
        assert_eq!(commands[2], "export ANTHROPIC_API_KEY=\"pk-2\"");
        assert_eq!(commands[3], "export ANTHROPIC_AUTH_TOKEN=\"\"");
    }

    #[test]
    fn test_windows_rendering() {
        let commands = render_commands(&proxy_profile(), Shell::WindowsCmd);

        assert_eq!(commands[0], "set ANTHROPIC_BASE_URL=\"https://llm.example.com/v1\"");
        assert!(commands.iter().all(|c| c.starts_with("set ")));
    }

    #[test]
    fn test_shell_current_matches_platform() {
        if cfg!(windows) {
            assert_eq!(Shell::current(), Shell::WindowsCmd);
        } else {
            assert_eq!(Shell::current(), Shell::Posix);
        }
    }
}
