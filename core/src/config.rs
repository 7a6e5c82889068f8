//! Client configuration.
//!
//! Values come from the environment in deployed hosts and from explicit
//! construction in tests. Base URLs are normalised without a trailing slash.

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "ADMIN_API_BASE_URL";
/// Environment variable holding the version-upload authorization key.
pub const AUTH_KEY_ENV: &str = "ADMIN_API_AUTH_KEY";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Key sent as `authorization` on version endpoints. `None` falls back
    /// to `version::DEFAULT_AUTH_KEY`.
    pub auth_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_key: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            auth_key: None,
        }
    }

    pub fn with_auth_key(mut self, key: impl Into<String>) -> Self {
        self.auth_key = Some(key.into());
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let base_url = present(BASE_URL_ENV)
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            auth_key: present(AUTH_KEY_ENV),
        }
    }
}

pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn reads_values_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (BASE_URL_ENV, "https://admin.example.com/api/"),
            (AUTH_KEY_ENV, "secret-key"),
        ]);
        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, "https://admin.example.com/api");
        assert_eq!(config.auth_key.as_deref(), Some("secret-key"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = ClientConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn new_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8080/").with_auth_key("k");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.auth_key.as_deref(), Some("k"));
    }
}
