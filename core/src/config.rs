//! Client configuration.
//!
//! A `PlusConfig` is handed to `PlusClient::new`; nothing is read from
//! process-wide state after construction, so independent clients (different
//! tokens or base URLs) can coexist.

/// Base URL of the public Google+ REST API.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/plus/v1";

const ENV_BASE_URL: &str = "PLUS_BASE_URL";
const ENV_ACCESS_TOKEN: &str = "PLUS_ACCESS_TOKEN";

/// Connection settings for the Google+ API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlusConfig {
    /// Versioned API root, e.g. `https://www.googleapis.com/plus/v1`.
    pub base_url: String,
    /// OAuth2 access token sent as the `access_token` query parameter.
    pub access_token: String,
}

impl PlusConfig {
    /// Config against the public API endpoint.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read `PLUS_ACCESS_TOKEN` (required) and `PLUS_BASE_URL` (optional).
    ///
    /// Returns `None` when no access token is set.
    pub fn from_env() -> Option<Self> {
        let access_token = std::env::var(ENV_ACCESS_TOKEN).ok()?;
        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Some(Self {
            base_url,
            access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn new_uses_public_endpoint() {
        let config = PlusConfig::new("ACCESS_TOKEN");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.access_token, "ACCESS_TOKEN");
    }

    #[test]
    fn with_base_url_overrides_endpoint() {
        let config = PlusConfig::new("t").with_base_url("http://127.0.0.1:3000/plus/v1");
        assert_eq!(config.base_url, "http://127.0.0.1:3000/plus/v1");
    }

    #[test]
    fn from_env_requires_access_token() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        std::env::remove_var(ENV_ACCESS_TOKEN);
        assert!(PlusConfig::from_env().is_none());

        std::env::set_var(ENV_ACCESS_TOKEN, "from-env");
        std::env::remove_var(ENV_BASE_URL);
        let config = PlusConfig::from_env().expect("token is set");
        assert_eq!(config.access_token, "from-env");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        std::env::set_var(ENV_BASE_URL, "http://localhost:3000/plus/v1");
        let config = PlusConfig::from_env().expect("token is set");
        assert_eq!(config.base_url, "http://localhost:3000/plus/v1");

        std::env::remove_var(ENV_ACCESS_TOKEN);
        std::env::remove_var(ENV_BASE_URL);
    }
}
