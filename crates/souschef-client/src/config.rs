//! Client connection settings.
//!
//! The client never reads the environment on its own. Entry points call
//! [`ClientConfig::from_env`] once (or build the struct directly) and pass
//! the result to [`crate::KitchenClient::new`].

pub const DEFAULT_API_BASE_URL: &str = "https://souschef.ddns.net/api/";
pub const DEFAULT_API_USER_AGENT: &str = "Sous Chef Buffet";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const ENV_AUTH_EMAIL: &str = "SC_API_AUTH_EMAIL";
pub const ENV_AUTH_KEY: &str = "SC_API_AUTH_KEY";
pub const ENV_BASE_URL: &str = "SC_API_BASE_URL";
pub const ENV_USER_AGENT: &str = "SC_API_USER_AGENT";
pub const ENV_TIMEOUT_MS: &str = "SC_API_TIMEOUT_MS";

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_API_USER_AGENT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Identity and transport settings for one [`crate::KitchenClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Media Cloud account email, sent as `mediacloud-email`.
    pub auth_email: Option<String>,

    /// Media Cloud API key, sent as a bearer token.
    pub auth_key: Option<String>,

    /// Base URL every endpoint path is joined onto. Keep the trailing slash.
    pub base_url: String,

    pub user_agent: String,

    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_email: None,
            auth_key: None,
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Resolve settings from the process environment, falling back to the
    /// built-in defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    ///
    /// Empty values count as unset. An unparsable timeout falls back to the
    /// default with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_ms = match get(ENV_TIMEOUT_MS) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Ignoring invalid {ENV_TIMEOUT_MS}");
                DEFAULT_TIMEOUT_MS
            }),
            None => DEFAULT_TIMEOUT_MS,
        };

        Self {
            auth_email: get(ENV_AUTH_EMAIL),
            auth_key: get(ENV_AUTH_KEY),
            base_url: get(ENV_BASE_URL).unwrap_or_else(default_base_url),
            user_agent: get(ENV_USER_AGENT).unwrap_or_else(default_user_agent),
            timeout_ms,
        }
    }

    #[must_use]
    pub fn with_credentials(mut self, email: impl Into<String>, key: impl Into<String>) -> Self {
        self.auth_email = Some(email.into());
        self.auth_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Auth email, if one is configured and non-empty.
    pub fn email(&self) -> Option<&str> {
        self.auth_email.as_deref().filter(|v| !v.is_empty())
    }

    /// Auth key, if one is configured and non-empty.
    pub fn key(&self) -> Option<&str> {
        self.auth_key.as_deref().filter(|v| !v.is_empty())
    }

    pub fn has_credentials(&self) -> bool {
        self.email().is_some() && self.key().is_some()
    }
}
