//! Client configuration.

use std::time::Duration;

/// Production REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://rest-api.lobbyview.org";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the token is attached to each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`
    #[default]
    Bearer,
    /// `token: <token>`, the header older deployments of the service expect.
    TokenHeader,
}

impl std::str::FromStr for AuthScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bearer" => Ok(AuthScheme::Bearer),
            "token" | "token-header" => Ok(AuthScheme::TokenHeader),
            other => Err(format!(
                "unknown auth scheme '{}'. Valid values: bearer, token",
                other
            )),
        }
    }
}

/// Settings for a [`Client`](crate::Client). The token is passed separately.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host, without a trailing `/api`.
    pub base_url: String,
    pub timeout: Duration,
    pub auth_scheme: AuthScheme,
    /// Issue a lightweight request at construction so a bad token fails early.
    pub test_connection: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            auth_scheme: AuthScheme::default(),
            test_connection: true,
            user_agent: format!("lobbyview/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Reads overrides from `LOBBYVIEW_BASE_URL`, `LOBBYVIEW_TIMEOUT_SECS`,
    /// `LOBBYVIEW_AUTH_SCHEME` and `LOBBYVIEW_TEST_CONNECTION`.
    /// Unset or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("LOBBYVIEW_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(env_u64(
                "LOBBYVIEW_TIMEOUT_SECS",
                defaults.timeout.as_secs(),
            )),
            auth_scheme: std::env::var("LOBBYVIEW_AUTH_SCHEME")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.auth_scheme),
            test_connection: env_bool("LOBBYVIEW_TEST_CONNECTION", defaults.test_connection),
            user_agent: defaults.user_agent,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_auth_scheme(mut self, auth_scheme: AuthScheme) -> Self {
        self.auth_scheme = auth_scheme;
        self
    }

    pub fn with_test_connection(mut self, test_connection: bool) -> Self {
        self.test_connection = test_connection;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|val| parse_bool(&val))
        .unwrap_or(default)
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.auth_scheme, AuthScheme::Bearer);
        assert!(config.test_connection);
        assert!(config.user_agent.starts_with("lobbyview/"));
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(5))
            .with_auth_scheme(AuthScheme::TokenHeader)
            .with_test_connection(false);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.auth_scheme, AuthScheme::TokenHeader);
        assert!(!config.test_connection);
    }

    #[test]
    fn auth_scheme_parsing() {
        assert_eq!("Bearer".parse::<AuthScheme>(), Ok(AuthScheme::Bearer));
        assert_eq!("token".parse::<AuthScheme>(), Ok(AuthScheme::TokenHeader));
        assert!("basic".parse::<AuthScheme>().is_err());
    }

    #[test]
    fn bool_parsing() {
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool(" TRUE "), Some(true));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn env_helpers_fall_back_on_garbage() {
        std::env::set_var("LOBBYVIEW_TEST_ENV_U64", "not-a-number");
        assert_eq!(env_u64("LOBBYVIEW_TEST_ENV_U64", 30), 30);
        std::env::set_var("LOBBYVIEW_TEST_ENV_U64", "12");
        assert_eq!(env_u64("LOBBYVIEW_TEST_ENV_U64", 30), 12);
        std::env::remove_var("LOBBYVIEW_TEST_ENV_U64");
        assert!(env_bool("LOBBYVIEW_TEST_ENV_UNSET", true));
    }
}
