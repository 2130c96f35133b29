//! Client configuration options.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tokio_util::sync::CancellationToken;

use crate::{Error, Result};

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Timeout applied to each call unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "ELEVENLABS_BASE_URL";
/// Environment variable overriding the timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "ELEVENLABS_TIMEOUT_SECS";

/// Configuration for the ElevenLabs client.
///
/// An empty API key is valid: requests are then sent without the
/// `xi-api-key` header.
///
/// # Example
///
/// ```
/// use elevenlabs_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_api_key("my-api-key")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// assert_eq!(config.timeout, Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// API origin, without a trailing slash
    pub base_url: String,
    /// API key sent as `xi-api-key`
    pub api_key: SecretString,
    /// Upper bound for a whole call, including reading the body
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Parent cancellation scope for every call made by the client
    pub cancellation: CancellationToken,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: SecretString::from(String::new()),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("elevenlabs-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            cancellation: CancellationToken::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `ELEVENLABS_API_KEY`,
    /// `ELEVENLABS_BASE_URL` and `ELEVENLABS_TIMEOUT_SECS`.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the timeout is not a positive integer.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config = config.with_api_key(key);
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("{TIMEOUT_ENV} must be a number of seconds, got {raw:?}")))?;
            if secs == 0 {
                return Err(Error::Config(format!("{TIMEOUT_ENV} must be greater than zero")));
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = SecretString::from(api_key.into());
        self
    }

    /// Set the API origin. A trailing `/` is removed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use the given token as the parent cancellation scope.
    ///
    /// Cancelling it aborts in-flight calls and fails all later ones.
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Returns `true` if an API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.has_api_key() { "[REDACTED]" } else { "" })
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("cancelled", &self.cancellation.is_cancelled())
            .finish()
    }
}
