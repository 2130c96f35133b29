//! A client created on first use.

use std::time::Duration;

use tokio::sync::OnceCell;

use super::config::ClientConfig;
use super::http::ElevenLabsClient;
use crate::Result;

enum ConfigSource {
    Given(ClientConfig),
    Env,
}

/// Holds an [`ElevenLabsClient`] that is built the first time it is needed.
///
/// Every call to [`get`](Self::get) returns the same instance. Put it in a
/// `static` or in application state to share one client across tasks.
///
/// # Example
///
/// ```no_run
/// use elevenlabs_rs::LazyClient;
///
/// static CLIENT: LazyClient = LazyClient::from_env();
///
/// # async fn example() -> elevenlabs_rs::Result<()> {
/// let models = CLIENT.get().await?.models().list().await?;
/// # Ok(())
/// # }
/// ```
pub struct LazyClient {
    source: ConfigSource,
    cell: OnceCell<ElevenLabsClient>,
}

impl LazyClient {
    /// Build the client from `config` on first use.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            source: ConfigSource::Given(config),
            cell: OnceCell::new(),
        }
    }

    /// Build the client from the environment on first use.
    ///
    /// The variables are read when the client is created, not when this
    /// is called. See [`ClientConfig::from_env`].
    pub const fn from_env() -> Self {
        Self {
            source: ConfigSource::Env,
            cell: OnceCell::const_new(),
        }
    }

    /// The shared client, creating it if needed.
    ///
    /// Concurrent first calls create exactly one client. A failed creation
    /// is not cached; the next call tries again.
    pub async fn get(&self) -> Result<&ElevenLabsClient> {
        self.cell
            .get_or_try_init(|| async {
                let config = match &self.source {
                    ConfigSource::Given(config) => config.clone(),
                    ConfigSource::Env => ClientConfig::from_env()?,
                };
                tracing::debug!(base_url = %config.base_url, "creating shared client");
                ElevenLabsClient::new(config)
            })
            .await
    }

    /// Set the API key of the shared client, creating it if needed.
    pub async fn set_api_key(&self, api_key: impl Into<String>) -> Result<()> {
        self.get().await?.set_api_key(api_key).await;
        Ok(())
    }

    /// Set the timeout of the shared client, creating it if needed.
    pub async fn set_timeout(&self, timeout: Duration) -> Result<()> {
        self.get().await?.set_timeout(timeout).await;
        Ok(())
    }

    /// Returns `true` once the client has been created.
    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }
}

impl Default for LazyClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl std::fmt::Debug for LazyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyClient")
            .field("client", &self.cell.get())
            .finish()
    }
}
