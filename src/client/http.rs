//! HTTP client implementation for the ElevenLabs API.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};
use url::Url;

use crate::api::{
    HistoryService, ModelsService, SamplesService, TextToSpeechService, UserService,
    VoicesService,
};
use crate::error::{ApiError, ValidationError};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::query::{QueryModifier, QueryParams};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "xi-api-key";

/// The main client for interacting with the ElevenLabs API.
///
/// Endpoints are grouped into services reached through accessor methods.
/// Cloning the client is cheap; clones share the connection pool, the
/// API key and the timeout.
///
/// # Example
///
/// ```no_run
/// use elevenlabs_rs::{ElevenLabsClient, TextToSpeechRequest, VoiceId};
///
/// # async fn example() -> elevenlabs_rs::Result<()> {
/// let client = ElevenLabsClient::with_api_key("your-api-key")?;
///
/// let voices = client.voices().list().await?;
/// if let Some(voice) = voices.first() {
///     let audio = client
///         .text_to_speech()
///         .convert(&voice.voice_id, &TextToSpeechRequest::new("Hello!"), &[])
///         .await?;
///     std::fs::write("hello.mp3", &audio).ok();
/// }
/// # Ok(())
/// # }
/// ```
pub struct ElevenLabsClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) cancellation: CancellationToken,
    settings: RwLock<CallSettings>,
}

/// Values read once at the start of every call.
#[derive(Clone)]
struct CallSettings {
    api_key: SecretString,
    timeout: Duration,
}

impl ElevenLabsClient {
    /// Create a new client from a configuration.
    ///
    /// Trailing `/` characters on the base URL are ignored.
    ///
    /// # Errors
    ///
    /// Fails if the base URL cannot be parsed or the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                cancellation: config.cancellation,
                settings: RwLock::new(CallSettings {
                    api_key: config.api_key,
                    timeout: config.timeout,
                }),
            }),
        })
    }

    /// Create a client for the production API with the given key.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::default().with_api_key(api_key))
    }

    /// Create a client configured from the environment.
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Get the text-to-speech service.
    pub fn text_to_speech(&self) -> TextToSpeechService {
        TextToSpeechService::new(self.inner.clone())
    }

    /// Get the models service.
    pub fn models(&self) -> ModelsService {
        ModelsService::new(self.inner.clone())
    }

    /// Get the voices service.
    pub fn voices(&self) -> VoicesService {
        VoicesService::new(self.inner.clone())
    }

    /// Get the voice samples service.
    pub fn samples(&self) -> SamplesService {
        SamplesService::new(self.inner.clone())
    }

    /// Get the history service.
    pub fn history(&self) -> HistoryService {
        HistoryService::new(self.inner.clone())
    }

    /// Get the user service.
    pub fn user(&self) -> UserService {
        UserService::new(self.inner.clone())
    }

    /// Replace the API key used by calls that start after this returns.
    ///
    /// An empty key disables the `xi-api-key` header.
    pub async fn set_api_key(&self, api_key: impl Into<String>) {
        self.inner.settings.write().await.api_key = SecretString::from(api_key.into());
    }

    /// Replace the timeout used by calls that start after this returns.
    pub async fn set_timeout(&self, timeout: Duration) {
        self.inner.settings.write().await.timeout = timeout;
    }

    /// The current per-call timeout.
    pub async fn timeout(&self) -> Duration {
        self.inner.settings.read().await.timeout
    }

    /// Returns `true` if an API key is configured.
    pub async fn has_api_key(&self) -> bool {
        !self.inner.settings.read().await.api_key.expose_secret().is_empty()
    }

    /// The API origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The cancellation scope shared by every call of this client.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.inner.cancellation
    }
}

impl Clone for ElevenLabsClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("base_url", &self.inner.base_url)
            .field("cancelled", &self.inner.cancellation.is_cancelled())
            .finish_non_exhaustive()
    }
}

/// Body of an outbound request.
pub(crate) enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Multipart(reqwest::multipart::Form),
}

/// What the caller expects back; drives the `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResponseKind {
    Json,
    Binary,
}

impl ResponseKind {
    fn accept(self) -> &'static str {
        match self {
            ResponseKind::Json => "application/json",
            ResponseKind::Binary => "*/*",
        }
    }
}

/// Description of one HTTP exchange.
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    body: RequestBody,
    response: ResponseKind,
    query: Vec<QueryModifier>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
            response: ResponseKind::Json,
            query: Vec::new(),
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Serialize `body` as the JSON payload.
    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_vec(body)?);
        Ok(self)
    }

    pub(crate) fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Expect an audio or archive payload instead of JSON.
    pub(crate) fn binary(mut self) -> Self {
        self.response = ResponseKind::Binary;
        self
    }

    pub(crate) fn query(mut self, modifiers: &[QueryModifier]) -> Self {
        self.query.extend_from_slice(modifiers);
        self
    }
}

impl ClientInner {
    async fn snapshot(&self) -> CallSettings {
        self.settings.read().await.clone()
    }

    /// Build the full URL: base, path, then each modifier in order.
    pub(crate) fn resolve_url(&self, path: &str, modifiers: &[QueryModifier]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        let params = QueryParams::from_modifiers(modifiers);
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params.iter() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Perform one exchange and return the whole body of a 200 response.
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<Bytes> {
        let settings = self.snapshot().await;
        let timeout = settings.timeout;

        self.bounded(timeout, async {
            let response = self.send(request, &settings).await?;
            let status = response.status();
            let body = response.bytes().await?;
            check_status(status, body)
        })
        .await
    }

    /// Perform one exchange and copy a 200 body into `sink`.
    ///
    /// The timeout covers the copy. Bytes already written stay written
    /// when the call fails midway.
    pub(crate) async fn execute_to_writer<W>(&self, request: ApiRequest, sink: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let settings = self.snapshot().await;
        let timeout = settings.timeout;

        self.bounded(timeout, async {
            let response = self.send(request, &settings).await?;
            let status = response.status();
            if status != StatusCode::OK {
                let body = response.bytes().await?;
                return check_status(status, body).map(|_| 0);
            }

            let mut written = 0u64;
            let mut chunks = response.bytes_stream();
            while let Some(chunk) = chunks.next().await {
                let chunk = chunk?;
                sink.write_all(&chunk).await.map_err(Error::Sink)?;
                written += chunk.len() as u64;
                trace!(written, "copied response chunk");
            }
            sink.flush().await.map_err(Error::Sink)?;
            Ok(written)
        })
        .await
    }

    /// Run `fut` under the call timeout, aborting early on cancellation.
    async fn bounded<T, F>(&self, timeout: Duration, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.cancellation.is_cancelled() {
            return Err(Error::Cancelled);
        }

        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(Error::Cancelled),
            res = tokio::time::timeout(timeout, fut) => {
                res.unwrap_or_else(|_| Err(Error::Timeout(timeout)))
            }
        }
    }

    async fn send(&self, request: ApiRequest, settings: &CallSettings) -> Result<reqwest::Response> {
        let url = self.resolve_url(&request.path, &request.query)?;
        debug!(method = %request.method, url = %url, "sending request");

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header(ACCEPT, request.response.accept());

        let key = settings.api_key.expose_secret();
        if !key.is_empty() {
            let mut value = HeaderValue::from_str(key)
                .map_err(|_| Error::InvalidInput("API key is not a valid header value".to_string()))?;
            value.set_sensitive(true);
            builder = builder.header(API_KEY_HEADER, value);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.header(CONTENT_TYPE, "application/json").body(body),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let started = Instant::now();
        let response = builder.send().await?;
        debug!(
            method = %request.method,
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "received response"
        );
        Ok(response)
    }

    /// GET a JSON resource.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, query: &[QueryModifier]) -> Result<T> {
        let body = self.execute(ApiRequest::get(path).query(query)).await?;
        decode(&body)
    }

    /// GET a binary resource.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Bytes> {
        self.execute(ApiRequest::get(path).binary()).await
    }

    /// POST a JSON body and return the binary response.
    pub(crate) async fn post_bytes<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        query: &[QueryModifier],
    ) -> Result<Bytes> {
        self.execute(ApiRequest::post(path).json(body)?.query(query).binary())
            .await
    }

    /// POST a multipart form and return the raw response body.
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Bytes> {
        self.execute(ApiRequest::post(path).multipart(form)).await
    }

    /// DELETE a resource, ignoring the response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute(ApiRequest::delete(path)).await?;
        Ok(())
    }
}

/// Classify a fully buffered response.
fn check_status(status: StatusCode, body: Bytes) -> Result<Bytes> {
    match status {
        StatusCode::OK => Ok(body),
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
            let mut err: ApiError = serde_json::from_slice(&body)?;
            err.http_status = status.as_u16();
            Err(Error::Api(err))
        }
        StatusCode::UNPROCESSABLE_ENTITY => {
            let err: ValidationError = serde_json::from_slice(&body)?;
            Err(Error::Validation(err))
        }
        other => Err(Error::unexpected_status(other)),
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}
