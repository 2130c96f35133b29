//! # elevenlabs-rs
//!
//! An async Rust client for the ElevenLabs text-to-speech API.
//!
//! ## Features
//!
//! - **Text to speech**: buffered or streamed into any `AsyncWrite`
//! - **Voices**: list, inspect, clone from samples, edit and delete
//! - **History**: cursor-based pagination and a lazy `Stream` over all items
//! - **Typed errors**: API, validation and status errors are distinct variants
//! - **Timeouts and cancellation**: every call is bounded by the client timeout
//!   and a shared `CancellationToken`
//! - **Async-first**: built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elevenlabs_rs::{ElevenLabsClient, TextToSpeechRequest, VoiceSettings};
//!
//! #[tokio::main]
//! async fn main() -> elevenlabs_rs::Result<()> {
//!     // Reads ELEVENLABS_API_KEY
//!     let client = ElevenLabsClient::from_env()?;
//!
//!     let voices = client.voices().list().await?;
//!     println!("Found {} voices", voices.len());
//!
//!     if let Some(voice) = voices.first() {
//!         let request = TextToSpeechRequest::new("Hello from Rust")
//!             .with_voice_settings(VoiceSettings::new(0.5, 0.75));
//!         let audio = client
//!             .text_to_speech()
//!             .convert(&voice.voice_id, &request, &[])
//!             .await?;
//!         println!("Got {} bytes of audio", audio.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Walking the history
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use elevenlabs_rs::{ElevenLabsClient, QueryModifier};
//!
//! #[tokio::main]
//! async fn main() -> elevenlabs_rs::Result<()> {
//!     let client = ElevenLabsClient::from_env()?;
//!
//!     let mut items = client.history().items(&[QueryModifier::page_size(100)]);
//!     while let Some(item) = items.next().await {
//!         let item = item?;
//!         println!("{} ({} chars)", item.text, item.characters_used());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Handling errors
//!
//! ```rust,no_run
//! use elevenlabs_rs::{ElevenLabsClient, Error, ErrorKind};
//!
//! # async fn example(client: ElevenLabsClient) {
//! match client.models().list().await {
//!     Ok(models) => println!("{} models", models.len()),
//!     Err(e) if e.is_auth_error() => eprintln!("check your API key: {e}"),
//!     Err(Error::Validation(v)) => eprintln!("bad request: {:?}", v.first()),
//!     Err(e) if e.kind() == ErrorKind::Transport => eprintln!("network: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{ApiError, ApiErrorDetail, Error, ErrorKind, Result, ValidationError, ValidationIssue};
pub use models::{
    AddEditVoiceRequest, DownloadHistoryRequest, HistoryItemId, ModelId, SampleId,
    TextToSpeechRequest, VoiceId, VoiceSettings,
};
pub use client::{
    ClientConfig, ElevenLabsClient, HistoryCursor, HistoryPage, HistoryPages, LatencyOptimization,
    LazyClient, QueryModifier,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use elevenlabs_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::models::{
        // Identifiers
        HistoryItemId, ModelId, SampleId, VoiceId,
        // Requests
        AddEditVoiceRequest, DownloadHistoryRequest, TextToSpeechRequest,
        // Responses
        GetHistoryResponse, HistoryItem, Model, Subscription, SubscriptionDetails, User, Voice,
        VoiceSettings,
    };
    pub use crate::client::{
        ClientConfig, ElevenLabsClient, HistoryCursor, HistoryPage, LatencyOptimization,
        LazyClient, QueryModifier,
    };
}
