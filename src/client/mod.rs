//! HTTP client and service layer for the ElevenLabs API.
//!
//! This module provides the main entry point [`ElevenLabsClient`], its
//! configuration, the query modifiers accepted by endpoints and the
//! history pagination types.
//!
//! # Example
//!
//! ```no_run
//! use elevenlabs_rs::{ClientConfig, ElevenLabsClient};
//! use std::time::Duration;
//!
//! # async fn example() -> elevenlabs_rs::Result<()> {
//! let client = ElevenLabsClient::new(
//!     ClientConfig::default()
//!         .with_api_key("your-api-key")
//!         .with_timeout(Duration::from_secs(10)),
//! )?;
//!
//! let user = client.user().get().await?;
//! println!("{} characters left", user.subscription.characters_remaining());
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
pub mod query;
mod shared;

pub use config::{
    ClientConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TIMEOUT_ENV,
};
pub use http::{ElevenLabsClient, API_KEY_HEADER};
pub use paginated::{HistoryCursor, HistoryPage, HistoryPages};
pub use query::{LatencyOptimization, QueryModifier, QueryParams};
pub use shared::LazyClient;
pub(crate) use http::{decode, ApiRequest, ClientInner};
