//! Data models for the ElevenLabs API.
//!
//! - [`primitives`] - Identifier newtypes like `VoiceId`
//! - [`model`] - Synthesis models
//! - [`tts`] - Text-to-speech request bodies
//! - [`voice`] - Voices, settings and samples
//! - [`history`] - Generated-audio history
//! - [`user`] - User and subscription
//! - [`upload`] - Multipart voice upload requests

pub mod primitives;
pub mod model;
pub mod tts;
pub mod voice;
pub mod history;
pub mod user;
pub mod upload;

pub use primitives::*;
pub use model::*;
pub use tts::*;
pub use voice::*;
pub use history::*;
pub use user::*;
pub use upload::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Converts a unix timestamp in seconds; zero means "not set".
pub(crate) fn unix_timestamp(secs: i64) -> Option<DateTime<Utc>> {
    if secs == 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0)
}

/// Reads `null` as the field's default value.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
