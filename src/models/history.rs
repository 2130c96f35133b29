//! Generated-audio history models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::{HistoryItemId, ModelId, VoiceId};
use super::{null_default, unix_timestamp};
use super::voice::VoiceSettings;

/// One page of the history listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetHistoryResponse {
    /// Items on this page, newest first
    #[serde(deserialize_with = "null_default")]
    pub history: Vec<HistoryItem>,
    /// Identifier of the last item on this page
    #[serde(deserialize_with = "null_default")]
    pub last_history_item_id: HistoryItemId,
    /// Whether another page follows
    #[serde(deserialize_with = "null_default")]
    pub has_more: bool,
}

/// A previously generated audio clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryItem {
    /// Item identifier
    #[serde(deserialize_with = "null_default")]
    pub history_item_id: HistoryItemId,
    /// Request identifier
    #[serde(deserialize_with = "null_default")]
    pub request_id: String,
    /// Voice used
    #[serde(deserialize_with = "null_default")]
    pub voice_id: VoiceId,
    /// Name of the voice used
    #[serde(deserialize_with = "null_default")]
    pub voice_name: String,
    /// Category of the voice used
    #[serde(deserialize_with = "null_default")]
    pub voice_category: String,
    /// Model used
    #[serde(deserialize_with = "null_default")]
    pub model_id: ModelId,
    /// Synthesized text
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    /// Unix creation time
    #[serde(deserialize_with = "null_default")]
    pub date_unix: i64,
    /// Character quota before the request
    #[serde(deserialize_with = "null_default")]
    pub character_count_change_from: u64,
    /// Character quota after the request
    #[serde(deserialize_with = "null_default")]
    pub character_count_change_to: u64,
    /// MIME type of the audio
    #[serde(deserialize_with = "null_default")]
    pub content_type: String,
    /// Processing state
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    /// Voice settings used
    pub settings: Option<VoiceSettings>,
    /// User feedback, if any was given
    pub feedback: Option<Feedback>,
    /// Share link identifier
    pub share_link_id: Option<String>,
}

impl HistoryItem {
    /// Time the clip was generated.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        unix_timestamp(self.date_unix)
    }

    /// Characters consumed by the request.
    pub fn characters_used(&self) -> u64 {
        self.character_count_change_to
            .saturating_sub(self.character_count_change_from)
    }
}

/// Feedback left on a history item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feedback {
    /// Thumbs up
    #[serde(deserialize_with = "null_default")]
    pub thumbs_up: bool,
    /// Free-form feedback
    #[serde(deserialize_with = "null_default")]
    pub feedback: String,
    /// Emotions were off
    #[serde(deserialize_with = "null_default")]
    pub emotions: bool,
    /// Clone was inaccurate
    #[serde(deserialize_with = "null_default")]
    pub inaccurate_clone: bool,
    /// Audio had glitches
    #[serde(deserialize_with = "null_default")]
    pub glitches: bool,
    /// Audio quality was poor
    #[serde(deserialize_with = "null_default")]
    pub audio_quality: bool,
    /// Other problem
    #[serde(deserialize_with = "null_default")]
    pub other: bool,
    /// Moderation review status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_status: Option<String>,
}

/// Body of a history audio download.
///
/// With one ID the API returns the clip itself; with several it returns a
/// zip archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadHistoryRequest {
    /// Items to download
    pub history_item_ids: Vec<HistoryItemId>,
}

impl DownloadHistoryRequest {
    /// Create a download request for the given items.
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<HistoryItemId>,
    {
        Self {
            history_item_ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}
