//! Voice models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::{HistoryItemId, ModelId, SampleId, VoiceId};
use super::{null_default, unix_timestamp};

/// Stability and similarity settings of a voice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Lower values make the voice more expressive, higher more consistent
    #[serde(default, deserialize_with = "null_default")]
    pub stability: f32,
    /// How closely the output should match the original voice
    #[serde(default, deserialize_with = "null_default")]
    pub similarity_boost: f32,
    /// Style exaggeration, for models that support it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f32>,
    /// Speaker boost, for models that support it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

impl VoiceSettings {
    /// Create settings with the two values every model understands.
    pub fn new(stability: f32, similarity_boost: f32) -> Self {
        Self {
            stability,
            similarity_boost,
            ..Default::default()
        }
    }

    /// Set the style exaggeration.
    pub fn with_style(mut self, style: f32) -> Self {
        self.style = Some(style);
        self
    }

    /// Enable or disable speaker boost.
    pub fn with_speaker_boost(mut self, enabled: bool) -> Self {
        self.use_speaker_boost = Some(enabled);
        self
    }
}

/// A voice available to the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Voice {
    /// Voice identifier
    #[serde(deserialize_with = "null_default")]
    pub voice_id: VoiceId,
    /// Display name
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Category, e.g. `premade` or `cloned`
    #[serde(deserialize_with = "null_default")]
    pub category: String,
    /// Description
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    /// Subscription tiers the voice is available for
    #[serde(deserialize_with = "null_default")]
    pub available_for_tiers: Vec<String>,
    /// Fine-tuning state
    #[serde(deserialize_with = "null_default")]
    pub fine_tuning: FineTuning,
    /// Models that produce high quality output with this voice
    #[serde(deserialize_with = "null_default")]
    pub high_quality_base_model_ids: Vec<ModelId>,
    /// Free-form labels (accent, age, ...)
    #[serde(deserialize_with = "null_default")]
    pub labels: BTreeMap<String, String>,
    /// URL of a preview clip
    #[serde(deserialize_with = "null_default")]
    pub preview_url: String,
    /// Uploaded samples
    #[serde(deserialize_with = "null_default")]
    pub samples: Vec<VoiceSample>,
    /// Voice settings; only populated when requested with `with_settings`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<VoiceSettings>,
    /// Sharing information
    #[serde(deserialize_with = "null_default")]
    pub sharing: VoiceSharing,
}

/// Voice library sharing information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSharing {
    /// Sharing status
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    /// Display name in the library
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Description in the library
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    /// Library labels
    #[serde(deserialize_with = "null_default")]
    pub labels: BTreeMap<String, String>,
    /// Number of clones made from this voice
    #[serde(deserialize_with = "null_default")]
    pub cloned_by_count: u32,
    /// Number of likes
    #[serde(deserialize_with = "null_default")]
    pub liked_by_count: u32,
    /// Unix time the voice was shared
    #[serde(deserialize_with = "null_default")]
    pub date_unix: i64,
    /// Whether the voice is scheduled to be disabled
    #[serde(deserialize_with = "null_default")]
    pub disable_at_unix: bool,
    /// Whether the voice is listed in the library
    #[serde(deserialize_with = "null_default")]
    pub enabled_in_library: bool,
    /// Whether the owner receives financial rewards
    #[serde(deserialize_with = "null_default")]
    pub financial_reward_enabled: bool,
    /// Whether free users may use the voice
    #[serde(deserialize_with = "null_default")]
    pub free_users_allowed: bool,
    /// History item used as the library sample
    pub history_item_sample_id: Option<HistoryItemId>,
    /// Whether live moderation is enabled
    #[serde(deserialize_with = "null_default")]
    pub live_moderation_enabled: bool,
    /// Notice period in days
    #[serde(deserialize_with = "null_default")]
    pub notice_period: u32,
    /// Voice this one was cloned from
    pub original_voice_id: Option<VoiceId>,
    /// Public owner identifier
    #[serde(deserialize_with = "null_default")]
    pub public_owner_id: String,
    /// Reward rate
    #[serde(deserialize_with = "null_default")]
    pub rate: f32,
    /// Moderation review message
    #[serde(deserialize_with = "null_default")]
    pub review_message: String,
    /// Moderation review status
    #[serde(deserialize_with = "null_default")]
    pub review_status: String,
    /// Whether voice mixing is allowed
    #[serde(deserialize_with = "null_default")]
    pub voice_mixing_allowed: bool,
    /// Emails allowed to use the voice
    #[serde(deserialize_with = "null_default")]
    pub whitelisted_emails: Vec<String>,
}

impl VoiceSharing {
    /// Time the voice was shared.
    pub fn shared_at(&self) -> Option<DateTime<Utc>> {
        unix_timestamp(self.date_unix)
    }
}

/// An uploaded audio sample of a voice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSample {
    /// Sample identifier
    #[serde(deserialize_with = "null_default")]
    pub sample_id: SampleId,
    /// Original file name
    #[serde(deserialize_with = "null_default")]
    pub file_name: String,
    /// MIME type
    #[serde(deserialize_with = "null_default")]
    pub mime_type: String,
    /// File size
    #[serde(deserialize_with = "null_default")]
    pub size_bytes: u64,
    /// Content hash
    #[serde(deserialize_with = "null_default")]
    pub hash: String,
}

/// Fine-tuning information of a voice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineTuning {
    /// Whether fine-tuning was requested
    #[serde(deserialize_with = "null_default")]
    pub fine_tuning_requested: bool,
    /// Fine-tuning state
    #[serde(rename = "finetuning_state")]
    #[serde(deserialize_with = "null_default")]
    pub fine_tuning_state: String,
    /// Whether the voice may be fine-tuned
    #[serde(deserialize_with = "null_default")]
    pub is_allowed_to_fine_tune: bool,
    /// Language of the fine-tuned voice
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    /// Manual verification data
    #[serde(deserialize_with = "null_default")]
    pub manual_verification: ManualVerification,
    /// Whether manual verification was requested
    #[serde(deserialize_with = "null_default")]
    pub manual_verification_requested: bool,
    /// Slice identifiers
    #[serde(deserialize_with = "null_default")]
    pub slice_ids: Vec<String>,
    /// Verification attempts
    #[serde(deserialize_with = "null_default")]
    pub verification_attempts: Vec<VerificationAttempt>,
    /// Number of verification attempts
    #[serde(deserialize_with = "null_default")]
    pub verification_attempts_count: u32,
    /// Verification failure reasons
    #[serde(deserialize_with = "null_default")]
    pub verification_failures: Vec<String>,
}

/// Manual verification request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualVerification {
    /// Additional text supplied with the request
    #[serde(deserialize_with = "null_default")]
    pub extra_text: String,
    /// Files supplied with the request
    #[serde(deserialize_with = "null_default")]
    pub files: Vec<VerificationFile>,
    /// Unix time of the request
    #[serde(deserialize_with = "null_default")]
    pub request_time_unix: i64,
}

/// A file attached to a manual verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationFile {
    /// File identifier
    #[serde(deserialize_with = "null_default")]
    pub file_id: String,
    /// File name
    #[serde(deserialize_with = "null_default")]
    pub file_name: String,
    /// MIME type
    #[serde(deserialize_with = "null_default")]
    pub mime_type: String,
    /// File size
    #[serde(deserialize_with = "null_default")]
    pub size_bytes: u64,
    /// Unix upload time
    #[serde(deserialize_with = "null_default")]
    pub upload_date_unix: i64,
}

/// One voice verification attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationAttempt {
    /// Whether the attempt was accepted
    #[serde(deserialize_with = "null_default")]
    pub accepted: bool,
    /// Unix time of the attempt
    #[serde(deserialize_with = "null_default")]
    pub date_unix: i64,
    /// Levenshtein distance between text and transcription
    #[serde(deserialize_with = "null_default")]
    pub levenshtein_distance: f32,
    /// The recording
    #[serde(deserialize_with = "null_default")]
    pub recording: Recording,
    /// Similarity score
    #[serde(deserialize_with = "null_default")]
    pub similarity: f32,
    /// Text that was read
    #[serde(deserialize_with = "null_default")]
    pub text: String,
}

/// A verification recording.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recording {
    /// Recording identifier
    #[serde(deserialize_with = "null_default")]
    pub recording_id: String,
    /// MIME type
    #[serde(deserialize_with = "null_default")]
    pub mime_type: String,
    /// File size
    #[serde(deserialize_with = "null_default")]
    pub size_bytes: u64,
    /// Transcription of the recording
    #[serde(deserialize_with = "null_default")]
    pub transcription: String,
    /// Unix upload time
    #[serde(deserialize_with = "null_default")]
    pub upload_date_unix: i64,
}

/// Response of the voice listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetVoicesResponse {
    /// Voices
    #[serde(default, deserialize_with = "null_default")]
    pub voices: Vec<Voice>,
}

/// Response of adding a voice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddVoiceResponse {
    /// Identifier of the new voice
    pub voice_id: VoiceId,
}
