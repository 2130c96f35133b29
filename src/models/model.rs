//! Synthesis model metadata.

use serde::{Deserialize, Serialize};

use super::null_default;
use super::primitives::ModelId;

/// A language supported by a model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    /// Language code, e.g. `en`
    #[serde(deserialize_with = "null_default")]
    pub language_id: String,
    /// Display name
    #[serde(deserialize_with = "null_default")]
    pub name: String,
}

/// A text-to-speech model available to the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    /// Model identifier
    #[serde(deserialize_with = "null_default")]
    pub model_id: ModelId,
    /// Display name
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Description
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    /// Whether the model can be fine-tuned
    #[serde(rename = "can_be_finetuned")]
    #[serde(deserialize_with = "null_default")]
    pub can_be_fine_tuned: bool,
    /// Whether the model supports text to speech
    #[serde(deserialize_with = "null_default")]
    pub can_do_text_to_speech: bool,
    /// Whether the model supports voice conversion
    #[serde(deserialize_with = "null_default")]
    pub can_do_voice_conversion: bool,
    /// Whether the speaker boost setting applies
    #[serde(deserialize_with = "null_default")]
    pub can_use_speaker_boost: bool,
    /// Whether the style setting applies
    #[serde(deserialize_with = "null_default")]
    pub can_use_style: bool,
    /// Supported languages
    #[serde(deserialize_with = "null_default")]
    pub languages: Vec<Language>,
    /// Character limit per request for free users
    #[serde(deserialize_with = "null_default")]
    pub max_characters_request_free_user: u32,
    /// Character limit per request for subscribed users
    #[serde(deserialize_with = "null_default")]
    pub max_characters_request_subscribed_user: u32,
    /// Whether alpha access is needed
    #[serde(deserialize_with = "null_default")]
    pub requires_alpha_access: bool,
    /// Whether the model serves professional voices
    #[serde(deserialize_with = "null_default")]
    pub serves_pro_voices: bool,
    /// Relative character cost
    #[serde(deserialize_with = "null_default")]
    pub token_cost_factor: f32,
}

impl Model {
    /// Returns `true` if the model supports the given language code.
    pub fn supports_language(&self, language_id: &str) -> bool {
        self.languages.iter().any(|l| l.language_id == language_id)
    }
}
