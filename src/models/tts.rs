//! Text-to-speech request bodies.

use serde::{Deserialize, Serialize};

use super::primitives::ModelId;
use super::voice::VoiceSettings;

/// Body of a text-to-speech conversion.
///
/// # Example
///
/// ```
/// use elevenlabs_rs::models::{TextToSpeechRequest, VoiceSettings};
///
/// let request = TextToSpeechRequest::new("Hello there")
///     .with_model("eleven_multilingual_v2")
///     .with_voice_settings(VoiceSettings::new(0.5, 0.75));
/// assert_eq!(request.text, "Hello there");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextToSpeechRequest {
    /// Text to synthesize
    pub text: String,
    /// Model to use; the API default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<ModelId>,
    /// Per-request voice settings overriding the voice's stored settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<VoiceSettings>,
}

impl TextToSpeechRequest {
    /// Create a request for the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Select the synthesis model.
    pub fn with_model(mut self, model_id: impl Into<ModelId>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// Override the voice settings for this request.
    pub fn with_voice_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = Some(settings);
        self
    }
}
