//! Voice samples service.

use std::sync::Arc;

use bytes::Bytes;

use crate::client::ClientInner;
use crate::models::{SampleId, VoiceId};
use crate::Result;

/// Service for the audio samples attached to a voice.
pub struct SamplesService {
    inner: Arc<ClientInner>,
}

impl SamplesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Delete a sample.
    pub async fn delete(&self, voice: &VoiceId, sample: &SampleId) -> Result<()> {
        self.inner
            .delete(&format!("/voices/{}/samples/{}", voice, sample))
            .await
    }

    /// Download a sample's audio.
    pub async fn audio(&self, voice: &VoiceId, sample: &SampleId) -> Result<Bytes> {
        self.inner
            .get_bytes(&format!("/voices/{}/samples/{}/audio", voice, sample))
            .await
    }
}
