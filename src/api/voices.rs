//! Voices service.

use std::sync::Arc;

use crate::client::{decode, ApiRequest, ClientInner, QueryModifier};
use crate::models::{
    AddEditVoiceRequest, AddVoiceResponse, GetVoicesResponse, Voice, VoiceId, VoiceSettings,
};
use crate::Result;

/// Service for voice operations.
///
/// # Example
///
/// ```no_run
/// use elevenlabs_rs::{AddEditVoiceRequest, QueryModifier};
///
/// # async fn example(client: elevenlabs_rs::ElevenLabsClient) -> elevenlabs_rs::Result<()> {
/// // Clone a voice from two samples
/// let request = AddEditVoiceRequest::new("Narrator")
///     .with_label("accent", "british")
///     .with_file("samples/one.mp3")
///     .with_file("samples/two.mp3");
/// let voice_id = client.voices().add(&request).await?;
///
/// // Fetch it back with its settings
/// let voice = client
///     .voices()
///     .get(&voice_id, &[QueryModifier::with_settings()])
///     .await?;
/// println!("{:?}", voice.settings);
/// # Ok(())
/// # }
/// ```
pub struct VoicesService {
    inner: Arc<ClientInner>,
}

impl VoicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all voices available to the account.
    pub async fn list(&self) -> Result<Vec<Voice>> {
        let response: GetVoicesResponse = self.inner.get("/voices", &[]).await?;
        Ok(response.voices)
    }

    /// Get a single voice.
    ///
    /// Pass [`QueryModifier::with_settings`] to include the voice settings.
    pub async fn get(&self, voice: &VoiceId, query: &[QueryModifier]) -> Result<Voice> {
        self.inner.get(&format!("/voices/{}", voice), query).await
    }

    /// Delete a voice.
    pub async fn delete(&self, voice: &VoiceId) -> Result<()> {
        self.inner.delete(&format!("/voices/{}", voice)).await
    }

    /// Get the settings new voices start with.
    pub async fn default_settings(&self) -> Result<VoiceSettings> {
        self.inner.get("/voices/settings/default", &[]).await
    }

    /// Get the settings of a voice.
    pub async fn settings(&self, voice: &VoiceId) -> Result<VoiceSettings> {
        self.inner
            .get(&format!("/voices/{}/settings", voice), &[])
            .await
    }

    /// Replace the settings of a voice.
    pub async fn edit_settings(&self, voice: &VoiceId, settings: &VoiceSettings) -> Result<()> {
        let request = ApiRequest::post(format!("/voices/{}/settings/edit", voice)).json(settings)?;
        self.inner.execute(request).await?;
        Ok(())
    }

    /// Add a voice from sample files and return its ID.
    ///
    /// Every file is read before anything is sent; a missing or unreadable
    /// file fails with [`Error::FileAccess`](crate::Error::FileAccess).
    pub async fn add(&self, request: &AddEditVoiceRequest) -> Result<VoiceId> {
        let form = request.to_form().await?;
        let body = self.inner.post_multipart("/voices/add", form).await?;
        let response: AddVoiceResponse = decode(&body)?;
        Ok(response.voice_id)
    }

    /// Edit the name, description, labels or samples of a voice.
    pub async fn edit(&self, voice: &VoiceId, request: &AddEditVoiceRequest) -> Result<()> {
        let form = request.to_form().await?;
        self.inner
            .post_multipart(&format!("/voices/{}/edit", voice), form)
            .await?;
        Ok(())
    }
}
