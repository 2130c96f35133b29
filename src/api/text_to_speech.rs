//! Text-to-speech service.

use std::sync::Arc;

use bytes::Bytes;
use tokio::io::AsyncWrite;

use crate::client::{ApiRequest, ClientInner, QueryModifier};
use crate::models::{TextToSpeechRequest, VoiceId};
use crate::Result;

/// Service for synthesizing speech.
///
/// Both calls accept query modifiers, typically
/// [`QueryModifier::latency_optimizations`].
///
/// # Example
///
/// ```no_run
/// use elevenlabs_rs::{LatencyOptimization, QueryModifier, TextToSpeechRequest, VoiceId};
///
/// # async fn example(client: elevenlabs_rs::ElevenLabsClient) -> elevenlabs_rs::Result<()> {
/// let voice = VoiceId::new("21m00Tcm4TlvDq8ikWAM");
/// let request = TextToSpeechRequest::new("The quick brown fox.")
///     .with_model("eleven_multilingual_v2");
///
/// // Buffered
/// let audio = client.text_to_speech().convert(&voice, &request, &[]).await?;
///
/// // Streamed into any AsyncWrite as it arrives
/// let mut sink: Vec<u8> = Vec::new();
/// let written = client
///     .text_to_speech()
///     .stream(
///         &mut sink,
///         &voice,
///         &request,
///         &[QueryModifier::latency_optimizations(LatencyOptimization::Normal)],
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TextToSpeechService {
    inner: Arc<ClientInner>,
}

impl TextToSpeechService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Synthesize `request` with `voice` and return the whole audio clip.
    pub async fn convert(
        &self,
        voice: &VoiceId,
        request: &TextToSpeechRequest,
        query: &[QueryModifier],
    ) -> Result<Bytes> {
        self.inner
            .post_bytes(&format!("/text-to-speech/{}", voice), request, query)
            .await
    }

    /// Synthesize `request` with `voice`, writing audio chunks into `sink`
    /// as they arrive.
    ///
    /// Returns the number of bytes written. The client timeout covers the
    /// whole transfer; on timeout or cancellation the bytes already written
    /// stay in the sink.
    pub async fn stream<W>(
        &self,
        sink: &mut W,
        voice: &VoiceId,
        request: &TextToSpeechRequest,
        query: &[QueryModifier],
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let request = ApiRequest::post(format!("/text-to-speech/{}/stream", voice))
            .json(request)?
            .query(query)
            .binary();
        self.inner.execute_to_writer(request, sink).await
    }
}
