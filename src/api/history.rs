//! History service.

use std::sync::Arc;

use bytes::Bytes;
use futures_util::{stream, Stream, StreamExt};

use crate::client::paginated::fetch_history_page;
use crate::client::{ClientInner, HistoryPage, HistoryPages, QueryModifier};
use crate::models::{DownloadHistoryRequest, HistoryItem, HistoryItemId};
use crate::Result;

/// Service for previously generated audio.
///
/// The listing is paginated with a cursor. Either follow it by hand:
///
/// ```no_run
/// use elevenlabs_rs::QueryModifier;
///
/// # async fn example(client: elevenlabs_rs::ElevenLabsClient) -> elevenlabs_rs::Result<()> {
/// let mut page = client.history().list(&[QueryModifier::page_size(100)]).await?;
/// loop {
///     for item in &page.response.history {
///         println!("{}: {}", item.history_item_id, item.text);
///     }
///     match page.next {
///         Some(cursor) => page = cursor.next(&[]).await?,
///         None => break,
///     }
/// }
/// # Ok(())
/// # }
/// ```
///
/// or let [`items`](Self::items) walk it.
pub struct HistoryService {
    inner: Arc<ClientInner>,
}

impl HistoryService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the first page of the listing.
    pub async fn list(&self, query: &[QueryModifier]) -> Result<HistoryPage> {
        fetch_history_page(self.inner.clone(), query.to_vec()).await
    }

    /// Lazily fetch every page, starting from the first.
    pub fn pages(&self, query: &[QueryModifier]) -> HistoryPages {
        HistoryPages::new(self.inner.clone(), query.to_vec())
    }

    /// Lazily fetch every item, page by page.
    ///
    /// The stream ends after the first error.
    pub fn items(&self, query: &[QueryModifier]) -> impl Stream<Item = Result<HistoryItem>> + Send + Unpin {
        self.pages(query).flat_map(|page| match page {
            Ok(page) => stream::iter(page.history.into_iter().map(Ok).collect::<Vec<_>>()),
            Err(e) => stream::iter(vec![Err(e)]),
        })
    }

    /// Get a single item.
    pub async fn get(&self, item: &HistoryItemId) -> Result<HistoryItem> {
        self.inner.get(&format!("/history/{}", item), &[]).await
    }

    /// Delete an item.
    pub async fn delete(&self, item: &HistoryItemId) -> Result<()> {
        self.inner.delete(&format!("/history/{}", item)).await
    }

    /// Download an item's audio.
    pub async fn audio(&self, item: &HistoryItemId) -> Result<Bytes> {
        self.inner
            .get_bytes(&format!("/history/{}/audio", item))
            .await
    }

    /// Download several items.
    ///
    /// A single ID yields the audio clip, several yield a zip archive.
    pub async fn download(&self, request: &DownloadHistoryRequest) -> Result<Bytes> {
        self.inner
            .post_bytes("/history/download", request, &[])
            .await
    }
}
