//! Cursor-based pagination over the generated-audio history.
//!
//! A history listing returns one page plus, when more items exist, a
//! [`HistoryCursor`] that fetches the next one. [`HistoryPages`] walks the
//! whole chain lazily as a `Stream`.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;

use super::http::ClientInner;
use super::query::{next_page_modifiers, QueryModifier};
use crate::models::{GetHistoryResponse, HistoryItemId};
use crate::Result;

/// One page of the history listing.
#[derive(Debug)]
pub struct HistoryPage {
    /// The decoded page
    pub response: GetHistoryResponse,
    /// Continuation for the following page, `None` on the last page
    pub next: Option<HistoryCursor>,
}

impl HistoryPage {
    /// Returns `true` if another page can be fetched.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

/// Continuation of a history listing.
///
/// Created by the client when a page reports `has_more`. Calling
/// [`next`](Self::next) re-issues the listing with the original modifiers
/// and a `start_after_history_item_id` cursor.
pub struct HistoryCursor {
    inner: Arc<ClientInner>,
    last_item_id: HistoryItemId,
    modifiers: Vec<QueryModifier>,
}

impl HistoryCursor {
    /// Id of the last item on the page this cursor continues from.
    pub fn last_item_id(&self) -> &HistoryItemId {
        &self.last_item_id
    }

    /// Fetch the next page.
    ///
    /// Modifiers in `extra` replace original ones with the same key; all
    /// other original modifiers, such as the page size, are kept.
    pub async fn next(self, extra: &[QueryModifier]) -> Result<HistoryPage> {
        let modifiers = self.next_modifiers(extra);
        fetch_history_page(self.inner, modifiers).await
    }

    /// Modifiers the next request will carry.
    pub fn next_modifiers(&self, extra: &[QueryModifier]) -> Vec<QueryModifier> {
        next_page_modifiers(&self.modifiers, extra, self.last_item_id.as_str())
    }
}

impl std::fmt::Debug for HistoryCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryCursor")
            .field("last_item_id", &self.last_item_id)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

/// Fetch one listing page and attach its continuation.
pub(crate) async fn fetch_history_page(
    inner: Arc<ClientInner>,
    modifiers: Vec<QueryModifier>,
) -> Result<HistoryPage> {
    let response: GetHistoryResponse = inner.get("/history", &modifiers).await?;

    let next = if response.has_more {
        Some(HistoryCursor {
            inner,
            last_item_id: response.last_history_item_id.clone(),
            modifiers,
        })
    } else {
        None
    };

    Ok(HistoryPage { response, next })
}

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A stream that lazily walks the history listing page by page.
///
/// Ends after the last page or after the first error.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use elevenlabs_rs::QueryModifier;
///
/// # async fn example(client: elevenlabs_rs::ElevenLabsClient) -> elevenlabs_rs::Result<()> {
/// let mut pages = client.history().pages(&[QueryModifier::page_size(100)]);
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     println!("{} items", page.history.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct HistoryPages {
    next_fetch: Option<NextFetch>,
    pending_fetch: Option<BoxFuture<'static, Result<HistoryPage>>>,
}

enum NextFetch {
    First {
        inner: Arc<ClientInner>,
        modifiers: Vec<QueryModifier>,
    },
    After(HistoryCursor),
}

impl HistoryPages {
    pub(crate) fn new(inner: Arc<ClientInner>, modifiers: Vec<QueryModifier>) -> Self {
        Self {
            next_fetch: Some(NextFetch::First { inner, modifiers }),
            pending_fetch: None,
        }
    }
}

impl Stream for HistoryPages {
    type Item = Result<GetHistoryResponse>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(ref mut fut) = this.pending_fetch {
                return match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.next_fetch = page.next.map(NextFetch::After);
                        Poll::Ready(Some(Ok(page.response)))
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_fetch = None;
                        Poll::Ready(Some(Err(e)))
                    }
                    Poll::Pending => Poll::Pending,
                };
            }

            match this.next_fetch.take() {
                Some(NextFetch::First { inner, modifiers }) => {
                    this.pending_fetch = Some(Box::pin(fetch_history_page(inner, modifiers)));
                }
                Some(NextFetch::After(cursor)) => {
                    this.pending_fetch = Some(Box::pin(async move { cursor.next(&[]).await }));
                }
                None => return Poll::Ready(None),
            }
        }
    }
}

impl std::fmt::Debug for HistoryPages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryPages")
            .field("in_flight", &self.pending_fetch.is_some())
            .field("exhausted", &(self.pending_fetch.is_none() && self.next_fetch.is_none()))
            .finish()
    }
}
