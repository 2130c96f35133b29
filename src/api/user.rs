//! User service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{SubscriptionDetails, User};
use crate::Result;

/// Service for the authenticated user.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: elevenlabs_rs::ElevenLabsClient) -> elevenlabs_rs::Result<()> {
/// let subscription = client.user().subscription().await?;
/// if subscription.has_open_invoices {
///     println!("unpaid invoices on tier {}", subscription.tier);
/// }
/// # Ok(())
/// # }
/// ```
pub struct UserService {
    inner: Arc<ClientInner>,
}

impl UserService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the user, including the subscription without invoicing data.
    pub async fn get(&self) -> Result<User> {
        self.inner.get("/user", &[]).await
    }

    /// Get the subscription, including invoicing data.
    pub async fn subscription(&self) -> Result<SubscriptionDetails> {
        self.inner.get("/user/subscription", &[]).await
    }
}
