//! Models service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::Model;
use crate::Result;

/// Service for listing synthesis models.
pub struct ModelsService {
    inner: Arc<ClientInner>,
}

impl ModelsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the models available to the account.
    pub async fn list(&self) -> Result<Vec<Model>> {
        self.inner.get("/models", &[]).await
    }
}
