use crate::api::{ApiError, DexClient};
use crate::domain::{AttributeVector, CatalogEntry};

/// Network-facing side of the app state. Owns the API client; the UI layer
/// never talks to the network directly.
#[derive(Debug, Clone)]
pub struct AppActions {
    pub client: DexClient,
}

impl AppActions {
    pub const fn new(client: DexClient) -> Self {
        Self { client }
    }

    /// One-shot catalog load. No retry policy; the caller decides what an
    /// empty catalog looks like.
    pub async fn load_catalog(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        self.client.fetch_catalog().await
    }

    /// Fetches stats for the whole selection concurrently, all-or-nothing.
    pub async fn fetch_selection(
        &self,
        entries: &[CatalogEntry],
    ) -> Result<Vec<AttributeVector>, ApiError> {
        self.client.fetch_all_attributes(entries).await
    }
}
