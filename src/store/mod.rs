pub mod memory;
pub mod supabase;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Influencer, Prediction};

pub use memory::MemoryStore;
pub use supabase::SupabaseClient;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid store URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfluencerFilter {
    #[default]
    All,
    Spotlight,
}

/// Read-only access to influencer and prediction records.
///
/// Implementations run every row through the record adapter, so callers
/// always see derived accuracy and normalized optional fields.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Influencers in store order.
    async fn influencers(&self, filter: InfluencerFilter) -> Result<Vec<Influencer>, StoreError>;

    /// A single influencer, or `None` when no record has that id.
    async fn influencer(&self, id: &str) -> Result<Option<Influencer>, StoreError>;

    /// Predictions for one influencer, most recent event first.
    async fn predictions(
        &self,
        influencer_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Prediction>, StoreError>;

    /// Cheap reachability check for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}
