//! Feed Batch Store Port (Driven Port)

use async_trait::async_trait;

use super::StoreError;
use crate::domain::records::FeedBatch;

/// Port for reading feed batches.
#[async_trait]
pub trait FeedBatchStore: Send + Sync {
    /// The most recently dated batch, if any exist.
    async fn find_latest(&self) -> Result<Option<FeedBatch>, StoreError>;
}
