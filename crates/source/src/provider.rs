use kinoteka_core::LibraryItem;

use crate::SourceError;

/// A read-only source of library data.
#[async_trait::async_trait]
pub trait LibrarySource: Send + Sync {
    /// Fetch up to `limit` library entries. Order is source-defined and
    /// not relied upon.
    async fn fetch_library(&self, limit: u32) -> Result<Vec<LibraryItem>, SourceError>;

    /// Fetch the full record for one item, including per-season episode
    /// metadata for series-like kinds.
    async fn fetch_item(&self, id: u64) -> Result<LibraryItem, SourceError>;
}
