use std::future::Future;

use crate::StoredSummary;

pub mod postgres;

pub trait DataStore {
    fn find_summary(
        &self,
        video_id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<StoredSummary>>> + Send;

    fn insert_summary(
        &self,
        summary: &StoredSummary,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// A store that never holds anything: every lookup misses and writes are dropped.
///
/// Used when no database is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl DataStore for NullStore {
    async fn find_summary(&self, _video_id: &str) -> anyhow::Result<Option<StoredSummary>> {
        Ok(None)
    }

    async fn insert_summary(&self, summary: &StoredSummary) -> anyhow::Result<()> {
        tracing::debug!(video_id = %summary.video_id, "No datastore configured, dropping summary");
        Ok(())
    }
}
