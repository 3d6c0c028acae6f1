use chrono::{DateTime, Utc};

/// A generated summary persisted for a tracked video
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StoredSummary {
    pub video_id: String,
    pub summary: String,
    pub thinking: String,
    pub source_language: String,
    pub generated_at: DateTime<Utc>,
}
