use anyhow::Context;
use sqlx::{migrate::Migrator, postgres::PgPoolOptions, PgPool};

use crate::{datastore::DataStore, StoredSummary};

static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(Debug, Clone)]
pub struct PgDataStore {
    pub pool: PgPool,
}

impl PgDataStore {
    /// Establish connection to database and create the summaries table
    /// if not exists
    pub async fn init(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .inspect_err(
                |e| tracing::error!(error = ?e, "Failed to establish connection to database"),
            )
            .context("Failed to connect to postgres database")?;

        MIGRATOR
            .run(&pool)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to run database migrations"))
            .context("Failed to run database migrations")?;

        Ok(PgDataStore { pool })
    }
}

impl DataStore for PgDataStore {
    async fn find_summary(&self, video_id: &str) -> anyhow::Result<Option<StoredSummary>> {
        sqlx::query_as::<_, StoredSummary>(
            r#"
            SELECT video_id, summary, thinking, source_language, generated_at
            FROM summaries
            WHERE video_id = $1
            "#,
        )
        .bind(video_id)
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, video_id, "Failed to look up summary");
        })
        .context("Failed to look up summary")
    }

    async fn insert_summary(&self, summary: &StoredSummary) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO summaries (video_id, summary, thinking, source_language, generated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (video_id) DO UPDATE SET
                summary = EXCLUDED.summary,
                thinking = EXCLUDED.thinking,
                source_language = EXCLUDED.source_language,
                generated_at = EXCLUDED.generated_at
            "#,
        )
        .bind(&summary.video_id)
        .bind(&summary.summary)
        .bind(&summary.thinking)
        .bind(&summary.source_language)
        .bind(summary.generated_at)
        .execute(&self.pool)
        .await
        .inspect_err(|err| {
            tracing::error!(
                error = ?err,
                video_id = %summary.video_id,
                "Failed to insert summary"
            )
        })
        .context("Failed to insert summary")?;

        Ok(())
    }
}
