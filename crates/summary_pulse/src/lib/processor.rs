pub mod builder;
pub mod state;

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use summary_datastore::DataStore;
use tokio_util::sync::CancellationToken;

use crate::{
    captions::resolve_transcript,
    error::{ErrorKind, PipelineError, Stage},
    llm::{
        completer::{Completer, LlmSettings},
        invoker::invoke_completion,
        thinking::split_thinking,
    },
    normalizer::Normalizer,
    processor::state::PipelineState,
    types::SummaryResult,
    yt::{CaptionFetcher, CaptionLocator},
};

/// Summaries are not language-aware yet; every summary is reported as English
pub const SOURCE_LANGUAGE: &str = "en";

pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(120);

// Summarizes a single video from its captions
pub struct SummaryProcessor<D, L, F, C>
where
    D: DataStore + Send + Sync + 'static,
    L: CaptionLocator + Send + Sync + 'static,
    F: CaptionFetcher + Send + Sync + 'static,
    C: Completer + Send + Sync + 'static,
{
    store: D,
    locator: L,
    fetcher: F,
    completer: Arc<C>,
    settings: LlmSettings,
    normalizer: Normalizer,
    completion_timeout: Duration,
}

impl<D, L, F, C> SummaryProcessor<D, L, F, C>
where
    D: DataStore + Send + Sync + 'static,
    L: CaptionLocator + Send + Sync + 'static,
    F: CaptionFetcher + Send + Sync + 'static,
    C: Completer + Send + Sync + 'static,
{
    /// Returns the stored summary for a tracked video, if there is one
    #[tracing::instrument(skip(self))]
    async fn lookup_cached(&self, video_id: &str) -> Result<Option<SummaryResult>, PipelineError> {
        let stored = self
            .store
            .find_summary(video_id)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to look up stored summary"))
            .map_err(|e| PipelineError::new(Stage::CacheLookup, ErrorKind::Storage(e)))?;

        Ok(stored.map(SummaryResult::from))
    }

    /// Asks the metadata collaborator where the video's captions live
    #[tracing::instrument(skip(self))]
    async fn locate_captions(&self, video_id: &str) -> Result<String, PipelineError> {
        self.locator
            .locate(video_id)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to locate captions"))
            .map_err(|e| PipelineError::new(Stage::CaptionLocation, ErrorKind::Fetch(e)))?
            .ok_or_else(|| {
                PipelineError::new(
                    Stage::CaptionLocation,
                    ErrorKind::NotAvailable {
                        video_id: video_id.to_string(),
                    },
                )
            })
    }

    /// Fetches the caption resource itself; a non-2xx response is a failure
    #[tracing::instrument(skip(self, cancel))]
    async fn fetch_captions(
        &self,
        caption_url: &str,
        cancel: &CancellationToken,
    ) -> Result<String, PipelineError> {
        let fetch_error = |e: anyhow::Error| PipelineError::new(Stage::CaptionFetch, ErrorKind::Fetch(e));

        let resp = cancel
            .run_until_cancelled(self.fetcher.fetch(caption_url))
            .await
            .ok_or_else(|| fetch_error(anyhow::anyhow!("caption fetch cancelled")))?
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to fetch captions"))
            .map_err(fetch_error)?;

        if !resp.is_success() {
            tracing::error!(status = resp.status, "Caption resource request was rejected");
            return Err(fetch_error(anyhow::anyhow!(
                "caption resource returned HTTP {}",
                resp.status
            )));
        }

        Ok(resp.body)
    }

    async fn run(
        &self,
        video_id: &str,
        cancel: &CancellationToken,
        state: &mut PipelineState,
    ) -> Result<SummaryResult, PipelineError> {
        let model_config = self
            .settings
            .model_config()
            .map_err(|kind| PipelineError::new(Stage::ConfigCheck, kind))?;
        state.advance();

        if let Some(cached) = self.lookup_cached(video_id).await? {
            tracing::info!("Returning stored summary");
            state.finish();
            return Ok(cached);
        }
        state.advance();

        let caption_url = self.locate_captions(video_id).await?;
        state.advance();

        let content = self.fetch_captions(&caption_url, cancel).await?;
        let raw_transcript = resolve_transcript(&self.fetcher, &content, cancel).await;
        state.advance();

        let transcript = self.normalizer.normalize(&raw_transcript);
        if transcript.is_empty() {
            return Err(PipelineError::new(
                Stage::Resolve,
                ErrorKind::EmptyContent {
                    video_id: video_id.to_string(),
                },
            ));
        }
        state.advance();

        let completion = invoke_completion(
            self.completer.clone(),
            model_config,
            &transcript,
            cancel,
            self.completion_timeout,
        )
        .await
        .map_err(|e| PipelineError::new(Stage::Completion, e))?;
        let split = split_thinking(&completion);
        state.advance();

        let result = SummaryResult {
            video_id: video_id.to_string(),
            summary: split.summary,
            thinking: split.thinking,
            source_language: SOURCE_LANGUAGE.to_string(),
            generated_at: Some(Utc::now()),
            tracked: false,
            error: None,
        };
        state.advance();

        Ok(result)
    }

    /// Generates a summary for `video_id`, or returns the stored one for a
    /// tracked video.
    ///
    /// Generated summaries are untracked and are not written anywhere; see
    /// [`SummaryProcessor::track`]. Cancelling `cancel` stops waiting on the
    /// caption fetch and the completion call.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn summarize(
        &self,
        video_id: &str,
        cancel: &CancellationToken,
    ) -> Result<SummaryResult, PipelineError> {
        let mut state = PipelineState::Idle;
        let result = self.run(video_id, cancel, &mut state).await;

        match &result {
            Ok(summary) => {
                tracing::info!(tracked = summary.tracked, "Summary ready")
            }
            Err(e) => {
                state.fail(e.stage);
                tracing::error!(error = %e, "Failed to summarize video");
            }
        }

        result
    }

    /// Like [`SummaryProcessor::summarize`], folding any failure into the
    /// returned record
    pub async fn summarize_record(&self, video_id: &str, cancel: &CancellationToken) -> SummaryResult {
        self.summarize(video_id, cancel)
            .await
            .unwrap_or_else(|e| SummaryResult::failed(video_id, &e))
    }

    /// Marks a generated summary as tracked and persists it
    #[tracing::instrument(skip_all, fields(video_id = %result.video_id))]
    pub async fn track(&self, mut result: SummaryResult) -> Result<SummaryResult, PipelineError> {
        result.tracked = true;

        let stored = result.to_stored().ok_or_else(|| {
            PipelineError::new(
                Stage::Persist,
                ErrorKind::Storage(anyhow::anyhow!("failed summaries cannot be tracked")),
            )
        })?;

        self.store
            .insert_summary(&stored)
            .await
            .map_err(|e| PipelineError::new(Stage::Persist, ErrorKind::Storage(e)))?;

        Ok(result)
    }
}
