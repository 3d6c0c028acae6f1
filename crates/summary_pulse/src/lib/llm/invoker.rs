use std::{sync::Arc, time::Duration};

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::{
    error::CompletionError,
    llm::completer::{Completer, ModelConfig},
};

pub const SYSTEM_PROMPT: &str = include_str!("./prompts/system.txt");

pub fn user_prompt(transcript: &str) -> String {
    format!("Summarize the following video transcript.\n\nTranscript:\n{transcript}")
}

/// Runs a completion on its own task and waits for the first of: the result,
/// `cancel` firing, or `timeout` elapsing.
///
/// A cancelled or timed out call is abandoned, not aborted; it may run to
/// completion in the background and its result is discarded.
#[tracing::instrument(skip_all, fields(model = %config.model))]
pub async fn invoke_completion<C>(
    completer: Arc<C>,
    config: ModelConfig,
    transcript: &str,
    cancel: &CancellationToken,
    timeout: Duration,
) -> Result<String, CompletionError>
where
    C: Completer + Send + Sync + 'static,
{
    let (tx, rx) = oneshot::channel();
    let user_prompt = user_prompt(transcript);

    tokio::spawn(async move {
        let result = completer
            .complete(&config, SYSTEM_PROMPT, &user_prompt)
            .await
            .map_err(|e| e.to_string());
        // receiver is gone when the caller stopped waiting
        let _ = tx.send(result);
    });

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::info!("Completion cancelled by caller");
            Err(CompletionError::Cancelled)
        }
        _ = tokio::time::sleep(timeout) => {
            tracing::warn!(?timeout, "Completion timed out");
            Err(CompletionError::TimedOut(timeout))
        }
        outcome = rx => match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(message)) => Err(CompletionError::Upstream(message)),
            Err(_) => Err(CompletionError::Dropped),
        },
    }
}
