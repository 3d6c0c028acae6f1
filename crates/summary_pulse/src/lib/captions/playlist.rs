use tokio_util::sync::CancellationToken;

use crate::{captions::vtt, yt::CaptionFetcher};

/// Segment URLs listed in an HLS playlist, in playlist order
pub fn segment_urls(playlist: &str) -> Vec<&str> {
    playlist
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| line.starts_with("http"))
        .collect()
}

/// Resolves an HLS caption playlist by fetching its first segment and reading
/// it as WebVTT/SRT.
///
/// Only the first segment is used. A playlist without segments, or a segment
/// fetch that fails or is cancelled, yields an empty transcript.
pub async fn resolve<F: CaptionFetcher>(
    fetcher: &F,
    playlist: &str,
    cancel: &CancellationToken,
) -> String {
    let urls = segment_urls(playlist);
    let Some(first) = urls.first() else {
        tracing::debug!("Playlist lists no segments");
        return String::new();
    };
    tracing::debug!(segments = urls.len(), url = %first, "Fetching first playlist segment");

    let Some(outcome) = cancel.run_until_cancelled(fetcher.fetch(first)).await else {
        tracing::info!(url = %first, "Playlist segment fetch cancelled");
        return String::new();
    };

    match outcome {
        Ok(resp) if resp.is_success() => vtt::extract(&resp.body),
        Ok(resp) => {
            tracing::warn!(status = resp.status, url = %first, "Playlist segment fetch was rejected");
            String::new()
        }
        Err(e) => {
            tracing::warn!(error = ?e, url = %first, "Failed to fetch playlist segment");
            String::new()
        }
    }
}
