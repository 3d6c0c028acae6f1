//! # Captions
//!
//! Turns a fetched caption resource into plain transcript text.
//!
//! The format is always inferred from the content itself: an `#EXTM3U`
//! header marks an HLS playlist, a leading `{` marks JSON timed-text, and
//! anything else is read as WebVTT/SRT. JSON that fails to parse is read as
//! WebVTT/SRT instead of being rejected.

pub mod playlist;
pub mod timed_text;
pub mod vtt;

use tokio_util::sync::CancellationToken;

use crate::yt::CaptionFetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionFormat {
    HlsPlaylist,
    JsonTimedText,
    VttOrSrt,
}

impl CaptionFormat {
    pub fn detect(content: &str) -> Self {
        let trimmed = content.trim();
        if trimmed.starts_with("#EXTM3U") {
            CaptionFormat::HlsPlaylist
        } else if trimmed.starts_with('{') {
            CaptionFormat::JsonTimedText
        } else {
            CaptionFormat::VttOrSrt
        }
    }
}

/// Resolves caption content to transcript text, following at most one level
/// of playlist indirection through `fetcher`.
///
/// Never fails: content without extractable text, or a playlist whose
/// segment cannot be fetched before `cancel` fires, resolves to an empty
/// transcript.
#[tracing::instrument(skip_all)]
pub async fn resolve_transcript<F: CaptionFetcher>(
    fetcher: &F,
    content: &str,
    cancel: &CancellationToken,
) -> String {
    let format = CaptionFormat::detect(content);
    tracing::debug!(?format, "Resolving caption resource");

    match format {
        CaptionFormat::HlsPlaylist => playlist::resolve(fetcher, content, cancel).await,
        CaptionFormat::JsonTimedText => {
            timed_text::extract(content).unwrap_or_else(|| vtt::extract(content))
        }
        CaptionFormat::VttOrSrt => vtt::extract(content),
    }
}
