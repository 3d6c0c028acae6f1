//! # Yt Parser
//!
//! Extracts the caption track listing from a YouTube watch page.

use std::{ops::Deref, sync::LazyLock};

use anyhow::Context;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::types::{CaptionTrack, PlayerResponse};

static YT_PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});\s*(?:var\s|</script>)")
        .unwrap()
});

pub struct YtHtmlDocument(String);

impl Deref for YtHtmlDocument {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl YtHtmlDocument {
    pub fn new(doc: String) -> Self {
        YtHtmlDocument(doc)
    }

    /// Deserializes the page's `ytInitialPlayerResponse` script payload
    pub fn to_json<T>(&self) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
    {
        let payload = YT_PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .context("Failed to find ytInitialPlayerResponse in the page's script tags")?;

        serde_json::from_str(payload.as_str()).context("Failed to parse ytInitialPlayerResponse")
    }

    /// Lists the caption tracks advertised by the player response.
    ///
    /// A page without a `captions` object has no tracks.
    pub fn caption_tracks(&self) -> anyhow::Result<Vec<CaptionTrack>> {
        let response = self.to_json::<PlayerResponse>()?;

        Ok(response
            .captions
            .map(|c| c.player_captions_tracklist_renderer.caption_tracks)
            .unwrap_or_default())
    }
}

impl From<String> for YtHtmlDocument {
    fn from(value: String) -> Self {
        YtHtmlDocument(value)
    }
}

/// Picks the track to summarize from: English auto-generated captions first,
/// then any English track, then whatever comes first
pub fn select_caption_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.is_english() && t.is_auto_generated())
        .or_else(|| tracks.iter().find(|t| t.is_english()))
        .or_else(|| tracks.first())
}

/// Adds `fmt=vtt` to a caption track's base URL
pub fn vtt_url(base_url: &str) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}fmt=vtt")
}
