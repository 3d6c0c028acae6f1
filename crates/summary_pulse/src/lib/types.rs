use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use summary_datastore::StoredSummary;

/// Outcome of a single summary request.
///
/// A failed result only carries `video_id` and `error`; every other field is
/// left at its zero value. `tracked` results come from (or are bound for) the
/// datastore, untracked ones are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub video_id: String,
    pub summary: String,
    pub thinking: String,
    pub source_language: String,
    pub generated_at: Option<DateTime<Utc>>,
    pub tracked: bool,
    pub error: Option<String>,
}

impl SummaryResult {
    pub fn failed(video_id: impl Into<String>, error: &impl std::fmt::Display) -> Self {
        SummaryResult {
            video_id: video_id.into(),
            error: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The persistable form of this result, if it is eligible for storage
    pub fn to_stored(&self) -> Option<StoredSummary> {
        if !self.tracked || self.is_error() {
            return None;
        }

        Some(StoredSummary {
            video_id: self.video_id.clone(),
            summary: self.summary.clone(),
            thinking: self.thinking.clone(),
            source_language: self.source_language.clone(),
            generated_at: self.generated_at?,
        })
    }
}

impl From<StoredSummary> for SummaryResult {
    fn from(
        StoredSummary {
            video_id,
            summary,
            thinking,
            source_language,
            generated_at,
        }: StoredSummary,
    ) -> Self {
        SummaryResult {
            video_id,
            summary,
            thinking,
            source_language,
            generated_at: Some(generated_at),
            tracked: true,
            error: None,
        }
    }
}

/// The slice of `ytInitialPlayerResponse` that describes caption tracks
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub captions: Option<PlayerCaptions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCaptions {
    pub player_captions_tracklist_renderer: CaptionTracklist,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTracklist {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    pub kind: Option<String>,
}

impl CaptionTrack {
    pub fn is_english(&self) -> bool {
        self.language_code == "en" || self.language_code.starts_with("en-")
    }

    pub fn is_auto_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

/// JSON timed-text document (`fmt=json3`)
#[derive(Debug, Deserialize)]
pub struct TimedText {
    pub events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
pub struct TimedTextEvent {
    #[serde(rename = "tStartMs", default)]
    pub start_ms: i64,
    #[serde(default)]
    pub segs: Vec<TimedTextSeg>,
}

#[derive(Debug, Deserialize)]
pub struct TimedTextSeg {
    #[serde(rename = "utf8", default)]
    pub text: String,
    #[serde(rename = "tOffsetMs", default)]
    pub offset_ms: i64,
}
