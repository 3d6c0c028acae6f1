use itertools::Itertools;

use crate::types::TimedText;

/// A caption segment positioned at its absolute start time
#[derive(Debug, PartialEq, Eq)]
struct TimedSegment<'a> {
    text: &'a str,
    timestamp_ms: i64,
}

fn is_sound_marker(text: &str) -> bool {
    text.starts_with('[') && text.ends_with(']')
}

/// Flattens a timed-text document into its segments in playback order.
///
/// Event order in the document is not reliable, so segments are sorted by
/// `event start + segment offset`. Empty segments and bracketed markers such
/// as `[Music]` are dropped.
fn segments(doc: &TimedText) -> Vec<TimedSegment<'_>> {
    doc.events
        .iter()
        .flat_map(|event| {
            event.segs.iter().filter_map(move |seg| {
                let text = seg.text.trim();
                if text.is_empty() || is_sound_marker(text) {
                    return None;
                }
                Some(TimedSegment {
                    text,
                    timestamp_ms: event.start_ms.saturating_add(seg.offset_ms),
                })
            })
        })
        .sorted_by_key(|seg| seg.timestamp_ms)
        .collect()
}

/// Extracts transcript text from JSON timed-text, or `None` if `content`
/// is not a timed-text document
pub fn extract(content: &str) -> Option<String> {
    let doc = serde_json::from_str::<TimedText>(content.trim())
        .inspect_err(|e| tracing::debug!(error = %e, "Content is not JSON timed-text"))
        .ok()?;

    Some(segments(&doc).iter().map(|seg| seg.text).join(" "))
}
