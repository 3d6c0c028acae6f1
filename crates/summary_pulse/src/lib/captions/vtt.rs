use std::sync::LazyLock;

use regex::{Captures, Regex};

static CUE_TIMING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{2,}:)?\d{2}:\d{2}[.,]\d{3}\s*-->\s*(?:\d{2,}:)?\d{2}:\d{2}[.,]\d{3}")
        .unwrap()
});

static SEQUENCE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(amp|lt|gt|quot|#39|apos);").unwrap());

const CUE_SETTINGS: [&str; 3] = ["align:", "position:", "size:"];

fn is_markup_line(line: &str) -> bool {
    line.starts_with("WEBVTT")
        || CUE_TIMING_RE.is_match(line)
        || SEQUENCE_NUMBER_RE.is_match(line)
        || CUE_SETTINGS.iter().any(|setting| line.contains(setting))
}

/// Decodes the five basic HTML entities in a single pass, so `&amp;lt;`
/// becomes `&lt;` rather than `<`
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| match &caps[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            _ => "'",
        })
        .into_owned()
}

/// Extracts the spoken text from WebVTT or SRT content, one cue line at a time
pub fn extract(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_markup_line(line))
        .map(|line| decode_entities(&TAG_RE.replace_all(line, "")))
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
