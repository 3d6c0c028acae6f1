//! # Transcript normalizer
//!
//! Cleans a resolved transcript and bounds its length before it is sent to
//! the completion service: filler words and sound markers are removed,
//! near-duplicate consecutive sentences (common in rolling auto-captions) are
//! dropped, and anything over the character budget keeps only its head and
//! tail.

use std::{collections::HashMap, sync::LazyLock};

use itertools::Itertools;
use regex::Regex;

use crate::captions::timed_text;

/// Roughly 3000 model tokens
pub const DEFAULT_CHAR_BUDGET: usize = 12_000;

pub const ABBREVIATION_MARKER: &str = " [content abbreviated] ";

const SENTENCE_DELIMITER: &str = ". ";
const MIN_SENTENCE_CHARS: usize = 10;
const SIMILARITY_THRESHOLD: f64 = 0.7;
/// How far a cut may move to land on a sentence boundary
const BOUNDARY_WINDOW: usize = 100;

const FILLERS: [&str; 14] = [
    " um ",
    " uh ",
    " like ",
    " you know ",
    " I mean ",
    " so ",
    " well ",
    " basically ",
    " actually ",
    "[Music]",
    "[Applause]",
    "[Laughter]",
    "[Sound Effects]",
    "[Background Music]",
];

static FILLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = FILLERS.iter().map(|filler| regex::escape(filler)).join("|");
    Regex::new(&pattern).unwrap()
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    char_budget: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_BUDGET)
    }
}

impl Normalizer {
    pub fn new(char_budget: usize) -> Self {
        Self { char_budget }
    }

    #[tracing::instrument(skip_all, fields(input_chars = transcript.chars().count()))]
    pub fn normalize(&self, transcript: &str) -> String {
        // raw timed-text can reach here without going through the resolver
        let extracted = transcript
            .starts_with('{')
            .then(|| timed_text::extract(transcript))
            .flatten();
        let transcript = extracted.as_deref().unwrap_or(transcript);

        let cleaned = remove_fillers(transcript);
        let deduped = dedupe_sentences(&cleaned);
        let bounded = truncate_to_budget(&deduped, self.char_budget);

        let normalized = bounded.trim().to_string();
        tracing::debug!(output_chars = normalized.chars().count(), "Normalized transcript");
        normalized
    }
}

/// Replaces filler words and sound markers with a space in a single
/// left-to-right pass, then collapses whitespace runs
pub fn remove_fillers(text: &str) -> String {
    let replaced = FILLER_RE.replace_all(text, " ");
    WHITESPACE_RE.replace_all(&replaced, " ").into_owned()
}

fn sentence_key(fragment: &str) -> &str {
    fragment.trim().trim_end_matches('.')
}

/// Share of `candidate`'s words that also occur in `reference`, counted with
/// multiplicity and divided by the longer word count
pub fn similarity(candidate: &str, reference: &str) -> f64 {
    let candidate_words = sentence_key(candidate)
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();
    let reference_words = sentence_key(reference)
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();

    let longest = candidate_words.len().max(reference_words.len());
    if longest == 0 {
        return 0.0;
    }

    let mut available: HashMap<&str, usize> = HashMap::new();
    for word in &reference_words {
        *available.entry(word.as_str()).or_default() += 1;
    }

    let shared = candidate_words
        .iter()
        .filter(|word| match available.get_mut(word.as_str()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        })
        .count();

    shared as f64 / longest as f64
}

/// Drops sentences that repeat the sentence kept just before them.
///
/// Fragments shorter than ten characters are noise and are dropped outright.
/// A trailing period lost along with a dropped final sentence is restored.
pub fn dedupe_sentences(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();

    for fragment in text.split(SENTENCE_DELIMITER) {
        let fragment = fragment.trim();
        if fragment.chars().count() < MIN_SENTENCE_CHARS {
            continue;
        }

        if let Some(previous) = kept.last() {
            let duplicate = sentence_key(fragment) == sentence_key(previous)
                || similarity(fragment, previous) > SIMILARITY_THRESHOLD;
            if duplicate {
                continue;
            }
        }

        kept.push(fragment);
    }

    let mut deduped = kept.join(SENTENCE_DELIMITER);
    if text.trim_end().ends_with('.') && !deduped.is_empty() && !deduped.ends_with('.') {
        deduped.push('.');
    }
    deduped
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Keeps the first and last 40% of `budget` characters when `text` is over
/// budget, joined by [`ABBREVIATION_MARKER`].
///
/// Each cut moves to a nearby sentence boundary when one lies within
/// [`BOUNDARY_WINDOW`] characters of it.
pub fn truncate_to_budget(text: &str, budget: usize) -> String {
    let total_chars = text.chars().count();
    if total_chars <= budget {
        return text.to_string();
    }

    // 40% of the budget from each end
    let edge_chars = budget * 2 / 5;

    let head_end = byte_offset(text, edge_chars);
    let mut head = &text[..head_end];
    let window_start = byte_offset(head, edge_chars.saturating_sub(BOUNDARY_WINDOW));
    if let Some(pos) = head[window_start..].rfind(SENTENCE_DELIMITER) {
        // keep the period, drop the space
        head = &head[..window_start + pos + 1];
    }

    let tail_start = byte_offset(text, total_chars - edge_chars);
    let mut tail = &text[tail_start..];
    let window_end = byte_offset(tail, BOUNDARY_WINDOW);
    if let Some(pos) = tail[..window_end].find(SENTENCE_DELIMITER) {
        tail = &tail[pos + SENTENCE_DELIMITER.len()..];
    }

    tracing::debug!(
        total_chars,
        budget,
        "Transcript over budget, keeping head and tail"
    );

    format!("{head}{ABBREVIATION_MARKER}{tail}")
}
