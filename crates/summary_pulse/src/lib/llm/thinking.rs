use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

static THINK_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>(.*?)</think>").unwrap());

static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").unwrap());

/// A completion split into the model's reasoning and its answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitCompletion {
    pub thinking: String,
    pub summary: String,
}

/// Separates `<think>` reasoning blocks from the rest of a completion.
///
/// `thinking` holds every block's trimmed content, in order, separated by a
/// blank line. `summary` is the text outside the blocks with runs of blank
/// lines collapsed to one.
pub fn split_thinking(completion: &str) -> SplitCompletion {
    let thinking = THINK_BLOCK_RE
        .captures_iter(completion)
        .map(|cap| cap[1].trim().to_string())
        .join("\n\n");

    let without_blocks = THINK_BLOCK_RE.replace_all(completion, "");
    let summary = BLANK_LINES_RE
        .replace_all(without_blocks.trim(), "\n\n")
        .into_owned();

    SplitCompletion { thinking, summary }
}
