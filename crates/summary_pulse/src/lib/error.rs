use std::fmt;

/// Pipeline step an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ConfigCheck,
    CacheLookup,
    CaptionLocation,
    CaptionFetch,
    Resolve,
    Completion,
    Persist,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ConfigCheck => "config-check",
            Stage::CacheLookup => "cache-lookup",
            Stage::CaptionLocation => "caption-location",
            Stage::CaptionFetch => "caption-fetch",
            Stage::Resolve => "resolve",
            Stage::Completion => "completion",
            Stage::Persist => "persist",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("No captions available for video {video_id}")]
    NotAvailable { video_id: String },
    #[error("Fetch error: {0}")]
    Fetch(#[source] anyhow::Error),
    #[error("Captions for video {video_id} yielded no transcript text")]
    EmptyContent { video_id: String },
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
    #[error("Storage error: {0}")]
    Storage(#[source] anyhow::Error),
}

/// Error returned by the summary pipeline, tagged with the failing stage
#[derive(Debug, thiserror::Error)]
#[error("{stage} failed: {kind}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub kind: ErrorKind,
}

impl PipelineError {
    pub fn new(stage: Stage, kind: impl Into<ErrorKind>) -> Self {
        PipelineError {
            stage,
            kind: kind.into(),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::Configuration(_))
    }

    pub fn is_not_available(&self) -> bool {
        matches!(self.kind, ErrorKind::NotAvailable { .. })
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self.kind, ErrorKind::Fetch(_))
    }

    pub fn is_empty_content(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyContent { .. })
    }

    pub fn is_completion(&self) -> bool {
        matches!(self.kind, ErrorKind::Completion(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request was cancelled")]
    Cancelled,
    #[error("completion request timed out after {0:?}")]
    TimedOut(std::time::Duration),
    #[error("completion task ended without reporting a result")]
    Dropped,
    #[error("completion service error: {0}")]
    Upstream(String),
}
