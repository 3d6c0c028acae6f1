pub mod captions;
mod error;
mod llm;
pub mod normalizer;
pub mod parser;
mod processor;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::{CompletionError, ErrorKind, PipelineError, Stage};
pub use llm::openai;
pub use llm::{
    completer::{Completer, LlmSettings, ModelConfig},
    invoker::{invoke_completion, SYSTEM_PROMPT},
    thinking::{split_thinking, SplitCompletion},
};
pub use processor::{
    builder::SummaryProcessorBuilder, state::PipelineState, SummaryProcessor,
    DEFAULT_COMPLETION_TIMEOUT, SOURCE_LANGUAGE,
};
pub use types::SummaryResult;
