use crate::error::Stage;

/// Progress of a single summary request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    ConfigChecked,
    CacheChecked,
    CaptionsLocated,
    Resolved,
    Normalized,
    Completed,
    Done,
    Failed(Stage),
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed(_))
    }

    /// Moves to the next state. Terminal states stay put.
    pub fn advance(&mut self) {
        let next = match *self {
            PipelineState::Idle => PipelineState::ConfigChecked,
            PipelineState::ConfigChecked => PipelineState::CacheChecked,
            PipelineState::CacheChecked => PipelineState::CaptionsLocated,
            PipelineState::CaptionsLocated => PipelineState::Resolved,
            PipelineState::Resolved => PipelineState::Normalized,
            PipelineState::Normalized => PipelineState::Completed,
            PipelineState::Completed => PipelineState::Done,
            terminal => terminal,
        };
        tracing::debug!(from = ?*self, to = ?next, "Pipeline state transition");
        *self = next;
    }

    /// Ends the request early with a cached result
    pub fn finish(&mut self) {
        if !self.is_terminal() {
            tracing::debug!(from = ?*self, "Pipeline finished early");
            *self = PipelineState::Done;
        }
    }

    pub fn fail(&mut self, stage: Stage) {
        if !self.is_terminal() {
            tracing::debug!(from = ?*self, %stage, "Pipeline failed");
            *self = PipelineState::Failed(stage);
        }
    }
}
