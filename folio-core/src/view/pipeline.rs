//! Pipeline run events

use serde::{Deserialize, Serialize};

use crate::domain::pipeline::PipelineRun;

/// What changed in a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PipelineEventKind {
    RunStarted,
    StepStarted { index: usize },
    StepCompleted { index: usize },
    RunFinished,
}

/// A run state change together with the state right after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEvent {
    pub kind: PipelineEventKind,
    pub snapshot: PipelineRun,
}

/// Result of asking the simulator to start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The run went through every step
    Completed,

    /// A run was already in progress; nothing changed
    AlreadyRunning,
}
