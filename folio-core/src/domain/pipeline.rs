//! Pipeline run domain types
//!
//! A run is a fixed, ordered list of named steps. Each step moves strictly
//! forward through `Pending -> Running -> Done`; the run as a whole is
//! guarded by a single `running` flag.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::log::LogLine;

/// Display status of a pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Running,
    Done,
}

impl StepStatus {
    /// The only status this one may advance to, if any
    pub fn next(self) -> Option<StepStatus> {
        match self {
            StepStatus::Pending => Some(StepStatus::Running),
            StepStatus::Running => Some(StepStatus::Done),
            StepStatus::Done => None,
        }
    }

    /// Short label shown under the step name
    pub fn label(self) -> &'static str {
        match self {
            StepStatus::Pending => "Waiting",
            StepStatus::Running => "Running",
            StepStatus::Done => "Done",
        }
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepStatus::Pending => write!(f, "pending"),
            StepStatus::Running => write!(f, "running"),
            StepStatus::Done => write!(f, "done"),
        }
    }
}

/// A named step and its current status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStep {
    pub name: String,
    pub status: StepStatus,
}

impl PipelineStep {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Pending,
        }
    }

    /// Moves the step one status forward
    ///
    /// Returns false (and leaves the status alone) once the step is done.
    pub fn advance(&mut self) -> bool {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                true
            }
            None => false,
        }
    }
}

/// State of the simulated pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRun {
    /// Identifier of the current or last run; None before the first run
    pub id: Option<Uuid>,

    pub steps: Vec<PipelineStep>,

    /// Run guard
    pub running: bool,

    /// Chronological log of the current or last run
    pub log: Vec<LogLine>,
}

impl PipelineRun {
    /// Creates an idle run with every step pending
    pub fn new<I, S>(step_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            steps: step_names.into_iter().map(PipelineStep::new).collect(),
            running: false,
            log: Vec::new(),
        }
    }

    /// Starts a fresh run: new id, all steps pending, empty log, guard set
    ///
    /// Returns false without touching anything if a run is in progress.
    pub fn begin(&mut self) -> bool {
        if self.running {
            return false;
        }

        self.id = Some(Uuid::new_v4());
        self.running = true;
        self.log.clear();
        for step in &mut self.steps {
            step.status = StepStatus::Pending;
        }

        true
    }

    /// Releases the run guard
    pub fn finish(&mut self) {
        self.running = false;
    }

    /// Appends a line stamped with the current local time
    pub fn push_log(&mut self, message: impl Into<String>) {
        self.log.push(LogLine::now(message));
    }

    /// Number of steps currently running
    pub fn running_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Running)
            .count()
    }

    /// True once every step has completed
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|s| s.status == StepStatus::Done)
    }
}
