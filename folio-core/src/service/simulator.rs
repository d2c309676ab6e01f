//! Pipeline run simulator
//!
//! Walks a fixed list of steps one at a time, holding each step in the
//! running state for a fixed delay. No work is done and every step succeeds;
//! the run only exists to drive the step/log animation.
//!
//! State lives behind a mutex that is never held across an await, and each
//! change is broadcast as a [`PipelineEvent`] with a snapshot of the run.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::domain::pipeline::PipelineRun;
use crate::view::pipeline::{PipelineEvent, PipelineEventKind, RunOutcome};

/// Final log line of every run
pub const SUMMARY_LINE: &str = "Pipeline run finished with 0 errors.";

const EVENT_CAPACITY: usize = 64;

/// Timed, non-reentrant pipeline simulation
///
/// Cloning yields another handle to the same run.
#[derive(Debug, Clone)]
pub struct PipelineSimulator {
    state: Arc<Mutex<PipelineRun>>,
    step_delay: Duration,
    events: broadcast::Sender<PipelineEvent>,
}

impl PipelineSimulator {
    /// Creates an idle simulator
    ///
    /// # Arguments
    /// * `step_names` - Steps in execution order
    /// * `step_delay` - How long each step stays running
    pub fn new<I, S>(step_names: I, step_delay: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(PipelineRun::new(step_names))),
            step_delay,
            events,
        }
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Copy of the current run state
    pub fn snapshot(&self) -> PipelineRun {
        self.lock().clone()
    }

    /// True while a run is in progress
    pub fn is_running(&self) -> bool {
        self.lock().running
    }

    /// Receives every state change from now on
    pub fn subscribe(&self) -> broadcast::Receiver<PipelineEvent> {
        self.events.subscribe()
    }

    /// Runs the whole sequence
    ///
    /// Returns immediately with `AlreadyRunning`, changing nothing, if a run
    /// is already in progress. Otherwise resolves once the summary line has
    /// been logged and the guard released. Dropping the returned future does
    /// not cancel a run that has begun.
    pub async fn start(&self) -> RunOutcome {
        let (run_id, names) = {
            let mut run = self.lock();
            if !run.begin() {
                debug!("Pipeline run already in progress, ignoring start");
                return RunOutcome::AlreadyRunning;
            }
            let names: Vec<String> = run.steps.iter().map(|s| s.name.clone()).collect();
            (run.id, names)
        };

        info!(run_id = ?run_id, steps = names.len(), "Pipeline run started");
        self.publish(PipelineEventKind::RunStarted, self.snapshot());

        // Steps run on their own task; dropping this future does not stop them.
        let runner = self.clone();
        match tokio::spawn(async move { runner.run_steps(&names).await }).await {
            Ok(()) => info!(run_id = ?run_id, "Pipeline run finished"),
            Err(e) => {
                warn!(run_id = ?run_id, error = %e, "Pipeline run task failed, releasing guard");
                self.update(PipelineEventKind::RunFinished, |run| run.finish());
            }
        }
        RunOutcome::Completed
    }

    async fn run_steps(&self, names: &[String]) {
        for (index, name) in names.iter().enumerate() {
            let number = index + 1;

            self.update(PipelineEventKind::StepStarted { index }, |run| {
                run.steps[index].advance();
                run.push_log(format!("Step {number}: {name} started."));
            });

            tokio::time::sleep(self.step_delay).await;

            self.update(PipelineEventKind::StepCompleted { index }, |run| {
                run.steps[index].advance();
                run.push_log(format!("Step {number}: Completed successfully."));
            });
        }

        self.update(PipelineEventKind::RunFinished, |run| {
            run.push_log(SUMMARY_LINE);
            run.finish();
        });
    }

    /// Applies a change under the lock, then broadcasts it
    fn update<F>(&self, kind: PipelineEventKind, change: F)
    where
        F: FnOnce(&mut PipelineRun),
    {
        let snapshot = {
            let mut run = self.lock();
            change(&mut run);
            run.clone()
        };
        self.publish(kind, snapshot);
    }

    fn publish(&self, kind: PipelineEventKind, snapshot: PipelineRun) {
        // No subscribers is fine; the page may not be watching.
        let _ = self.events.send(PipelineEvent { kind, snapshot });
    }

    fn lock(&self) -> MutexGuard<'_, PipelineRun> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pipeline::StepStatus;

    const STEPS: [&str; 4] = [
        "Ingest Sources",
        "Validate + Clean",
        "Transform + Model",
        "Publish to Analytics",
    ];

    fn simulator() -> PipelineSimulator {
        PipelineSimulator::new(STEPS, Duration::from_millis(800))
    }

    fn drain(rx: &mut broadcast::Receiver<PipelineEvent>) -> Vec<PipelineEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_new_simulator_is_idle() {
        let sim = simulator();
        let run = sim.snapshot();
        assert!(!run.running);
        assert!(run.id.is_none());
        assert!(run.log.is_empty());
        assert!(run.steps.iter().all(|s| s.status == StepStatus::Pending));
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_run_completes() {
        let sim = simulator();
        let started = tokio::time::Instant::now();

        let outcome = sim.start().await;

        assert_eq!(outcome, RunOutcome::Completed);
        assert!(started.elapsed() >= Duration::from_millis(3200));

        let run = sim.snapshot();
        assert!(!run.running);
        assert!(run.is_complete());
        let messages: Vec<&str> = run.log.iter().map(|l| l.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Step 1: Ingest Sources started.",
                "Step 1: Completed successfully.",
                "Step 2: Validate + Clean started.",
                "Step 2: Completed successfully.",
                "Step 3: Transform + Model started.",
                "Step 3: Completed successfully.",
                "Step 4: Publish to Analytics started.",
                "Step 4: Completed successfully.",
                SUMMARY_LINE,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_statuses_are_monotonic_with_one_running_step() {
        let sim = simulator();
        let mut rx = sim.subscribe();

        sim.start().await;
        let events = drain(&mut rx);

        assert_eq!(events.len(), 2 + 2 * STEPS.len());
        assert_eq!(events[0].kind, PipelineEventKind::RunStarted);
        assert_eq!(events.last().unwrap().kind, PipelineEventKind::RunFinished);

        let mut previous: Vec<StepStatus> = vec![StepStatus::Pending; STEPS.len()];
        for event in &events {
            let statuses: Vec<StepStatus> =
                event.snapshot.steps.iter().map(|s| s.status).collect();
            for (before, after) in previous.iter().zip(&statuses) {
                assert!(after >= before, "status went backwards: {before} -> {after}");
            }
            assert!(event.snapshot.running_steps() <= 1);
            if let PipelineEventKind::StepStarted { index } = event.kind {
                assert_eq!(event.snapshot.running_steps(), 1);
                assert_eq!(statuses[index], StepStatus::Running);
                assert!(statuses[..index].iter().all(|s| *s == StepStatus::Done));
            }
            previous = statuses;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_while_running_changes_nothing() {
        let sim = simulator();
        let mut rx = sim.subscribe();

        let runner = sim.clone();
        let handle = tokio::spawn(async move { runner.start().await });

        loop {
            let event = rx.recv().await.unwrap();
            if matches!(event.kind, PipelineEventKind::StepStarted { .. }) {
                break;
            }
        }

        let before = sim.snapshot();
        assert!(before.running);
        assert_eq!(sim.start().await, RunOutcome::AlreadyRunning);
        assert_eq!(sim.snapshot(), before);

        assert_eq!(handle.await.unwrap(), RunOutcome::Completed);
        assert!(!sim.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_run_resets_state() {
        let sim = simulator();
        sim.start().await;
        let first_id = sim.snapshot().id;

        let mut rx = sim.subscribe();
        sim.start().await;
        let events = drain(&mut rx);

        let started = &events[0].snapshot;
        assert_ne!(started.id, first_id);
        assert!(started.log.is_empty());
        assert!(started.steps.iter().all(|s| s.status == StepStatus::Pending));

        let run = sim.snapshot();
        assert_eq!(run.log.len(), 2 * STEPS.len() + 1);
        assert_eq!(run.log.last().unwrap().message, SUMMARY_LINE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_start_still_finishes_run() {
        let sim = simulator();

        let cut_short = tokio::time::timeout(Duration::from_millis(100), sim.start()).await;
        assert!(cut_short.is_err());
        assert!(sim.is_running());

        tokio::time::sleep(Duration::from_secs(60)).await;

        let run = sim.snapshot();
        assert!(!run.running);
        assert!(run.is_complete());
        assert_eq!(run.log.last().unwrap().message, SUMMARY_LINE);
        assert_eq!(sim.start().await, RunOutcome::Completed);
    }
}
