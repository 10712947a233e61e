use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error, trace, warn};

use tempo_model::{Event, EventKind, Outcome, TaskSpec, TaskStatus};

use crate::{
    error::{RunnerError, TaskFailure, WorkResult},
    slot::OutcomeSlot,
    subscribe::Subscribe,
    tracker::TaskTracker,
};

/// Runs one unit of work per call on its own worker thread, racing the
/// work's completion signal against the spec's deadline.
///
/// The worker is joined when the signal arrives in time and detached (left
/// running unobserved, never forcibly killed) when the deadline wins.
pub struct TaskRunner {
    name: &'static str,
    tracker: TaskTracker,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl TaskRunner {
    pub fn new() -> Self {
        Self {
            name: "timed",
            tracker: TaskTracker::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Attach a lifecycle event subscriber.
    pub fn with_subscriber(mut self, subscriber: Arc<dyn Subscribe>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Lifecycle view of every task this runner has seen.
    pub fn tracker(&self) -> &TaskTracker {
        &self.tracker
    }

    /// Execute `work` under the spec's deadline and produce exactly one outcome.
    ///
    /// A zero deadline waits indefinitely for the work to signal. Only worker
    /// thread creation failure makes `run` itself fail; every task-level
    /// result, including reported failures, comes back as an [`Outcome`].
    pub fn run<F>(&self, spec: TaskSpec, work: F) -> Result<Outcome, RunnerError>
    where
        F: FnOnce() -> WorkResult + Send + 'static,
    {
        self.tracker.register(&spec);

        let slot = Arc::new(OutcomeSlot::new());
        let worker_slot = Arc::clone(&slot);

        let started = Instant::now();
        let spawned = thread::Builder::new()
            .name(format!("tempo-{}", spec.label))
            .spawn(move || {
                // A panicking work unit must not swallow the signal: the
                // unwind collapses into the failure channel.
                let result = panic::catch_unwind(AssertUnwindSafe(work))
                    .unwrap_or_else(|payload| Err(TaskFailure::new(panic_text(payload))));
                worker_slot.publish(result);
            });

        let handle = match spawned {
            Ok(handle) => handle,
            Err(e) => {
                self.tracker.remove(&spec.id);
                self.emit(
                    Event::new(EventKind::SpawnRejected)
                        .with_task(&spec.label)
                        .with_reason(e.to_string()),
                );
                error!(task = %spec.id, label = %spec.label, "worker thread could not be created");
                return Err(RunnerError::ResourceExhausted(e.to_string()));
            }
        };

        self.tracker.mark_running(&spec.id);
        self.emit(
            Event::new(EventKind::TaskStarting)
                .with_task(&spec.label)
                .with_deadline_ms(spec.deadline_ms),
        );
        trace!(
            task = %spec.id,
            label = %spec.label,
            deadline_ms = spec.deadline_ms,
            "worker spawned"
        );

        match slot.wait(spec.deadline()) {
            Some(Ok(())) => {
                let elapsed = started.elapsed();
                let _ = handle.join();

                self.tracker.finish(&spec.id, TaskStatus::Completed, None);
                self.emit(
                    Event::new(EventKind::TaskCompleted)
                        .with_task(&spec.label)
                        .with_elapsed_ms(elapsed.as_millis() as u64),
                );
                debug!(
                    task = %spec.id,
                    label = %spec.label,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "task completed"
                );
                Ok(Outcome::completed(elapsed))
            }
            Some(Err(failure)) => {
                let elapsed = started.elapsed();
                let _ = handle.join();

                self.tracker.finish(
                    &spec.id,
                    TaskStatus::Failed,
                    Some(failure.message().to_string()),
                );
                self.emit(
                    Event::new(EventKind::TaskFailed)
                        .with_task(&spec.label)
                        .with_reason(failure.message())
                        .with_elapsed_ms(elapsed.as_millis() as u64),
                );
                error!(
                    task = %spec.id,
                    label = %spec.label,
                    reason = %failure,
                    "task reported failure"
                );
                Ok(Outcome::failed(failure.message(), elapsed))
            }
            None => {
                // Deadline won: the worker stays alive, unobserved.
                drop(handle);

                self.tracker.finish(&spec.id, TaskStatus::TimedOut, None);
                self.emit(
                    Event::new(EventKind::TimeoutHit)
                        .with_task(&spec.label)
                        .with_deadline_ms(spec.deadline_ms),
                );
                self.emit(Event::new(EventKind::TaskDetached).with_task(&spec.label));
                warn!(
                    task = %spec.id,
                    label = %spec.label,
                    deadline_ms = spec.deadline_ms,
                    "task exceeded its deadline; worker detached"
                );
                Ok(Outcome::timed_out(Duration::from_millis(spec.deadline_ms)))
            }
        }
    }

    fn emit(&self, event: Event) {
        for subscriber in &self.subscribers {
            subscriber.on_event(&event);
        }
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_text(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}
