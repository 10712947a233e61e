//! Async adapter over the blocking runner.
//!
//! The blocking deadline wait happens on a dedicated bridge thread; the
//! outcome travels back through a oneshot channel, so async callers can
//! await a result without pinning a runtime worker.

use std::sync::Arc;
use std::thread;

use tempo_model::{Outcome, TaskSpec};

use crate::error::{RunnerError, WorkResult};
use crate::runner::TaskRunner;

/// Run `work` through `runner` and await its outcome.
///
/// Infrastructure failures surface the same way as in [`TaskRunner::run`];
/// additionally, losing the bridge thread before it delivers maps to
/// [`RunnerError::ChannelClosed`].
pub async fn run<F>(
    runner: Arc<TaskRunner>,
    spec: TaskSpec,
    work: F,
) -> Result<Outcome, RunnerError>
where
    F: FnOnce() -> WorkResult + Send + 'static,
{
    let (tx, rx) = tokio::sync::oneshot::channel();

    thread::Builder::new()
        .name(format!("tempo-bridge-{}", spec.label))
        .spawn(move || {
            let _ = tx.send(runner.run(spec, work));
        })
        .map_err(|e| RunnerError::ResourceExhausted(e.to_string()))?;

    rx.await.map_err(|_| RunnerError::ChannelClosed)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tempo_model::TaskStatus;

    use crate::error::TaskFailure;

    #[tokio::test]
    async fn bridge_delivers_a_completed_outcome() {
        let runner = Arc::new(TaskRunner::new());
        let spec = TaskSpec::new("quick").with_deadline_ms(500);

        let outcome = run(runner, spec, || {
            thread::sleep(Duration::from_millis(20));
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(outcome.status(), TaskStatus::Completed);
    }

    #[tokio::test]
    async fn bridge_delivers_failures_and_timeouts() {
        let runner = Arc::new(TaskRunner::new());

        let failed = run(
            Arc::clone(&runner),
            TaskSpec::new("bad").with_deadline_ms(500),
            || Err(TaskFailure::new("bad input")),
        )
        .await
        .unwrap();
        assert_eq!(failed.status(), TaskStatus::Failed);
        assert_eq!(failed.error(), Some("bad input"));

        let timed_out = run(
            runner,
            TaskSpec::new("sleeper").with_deadline_ms(50),
            || {
                thread::sleep(Duration::from_millis(150));
                Ok(())
            },
        )
        .await
        .unwrap();
        assert_eq!(timed_out.status(), TaskStatus::TimedOut);
    }
}
