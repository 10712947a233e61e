use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::info;

use tempo_exec::{TaskFailure, TaskRunner};
use tempo_model::TaskSpec;
use tempo_observe::{LoggerConfig, Subscriber, logger_init};

fn main() -> anyhow::Result<()> {
    let cfg = LoggerConfig::default();
    logger_init(&cfg)?;
    info!("logger initialized");

    let runner = Arc::new(TaskRunner::new().with_subscriber(Arc::new(Subscriber)));
    info!("runner ready");

    // A task that finishes well inside its budget.
    let outcome = runner.run(
        TaskSpec::new("quick").with_deadline(Duration::from_millis(500)),
        || {
            thread::sleep(Duration::from_millis(100));
            Ok(())
        },
    )?;
    info!(
        status = ?outcome.status(),
        elapsed_ms = outcome.elapsed().as_millis() as u64,
        "quick task finished"
    );

    // A task that rejects its input immediately.
    let outcome = runner.run(
        TaskSpec::new("validator").with_deadline(Duration::from_millis(500)),
        || Err(TaskFailure::new("bad input")),
    )?;
    info!(
        status = ?outcome.status(),
        error = outcome.error().unwrap_or("none"),
        "validator finished"
    );

    // A task that oversleeps its budget and gets left behind.
    let outcome = runner.run(
        TaskSpec::new("sleeper").with_deadline(Duration::from_millis(50)),
        || {
            thread::sleep(Duration::from_millis(200));
            Ok(())
        },
    )?;
    info!(
        status = ?outcome.status(),
        elapsed_ms = outcome.elapsed().as_millis() as u64,
        "sleeper abandoned"
    );

    for task in runner.tracker().list_all() {
        info!(task = %task.id, label = %task.label, status = ?task.status, "final state");
    }

    Ok(())
}
