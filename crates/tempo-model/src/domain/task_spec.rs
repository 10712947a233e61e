use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{DeadlineMs, TaskId};

/// What a caller submits to the runner: an identity, a label for logs and
/// thread names, and a wall-clock deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    /// Unique task identifier.
    pub id: TaskId,
    /// Human-readable name used in logs and the worker thread name.
    pub label: String,
    /// Maximum wall-clock duration in milliseconds; zero means no limit.
    pub deadline_ms: DeadlineMs,
}

impl TaskSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            label: label.into(),
            deadline_ms: 0,
        }
    }

    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    pub fn with_deadline_ms(mut self, deadline_ms: DeadlineMs) -> Self {
        self.deadline_ms = deadline_ms;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline_ms = deadline.as_millis() as DeadlineMs;
        self
    }

    /// The deadline as a duration, or `None` when the spec sets no limit.
    pub fn deadline(&self) -> Option<Duration> {
        (self.deadline_ms > 0).then(|| Duration::from_millis(self.deadline_ms))
    }
}

impl Default for TaskSpec {
    fn default() -> Self {
        Self::new("task")
    }
}
