use serde::{Deserialize, Serialize};

/// What happened to a task, as reported to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    /// Worker thread spawned; the task is about to execute.
    TaskStarting,
    /// Task signaled success within its deadline.
    TaskCompleted,
    /// Task reported a failure.
    TaskFailed,
    /// Task did not signal before the deadline elapsed.
    TimeoutHit,
    /// Worker left running unobserved after a timeout.
    TaskDetached,
    /// Worker thread could not be created; the task never ran.
    SpawnRejected,
}

/// Lifecycle notification emitted by the runner.
///
/// All payload fields are optional; which ones are set depends on the kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            task: None,
            reason: None,
            deadline_ms: None,
            elapsed_ms: None,
        }
    }

    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_deadline_ms(mut self, deadline_ms: u64) -> Self {
        self.deadline_ms = Some(deadline_ms);
        self
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = Some(elapsed_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_payload_fields() {
        let event = Event::new(EventKind::TimeoutHit)
            .with_task("sleeper")
            .with_deadline_ms(50);

        assert_eq!(event.kind, EventKind::TimeoutHit);
        assert_eq!(event.task.as_deref(), Some("sleeper"));
        assert_eq!(event.deadline_ms, Some(50));
        assert!(event.reason.is_none());
    }

    #[test]
    fn serde_omits_unset_fields() {
        let event = Event::new(EventKind::TaskCompleted).with_task("quick");
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""kind":"taskCompleted""#));
        assert!(!json.contains("reason"));
        assert!(!json.contains("deadlineMs"));
    }
}
