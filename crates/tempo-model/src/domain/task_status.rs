use serde::{Deserialize, Serialize};

/// Current execution state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    /// Task is registered but its worker has not started yet.
    Pending,
    /// Task is currently executing on its worker thread.
    Running,
    /// Task signaled success within its deadline.
    Completed,
    /// Task reported a failure within its deadline.
    Failed,
    /// Task did not signal before its deadline elapsed.
    TimedOut,
}

impl TaskStatus {
    /// Returns `true` if the task is in a terminal state (won't transition further).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Failed | TaskStatus::TimedOut
        )
    }

    /// Returns `true` if the task is still active (pending or running).
    pub fn is_active(&self) -> bool {
        matches!(self, TaskStatus::Pending | TaskStatus::Running)
    }

    /// Returns `true` if moving from `self` to `next` is a legal lifecycle step.
    ///
    /// Pending only starts running; Running only ends in one of the three
    /// terminal states; terminal states never transition again.
    pub fn can_transition_to(&self, next: TaskStatus) -> bool {
        match self {
            TaskStatus::Pending => matches!(next, TaskStatus::Running),
            TaskStatus::Running => next.is_terminal(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(TaskStatus::Completed.is_terminal());
        assert!(TaskStatus::Failed.is_terminal());
        assert!(TaskStatus::TimedOut.is_terminal());

        assert!(!TaskStatus::Pending.is_terminal());
        assert!(!TaskStatus::Running.is_terminal());
    }

    #[test]
    fn active_states() {
        assert!(TaskStatus::Pending.is_active());
        assert!(TaskStatus::Running.is_active());

        assert!(!TaskStatus::Completed.is_active());
        assert!(!TaskStatus::TimedOut.is_active());
    }

    #[test]
    fn pending_only_starts_running() {
        assert!(TaskStatus::Pending.can_transition_to(TaskStatus::Running));

        assert!(!TaskStatus::Pending.can_transition_to(TaskStatus::Completed));
        assert!(!TaskStatus::Pending.can_transition_to(TaskStatus::Failed));
        assert!(!TaskStatus::Pending.can_transition_to(TaskStatus::TimedOut));
        assert!(!TaskStatus::Pending.can_transition_to(TaskStatus::Pending));
    }

    #[test]
    fn running_ends_in_exactly_one_terminal_state() {
        assert!(TaskStatus::Running.can_transition_to(TaskStatus::Completed));
        assert!(TaskStatus::Running.can_transition_to(TaskStatus::Failed));
        assert!(TaskStatus::Running.can_transition_to(TaskStatus::TimedOut));

        assert!(!TaskStatus::Running.can_transition_to(TaskStatus::Pending));
        assert!(!TaskStatus::Running.can_transition_to(TaskStatus::Running));
    }

    #[test]
    fn terminal_states_are_sticky() {
        for terminal in [
            TaskStatus::Completed,
            TaskStatus::Failed,
            TaskStatus::TimedOut,
        ] {
            for next in [
                TaskStatus::Pending,
                TaskStatus::Running,
                TaskStatus::Completed,
                TaskStatus::Failed,
                TaskStatus::TimedOut,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn serde_roundtrip() {
        let status = TaskStatus::TimedOut;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#""timedOut""#);

        let back: TaskStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}
