use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
    time::SystemTime,
};

use tracing::warn;

use tempo_model::{TaskId, TaskInfo, TaskSpec, TaskStatus};

/// In-memory view of every task a runner has seen.
#[derive(Clone)]
pub struct TaskTracker {
    inner: Arc<RwLock<TrackerInner>>,
}

struct TrackerInner {
    /// Tasks indexed by TaskId.
    tasks: HashMap<TaskId, TaskInfo>,
}

impl TaskTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TrackerInner {
                tasks: HashMap::new(),
            })),
        }
    }

    /// Register a submitted task as Pending.
    pub fn register(&self, spec: &TaskSpec) {
        let mut inner = self.inner.write().unwrap();

        let now = SystemTime::now();
        let info = TaskInfo {
            id: spec.id.clone(),
            label: spec.label.clone(),
            status: TaskStatus::Pending,
            deadline_ms: spec.deadline_ms,
            created_at: now,
            updated_at: now,
            error: None,
        };

        inner.tasks.insert(spec.id.clone(), info);
    }

    /// Record that the worker thread has started executing the task.
    pub fn mark_running(&self, id: &TaskId) {
        self.transition(id, TaskStatus::Running, None);
    }

    /// Record the terminal state of a task.
    ///
    /// `error` carries the failure description when `status` is Failed.
    pub fn finish(&self, id: &TaskId, status: TaskStatus, error: Option<String>) {
        self.transition(id, status, error);
    }

    /// Drop a task that never started (worker thread creation failed).
    pub fn remove(&self, id: &TaskId) {
        let mut inner = self.inner.write().unwrap();
        inner.tasks.remove(id);
    }

    /// Get task info by ID.
    pub fn get(&self, id: &TaskId) -> Option<TaskInfo> {
        let inner = self.inner.read().unwrap();
        inner.tasks.get(id).cloned()
    }

    /// List all tracked tasks.
    pub fn list_all(&self) -> Vec<TaskInfo> {
        let inner = self.inner.read().unwrap();
        inner.tasks.values().cloned().collect()
    }

    /// List tasks matching a status filter.
    pub fn list_by_status(&self, status: TaskStatus) -> Vec<TaskInfo> {
        let inner = self.inner.read().unwrap();
        inner
            .tasks
            .values()
            .filter(|info| info.status == status)
            .cloned()
            .collect()
    }

    fn transition(&self, id: &TaskId, next: TaskStatus, error: Option<String>) {
        let mut inner = self.inner.write().unwrap();

        if let Some(info) = inner.tasks.get_mut(id) {
            if !info.status.can_transition_to(next) {
                warn!(task = %id, from = ?info.status, to = ?next, "illegal status transition ignored");
                return;
            }
            info.status = next;
            info.updated_at = SystemTime::now();
            if let Some(err) = error {
                info.error = Some(err);
            }
        }
    }
}

impl Default for TaskTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &str) -> TaskSpec {
        TaskSpec::new("demo").with_id(TaskId::from(id))
    }

    #[test]
    fn register_and_get_task() {
        let tracker = TaskTracker::new();
        tracker.register(&spec("task-1").with_deadline_ms(500));

        let info = tracker.get(&TaskId::from("task-1")).expect("task should exist");
        assert_eq!(info.id, TaskId::from("task-1"));
        assert_eq!(info.label, "demo");
        assert_eq!(info.status, TaskStatus::Pending);
        assert_eq!(info.deadline_ms, 500);
        assert!(info.error.is_none());
    }

    #[test]
    fn mark_running_transitions_from_pending() {
        let tracker = TaskTracker::new();
        let id = TaskId::from("task-1");

        tracker.register(&spec("task-1"));
        tracker.mark_running(&id);

        let info = tracker.get(&id).unwrap();
        assert_eq!(info.status, TaskStatus::Running);
    }

    #[test]
    fn finish_records_failure_message() {
        let tracker = TaskTracker::new();
        let id = TaskId::from("task-1");

        tracker.register(&spec("task-1"));
        tracker.mark_running(&id);
        tracker.finish(&id, TaskStatus::Failed, Some("bad input".to_string()));

        let info = tracker.get(&id).unwrap();
        assert_eq!(info.status, TaskStatus::Failed);
        assert_eq!(info.error.as_deref(), Some("bad input"));
    }

    #[test]
    fn pending_task_cannot_jump_to_terminal() {
        let tracker = TaskTracker::new();
        let id = TaskId::from("task-1");

        tracker.register(&spec("task-1"));
        tracker.finish(&id, TaskStatus::Completed, None);

        let info = tracker.get(&id).unwrap();
        assert_eq!(info.status, TaskStatus::Pending);
    }

    #[test]
    fn terminal_status_is_sticky() {
        let tracker = TaskTracker::new();
        let id = TaskId::from("task-1");

        tracker.register(&spec("task-1"));
        tracker.mark_running(&id);
        tracker.finish(&id, TaskStatus::Completed, None);
        tracker.finish(&id, TaskStatus::Failed, Some("too late".to_string()));

        let info = tracker.get(&id).unwrap();
        assert_eq!(info.status, TaskStatus::Completed);
        assert!(info.error.is_none());
    }

    #[test]
    fn remove_deletes_the_record() {
        let tracker = TaskTracker::new();
        let id = TaskId::from("task-1");

        tracker.register(&spec("task-1"));
        assert!(tracker.get(&id).is_some());

        tracker.remove(&id);
        assert!(tracker.get(&id).is_none());
    }

    #[test]
    fn list_by_status_filters_correctly() {
        let tracker = TaskTracker::new();
        let running = TaskId::from("task-1");

        tracker.register(&spec("task-1"));
        tracker.register(&spec("task-2"));
        tracker.mark_running(&running);

        let running_tasks = tracker.list_by_status(TaskStatus::Running);
        assert_eq!(running_tasks.len(), 1);
        assert_eq!(running_tasks[0].id, running);

        let pending_tasks = tracker.list_by_status(TaskStatus::Pending);
        assert_eq!(pending_tasks.len(), 1);
        assert_eq!(pending_tasks[0].id, TaskId::from("task-2"));
    }

    #[test]
    fn list_all_returns_every_task() {
        let tracker = TaskTracker::new();

        tracker.register(&spec("task-1"));
        tracker.register(&spec("task-2"));
        tracker.register(&spec("task-3"));

        assert_eq!(tracker.list_all().len(), 3);
    }
}
