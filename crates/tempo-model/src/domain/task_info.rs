use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::{DeadlineMs, TaskId, TaskStatus};

/// Detailed information about a task instance as tracked by the runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    /// Unique task identifier.
    pub id: TaskId,
    /// Human-readable label from the spec.
    pub label: String,
    /// Current execution state.
    pub status: TaskStatus,
    /// Deadline from the spec; zero means no limit.
    pub deadline_ms: DeadlineMs,
    /// When the task was registered, as epoch milliseconds on the wire.
    #[serde(with = "epoch_ms")]
    pub created_at: SystemTime,
    /// When the task last changed state.
    #[serde(with = "epoch_ms")]
    pub updated_at: SystemTime,
    /// Last error message (if status is Failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

mod epoch_ms {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let since_epoch = time
            .duration_since(UNIX_EPOCH)
            .map_err(serde::ser::Error::custom)?;
        (since_epoch.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = u64::deserialize(deserializer)?;
        Ok(UNIX_EPOCH + Duration::from_millis(ms))
    }
}
