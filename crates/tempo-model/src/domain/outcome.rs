use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::TaskStatus;

/// Immutable terminal record produced by exactly one execution of a task.
///
/// Fields are private so the record can only be built through the
/// constructors, which keep the invariant: a failure description is present
/// if and only if the status is [`TaskStatus::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    status: TaskStatus,
    /// Wall-clock time from worker start to the terminal transition.
    #[serde(with = "millis_serde")]
    elapsed: Duration,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Outcome {
    /// Task signaled success within its deadline.
    pub fn completed(elapsed: Duration) -> Self {
        Self {
            status: TaskStatus::Completed,
            elapsed,
            error: None,
        }
    }

    /// Task reported a failure; the message is preserved verbatim.
    pub fn failed(message: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            status: TaskStatus::Failed,
            elapsed,
            error: Some(message.into()),
        }
    }

    /// Task did not signal before the deadline; elapsed is the deadline itself.
    pub fn timed_out(deadline: Duration) -> Self {
        Self {
            status: TaskStatus::TimedOut,
            elapsed: deadline,
            error: None,
        }
    }

    #[inline]
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Failure description, present only when the status is `Failed`.
    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

mod millis_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (elapsed.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(ms))
    }
}
