use thiserror::Error;

/// Failure reported by a unit of work through its result channel.
///
/// The message travels verbatim into the task's outcome; it is never
/// rewritten or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TaskFailure(String);

impl TaskFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskFailure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for TaskFailure {
    fn from(message: String) -> Self {
        Self(message)
    }
}

/// Result produced by a unit of work: success signal or failure description.
pub type WorkResult = Result<(), TaskFailure>;

/// Infrastructure failures of the runner itself, distinct from any outcome.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The worker thread could not be created; the task never began.
    #[error("worker thread could not be created: {0}")]
    ResourceExhausted(String),
    /// The bridge dropped its channel before delivering an outcome.
    #[error("outcome channel closed before a result was delivered")]
    ChannelClosed,
}

impl From<std::io::Error> for RunnerError {
    fn from(e: std::io::Error) -> Self {
        RunnerError::ResourceExhausted(e.to_string())
    }
}
