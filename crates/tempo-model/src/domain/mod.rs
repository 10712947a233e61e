mod task_id;
pub use task_id::TaskId;

mod task_status;
pub use task_status::TaskStatus;

mod task_spec;
pub use task_spec::TaskSpec;

mod task_info;
pub use task_info::TaskInfo;

mod outcome;
pub use outcome::Outcome;

mod event;
pub use event::{Event, EventKind};

/// Deadline value in milliseconds.
///
/// Used in task specifications where a wall-clock limit is required.
/// Zero means the task has no time limit.
pub type DeadlineMs = u64;
