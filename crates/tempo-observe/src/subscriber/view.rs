use std::borrow::Borrow;

use tracing::{debug, error, info, trace, warn};

use tempo_model::{Event, EventKind};

pub trait View {
    fn as_task(&self) -> &str;
    fn as_reason(&self) -> &str;
    fn deadline_ms(&self) -> u64;
    fn elapsed_ms(&self) -> u64;
    fn kind(&self) -> EventKind;
}

impl<T> View for T
where
    T: Borrow<Event>,
{
    #[inline]
    fn as_task(&self) -> &str {
        self.borrow().task.as_deref().unwrap_or("unknown")
    }
    #[inline]
    fn as_reason(&self) -> &str {
        self.borrow().reason.as_deref().unwrap_or("unknown")
    }
    #[inline]
    fn deadline_ms(&self) -> u64 {
        self.borrow().deadline_ms.unwrap_or(0)
    }
    #[inline]
    fn elapsed_ms(&self) -> u64 {
        self.borrow().elapsed_ms.unwrap_or(0)
    }
    #[inline]
    fn kind(&self) -> EventKind {
        self.borrow().kind
    }
}

#[inline]
pub fn message_for(kind: EventKind) -> &'static str {
    match kind {
        // lifecycle
        EventKind::TaskStarting => "task is starting",
        EventKind::TaskCompleted => "task completed within its deadline",
        EventKind::TaskFailed => "task reported a failure",

        // deadline
        EventKind::TimeoutHit => "task exceeded its configured deadline",
        EventKind::TaskDetached => "worker left running unobserved after timeout",

        // infrastructure
        EventKind::SpawnRejected => "worker thread could not be created",
    }
}

#[inline]
pub fn log_event<E: View>(e: E) {
    let msg = message_for(e.kind());

    match e.kind() {
        // lifecycle
        EventKind::TaskStarting => {
            info!(task = e.as_task(), deadline_ms = e.deadline_ms(), "{msg}")
        }
        EventKind::TaskCompleted => {
            debug!(task = e.as_task(), elapsed_ms = e.elapsed_ms(), "{msg}")
        }
        EventKind::TaskFailed => error!(
            task = e.as_task(),
            reason = e.as_reason(),
            elapsed_ms = e.elapsed_ms(),
            "{msg}"
        ),

        // deadline
        EventKind::TimeoutHit => {
            warn!(task = e.as_task(), deadline_ms = e.deadline_ms(), "{msg}")
        }
        EventKind::TaskDetached => trace!(task = e.as_task(), "{msg}"),

        // infrastructure
        EventKind::SpawnRejected => {
            error!(task = e.as_task(), reason = e.as_reason(), "{msg}")
        }
    }
}

/// Forwards runner lifecycle events into the tracing pipeline.
pub struct Subscriber;

impl tempo_exec::Subscribe for Subscriber {
    fn on_event(&self, event: &Event) {
        log_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_defaults_cover_missing_fields() {
        let event = Event::new(EventKind::TaskFailed);
        assert_eq!(event.as_task(), "unknown");
        assert_eq!(event.as_reason(), "unknown");
        assert_eq!(event.deadline_ms(), 0);
        assert_eq!(event.elapsed_ms(), 0);
    }

    #[test]
    fn view_reads_populated_fields() {
        let event = Event::new(EventKind::TimeoutHit)
            .with_task("sleeper")
            .with_deadline_ms(50);

        assert_eq!(event.kind(), EventKind::TimeoutHit);
        assert_eq!(event.as_task(), "sleeper");
        assert_eq!(event.deadline_ms(), 50);
    }

    #[test]
    fn every_kind_has_a_message() {
        for kind in [
            EventKind::TaskStarting,
            EventKind::TaskCompleted,
            EventKind::TaskFailed,
            EventKind::TimeoutHit,
            EventKind::TaskDetached,
            EventKind::SpawnRejected,
        ] {
            assert!(!message_for(kind).is_empty());
        }
    }
}
