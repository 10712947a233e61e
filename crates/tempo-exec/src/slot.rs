use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::error::WorkResult;

/// Single-writer, single-reader result slot shared between the caller and
/// the worker thread.
///
/// The ready check and the wait happen under one lock, and `publish` writes
/// and notifies under that same lock, so a wakeup cannot be missed.
pub(crate) struct OutcomeSlot {
    result: Mutex<Option<WorkResult>>,
    ready: Condvar,
}

impl OutcomeSlot {
    pub(crate) fn new() -> Self {
        Self {
            result: Mutex::new(None),
            ready: Condvar::new(),
        }
    }

    /// Write the result (at most once) and wake the waiting caller.
    pub(crate) fn publish(&self, result: WorkResult) {
        let mut slot = self.result.lock().unwrap();
        if slot.is_none() {
            *slot = Some(result);
        }
        self.ready.notify_one();
    }

    /// Block until the worker publishes, or until `limit` elapses.
    ///
    /// `None` waits indefinitely. After the timer expires the slot is read
    /// one final time under the lock, so a signal that lands together with
    /// the expiry wins over the timer.
    pub(crate) fn wait(&self, limit: Option<Duration>) -> Option<WorkResult> {
        let mut slot = self.result.lock().unwrap();

        match limit {
            None => {
                while slot.is_none() {
                    slot = self.ready.wait(slot).unwrap();
                }
                slot.take()
            }
            Some(limit) => {
                let deadline = Instant::now() + limit;
                while slot.is_none() {
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    let (guard, _) = self.ready.wait_timeout(slot, deadline - now).unwrap();
                    slot = guard;
                }
                slot.take()
            }
        }
    }
}
