//! Virtual-clock timer queue for deferred callbacks.
//!
//! Time only moves when the host advances it, which keeps deferred checks
//! deterministic. Tasks due at the same instant run in scheduling order.

use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug)]
pub(crate) struct Scheduler<T> {
    now: Duration,
    seq: u64,
    queue: BTreeMap<(Duration, u64), T>,
}

impl<T> Scheduler<T> {
    pub(crate) fn new() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            queue: BTreeMap::new(),
        }
    }

    pub(crate) fn now(&self) -> Duration {
        self.now
    }

    pub(crate) fn schedule(&mut self, delay: Duration, task: T) {
        let due = self.now.saturating_add(delay);
        self.queue.insert((due, self.seq), task);
        self.seq += 1;
    }

    /// Pop the earliest task due at or before `deadline`, moving the clock to
    /// its due time.
    pub(crate) fn pop_due(&mut self, deadline: Duration) -> Option<T> {
        let (&(due, _), _) = self.queue.first_key_value()?;
        if due > deadline {
            return None;
        }
        let (_, task) = self.queue.pop_first()?;
        self.now = self.now.max(due);
        Some(task)
    }

    pub(crate) fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    pub(crate) fn pending(&self) -> usize {
        self.queue.len()
    }
}
