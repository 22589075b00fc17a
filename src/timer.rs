//! Deferred work for a single-threaded event loop
//!
//! A `DeferredSlot` holds at most one pending task. Scheduling replaces
//! whatever was pending, so only the most recent request ever runs. Time is
//! passed in by the caller; nothing here reads the clock.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct DeferredSlot<T> {
    pending: Option<(Instant, T)>,
}

impl<T> Default for DeferredSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DeferredSlot<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `task` to become due after `delay`, dropping any pending task
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) {
        self.pending = Some((now + delay, task));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the pending task if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, task)| task),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(10);

    #[test]
    fn test_task_not_due_before_deadline() {
        let now = Instant::now();
        let mut slot = DeferredSlot::new();
        slot.schedule(now, DELAY, 1);

        assert!(slot.take_due(now).is_none());
        assert!(slot.take_due(now + Duration::from_millis(9)).is_none());
        assert!(slot.is_pending());
    }

    #[test]
    fn test_task_due_at_deadline_is_taken_once() {
        let now = Instant::now();
        let mut slot = DeferredSlot::new();
        slot.schedule(now, DELAY, "scroll");

        assert_eq!(slot.take_due(now + DELAY), Some("scroll"));
        assert!(slot.take_due(now + DELAY).is_none());
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_schedule_replaces_pending_task() {
        let now = Instant::now();
        let mut slot = DeferredSlot::new();
        slot.schedule(now, DELAY, 1);
        slot.schedule(now + Duration::from_millis(5), DELAY, 2);

        // First deadline has passed but the replacement has not
        assert!(slot.take_due(now + DELAY).is_none());
        assert_eq!(slot.deadline(), Some(now + Duration::from_millis(15)));
        assert_eq!(slot.take_due(now + Duration::from_millis(15)), Some(2));
    }

    #[test]
    fn test_cancel_clears_pending_task() {
        let now = Instant::now();
        let mut slot = DeferredSlot::new();
        slot.schedule(now, DELAY, ());
        slot.cancel();

        assert!(slot.take_due(now + DELAY).is_none());
        assert!(slot.deadline().is_none());
    }
}
