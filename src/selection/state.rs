//! Roving selection over the flattened candidate list

use std::time::{Duration, Instant};

use crate::timer::DeferredSlot;

/// Active index tracking for the mentions popup.
///
/// Keyboard moves take a short hover lock so that a pointer resting over the
/// popup does not drag the active index back while the list scrolls.
#[derive(Debug, Clone)]
pub struct SelectionState {
    index: usize,
    len: usize,
    /// Wrap around at either end instead of stopping
    infinite: bool,
    hover_lock: Duration,
    hover_locked: bool,
    hover_release: DeferredSlot<()>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(true, Duration::from_millis(1000))
    }
}

impl SelectionState {
    pub fn new(infinite: bool, hover_lock: Duration) -> Self {
        Self {
            index: 0,
            len: 0,
            infinite,
            hover_lock,
            hover_locked: false,
            hover_release: DeferredSlot::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    pub fn is_hover_locked(&self) -> bool {
        self.hover_locked
    }

    /// Candidate list changed: adopt the new length and start over at 0
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = 0;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Move to the next candidate. Returns the new index if a move happened.
    pub fn next(&mut self, now: Instant) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        if !self.infinite && self.index >= self.len - 1 {
            return None;
        }

        self.index = (self.index + 1) % self.len;
        self.lock_hover(now);
        Some(self.index)
    }

    /// Move to the previous candidate. Returns the new index if a move happened.
    pub fn prev(&mut self, now: Instant) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        if !self.infinite && self.index == 0 {
            return None;
        }

        self.index = (self.index.min(self.len - 1) + self.len - 1) % self.len;
        self.lock_hover(now);
        Some(self.index)
    }

    /// Pointer hover over a candidate. Ignored while a keyboard move holds the lock.
    pub fn hover(&mut self, index: usize) -> bool {
        if self.hover_locked || index >= self.len || index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    /// Candidate at the active index, if any
    pub fn select<'a, T>(&self, candidates: &'a [T]) -> Option<&'a T> {
        if self.index < self.len {
            candidates.get(self.index)
        } else {
            None
        }
    }

    /// Release the hover lock once its window has passed
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.hover_release.take_due(now).is_some() {
            self.hover_locked = false;
            return true;
        }
        false
    }

    fn lock_hover(&mut self, now: Instant) {
        self.hover_locked = true;
        self.hover_release.schedule(now, self.hover_lock, ());
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
