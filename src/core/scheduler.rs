// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/privscan-rs

//! Virtual-time scheduler for deferred scan events
//!
//! Keeps an ordered queue of (due-time, event) pairs against a virtual
//! clock. Callers advance the clock explicitly, so tests step through a
//! scan timeline without real timers; the binary maps `next_due` onto
//! wall-clock sleeps.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

struct Entry<E> {
    due: Duration,
    seq: u64,
    event: E,
}

// Min-heap by (due, seq); seq keeps same-instant events FIFO.
impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

/// Ordered queue of deferred events on a virtual clock
pub struct Scheduler<E> {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Entry<E>>,
}

impl<E> Scheduler<E> {
    /// Empty scheduler with the clock at zero
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue an event `delay` after the current virtual time
    pub fn schedule(&mut self, delay: Duration, event: E) {
        let entry = Entry {
            due: self.now + delay,
            seq: self.seq,
            event,
        };
        self.seq += 1;
        self.queue.push(entry);
    }

    /// Time until the next queued event, if any
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|e| e.due.saturating_sub(self.now))
    }

    /// True when no events remain queued
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop all queued events without firing them
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Move the clock forward by `step`, returning every event that came
    /// due (inclusive), in firing order
    pub fn advance(&mut self, step: Duration) -> Vec<E> {
        self.now += step;
        let mut fired = Vec::new();
        while self.queue.peek().is_some_and(|e| e.due <= self.now) {
            if let Some(entry) = self.queue.pop() {
                fired.push(entry.event);
            }
        }
        fired
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_events_fire_in_due_order() {
        let mut sched = Scheduler::new();
        sched.schedule(ms(300), "c");
        sched.schedule(ms(100), "a");
        sched.schedule(ms(200), "b");

        assert_eq!(sched.advance(ms(250)), vec!["a", "b"]);
        assert_eq!(sched.advance(ms(50)), vec!["c"]);
        assert!(sched.is_idle());
    }

    #[test]
    fn test_same_instant_events_fire_fifo() {
        let mut sched = Scheduler::new();
        sched.schedule(ms(100), 1);
        sched.schedule(ms(100), 2);
        sched.schedule(ms(100), 3);

        assert_eq!(sched.advance(ms(100)), vec![1, 2, 3]);
    }

    #[test]
    fn test_due_boundary_is_inclusive() {
        let mut sched = Scheduler::new();
        sched.schedule(ms(100), ());
        assert!(sched.advance(ms(99)).is_empty());
        assert_eq!(sched.advance(ms(1)).len(), 1);
    }

    #[test]
    fn test_delays_are_relative_to_current_time() {
        let mut sched = Scheduler::new();
        sched.advance(ms(500));
        sched.schedule(ms(100), "later");
        assert_eq!(sched.next_due(), Some(ms(100)));
        assert_eq!(sched.advance(ms(100)), vec!["later"]);
        assert_eq!(sched.now(), ms(600));
    }

    #[test]
    fn test_clear_drops_pending_events() {
        let mut sched = Scheduler::new();
        sched.schedule(ms(100), ());
        sched.clear();
        assert!(sched.is_idle());
        assert_eq!(sched.next_due(), None);
    }
}
