//! Cancellable scheduled tasks
//!
//! Every delayed effect in the form (skill pulses, the simulated submission
//! round-trip, toast auto-dismiss) is a [`TimerSlot`]. A slot holds at most one
//! pending task; scheduling again replaces the previous one, so a replaced or
//! cancelled task can never fire late.

use std::time::{Duration, Instant};

/// Identifies one scheduled task. Ids are never reused within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    id: TimerId,
    started: Instant,
    deadline: Instant,
}

/// Single-slot timer driven by explicit `now` values
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    pending: Option<Scheduled>,
    next_id: u64,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task `duration` after `now`, cancelling any pending one
    pub fn schedule(&mut self, now: Instant, duration: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending = Some(Scheduled {
            id,
            started: now,
            deadline: now + duration,
        });
        id
    }

    /// Drop the pending task, if any. Returns the cancelled id.
    pub fn cancel(&mut self) -> Option<TimerId> {
        self.pending.take().map(|s| s.id)
    }

    /// Take the pending task if its deadline has been reached
    pub fn fire(&mut self, now: Instant) -> Option<TimerId> {
        match self.pending {
            Some(s) if now >= s.deadline => {
                self.pending = None;
                Some(s.id)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_id(&self) -> Option<TimerId> {
        self.pending.map(|s| s.id)
    }

    #[allow(dead_code)] // progress() covers what the UI needs
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|s| s.deadline)
    }

    /// Fraction of the pending task's delay that has elapsed, clamped to [0, 1].
    /// `None` when nothing is pending.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        self.pending.map(|s| {
            let total = s.deadline.saturating_duration_since(s.started);
            if total.is_zero() {
                return 1.0;
            }
            let elapsed = now.saturating_duration_since(s.started);
            (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_new_slot_is_idle() {
        let slot = TimerSlot::new();
        assert!(!slot.is_pending());
        assert!(slot.deadline().is_none());
        assert!(slot.pending_id().is_none());
        assert!(slot.progress(Instant::now()).is_none());
    }

    #[test]
    fn test_fire_before_deadline_is_none() {
        let t0 = Instant::now();
        let mut slot = TimerSlot::new();
        slot.schedule(t0, ms(100));
        assert!(slot.fire(t0 + ms(99)).is_none());
        assert!(slot.is_pending());
    }

    #[test]
    fn test_fire_at_deadline_clears_slot() {
        let t0 = Instant::now();
        let mut slot = TimerSlot::new();
        let id = slot.schedule(t0, ms(100));
        assert_eq!(slot.fire(t0 + ms(100)), Some(id));
        assert!(!slot.is_pending());
        assert!(slot.fire(t0 + ms(500)).is_none());
    }

    #[test]
    fn test_reschedule_replaces_pending_task() {
        let t0 = Instant::now();
        let mut slot = TimerSlot::new();
        let first = slot.schedule(t0, ms(100));
        let second = slot.schedule(t0 + ms(50), ms(100));
        assert_ne!(first, second);
        // First deadline passes without firing
        assert!(slot.fire(t0 + ms(120)).is_none());
        assert_eq!(slot.fire(t0 + ms(150)), Some(second));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let t0 = Instant::now();
        let mut slot = TimerSlot::new();
        let id = slot.schedule(t0, ms(10));
        assert_eq!(slot.cancel(), Some(id));
        assert!(slot.fire(t0 + ms(1000)).is_none());
        assert!(slot.cancel().is_none());
    }

    #[test]
    fn test_progress() {
        let t0 = Instant::now();
        let mut slot = TimerSlot::new();
        assert!(slot.progress(t0).is_none());
        slot.schedule(t0, ms(200));
        assert_eq!(slot.progress(t0), Some(0.0));
        assert_eq!(slot.progress(t0 + ms(100)), Some(0.5));
        assert_eq!(slot.progress(t0 + ms(400)), Some(1.0));
    }
}
