//! Clock and task ids
//!
//! Ids are creation timestamps in milliseconds. Two adds inside the same
//! millisecond would share a timestamp, so [`IdAllocator`] bumps past the
//! highest id it has handed out or seen.

use std::cell::Cell;

use crate::models::TaskId;

pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: i64) {
        self.now.set(now);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdAllocator {
    last: Option<TaskId>,
}

impl IdAllocator {
    /// Start above every id in `existing`.
    pub fn seeded(existing: impl IntoIterator<Item = TaskId>) -> Self {
        Self { last: existing.into_iter().max() }
    }

    /// `None` once the id space above the last id is used up.
    pub fn next(&mut self, clock: &impl Clock) -> Option<TaskId> {
        let now = clock.now_millis();
        let id = match self.last {
            Some(last) if now <= last => last.checked_add(1)?,
            _ => now,
        };
        self.last = Some(id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_clock() {
        let clock = ManualClock::new(1_000);
        let mut ids = IdAllocator::default();
        assert_eq!(ids.next(&clock), Some(1_000));
        clock.advance(50);
        assert_eq!(ids.next(&clock), Some(1_050));
    }

    #[test]
    fn test_same_tick_does_not_collide() {
        let clock = ManualClock::new(1_000);
        let mut ids = IdAllocator::default();
        let a = ids.next(&clock);
        let b = ids.next(&clock);
        let c = ids.next(&clock);
        assert_eq!((a, b, c), (Some(1_000), Some(1_001), Some(1_002)));
    }

    #[test]
    fn test_clock_going_backwards() {
        let clock = ManualClock::new(500);
        let mut ids = IdAllocator::seeded([900, 200]);
        assert_eq!(ids.next(&clock), Some(901));
        clock.set(2_000);
        assert_eq!(ids.next(&clock), Some(2_000));
    }

    #[test]
    fn test_exhausted_id_space() {
        let clock = ManualClock::new(1_000);
        let mut ids = IdAllocator::seeded([i64::MAX]);
        assert_eq!(ids.next(&clock), None);
        assert_eq!(ids.next(&clock), None);
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
