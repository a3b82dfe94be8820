//! Per-player countdown
//!
//! Remaining time is re-derived from absolute timestamps on every tick, so a
//! skipped frame never causes drift. Timestamps are milliseconds from any
//! monotonic clock.

use serde::{Deserialize, Serialize};

/// Counts down whole seconds from a fixed duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownTimer {
    /// Fixed length of the countdown (seconds)
    duration_secs: u32,
    /// Timestamp of the last `start` (None before the turn begins)
    start_ms: Option<u64>,
    /// Whole seconds left, clamped at 0
    remaining_secs: u32,
}

impl CountdownTimer {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            start_ms: None,
            remaining_secs: duration_secs,
        }
    }

    /// Begin (or restart) the countdown window at `now_ms`
    pub fn start(&mut self, now_ms: u64) {
        self.start_ms = Some(now_ms);
        self.remaining_secs = self.duration_secs;
    }

    /// Recompute remaining time from `now_ms`. No-op until started.
    pub fn tick(&mut self, now_ms: u64) {
        let Some(start) = self.start_ms else {
            return;
        };
        let elapsed_secs = now_ms.saturating_sub(start) / 1000;
        let remaining = u64::from(self.duration_secs).saturating_sub(elapsed_secs);
        // remaining <= duration_secs, so it always fits
        self.remaining_secs = remaining as u32;
    }

    pub fn has_ended(&self) -> bool {
        self.remaining_secs == 0
    }

    pub fn has_started(&self) -> bool {
        self.start_ms.is_some()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unstarted_timer_shows_full_duration() {
        let mut timer = CountdownTimer::new(3);
        timer.tick(50_000);
        assert_eq!(timer.remaining_secs(), 3);
        assert!(!timer.has_started());
        assert!(!timer.has_ended());
    }

    #[test]
    fn test_floor_division_of_elapsed_time() {
        let mut timer = CountdownTimer::new(3);
        timer.start(1_000);
        timer.tick(1_999);
        assert_eq!(timer.remaining_secs(), 3);
        timer.tick(2_000);
        assert_eq!(timer.remaining_secs(), 2);
        timer.tick(3_999);
        assert_eq!(timer.remaining_secs(), 1);
        assert!(!timer.has_ended());
        timer.tick(4_000);
        assert_eq!(timer.remaining_secs(), 0);
        assert!(timer.has_ended());
    }

    #[test]
    fn test_clamps_after_expiry() {
        let mut timer = CountdownTimer::new(2);
        timer.start(0);
        timer.tick(60_000);
        assert_eq!(timer.remaining_secs(), 0);
        assert!(timer.has_ended());
    }

    #[test]
    fn test_restart_opens_a_new_window() {
        let mut timer = CountdownTimer::new(3);
        timer.start(0);
        timer.tick(5_000);
        assert!(timer.has_ended());

        timer.start(10_000);
        assert!(!timer.has_ended());
        timer.tick(10_500);
        assert_eq!(timer.remaining_secs(), 3);
    }

    #[test]
    fn test_clock_before_start_counts_as_zero_elapsed() {
        let mut timer = CountdownTimer::new(3);
        timer.start(5_000);
        timer.tick(4_000);
        assert_eq!(timer.remaining_secs(), 3);
    }

    proptest! {
        #[test]
        fn prop_tick_right_after_start_is_full(duration in 1u32..1_000, start in 0u64..1_000_000_000) {
            let mut timer = CountdownTimer::new(duration);
            timer.start(start);
            timer.tick(start);
            prop_assert_eq!(timer.remaining_secs(), duration);
            prop_assert!(!timer.has_ended());
        }

        #[test]
        fn prop_ends_after_full_duration(
            duration in 1u32..1_000,
            start in 0u64..1_000_000_000,
            extra in 0u64..100_000,
        ) {
            let mut timer = CountdownTimer::new(duration);
            timer.start(start);
            timer.tick(start + u64::from(duration) * 1000 + extra);
            prop_assert!(timer.has_ended());
            prop_assert_eq!(timer.remaining_secs(), 0);
        }

        #[test]
        fn prop_tick_is_idempotent(duration in 1u32..100, offset in 0u64..200_000) {
            let mut timer = CountdownTimer::new(duration);
            timer.start(0);
            timer.tick(offset);
            let once = timer.clone();
            timer.tick(offset);
            prop_assert_eq!(timer, once);
        }
    }
}
