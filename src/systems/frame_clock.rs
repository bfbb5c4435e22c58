//! Frame pacing
//!
//! The viewer redraws at a fixed rate rather than as fast as possible.
//! The clock hands out deadlines; the event loop sleeps until the next one
//! with `ControlFlow::WaitUntil` and draws a frame when it passes.

use std::time::{Duration, Instant};

/// Fixed-rate frame scheduler
pub struct FrameClock {
    interval: Duration,
    next_deadline: Instant,
}

impl FrameClock {
    /// Create a clock ticking `frame_rate` times per second
    ///
    /// The first frame is due immediately.
    pub fn new(frame_rate: u32) -> Self {
        Self::starting_at(frame_rate, Instant::now())
    }

    /// Create a clock whose first frame is due at `start`
    pub fn starting_at(frame_rate: u32, start: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64),
            next_deadline: start,
        }
    }

    /// Check whether a frame is due at `now`, and if so schedule the next
    ///
    /// A frame that is late by more than one interval re-anchors the
    /// schedule at `now` instead of queueing catch-up frames.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next_deadline {
            return false;
        }

        self.next_deadline += self.interval;
        if self.next_deadline <= now {
            self.next_deadline = now + self.interval;
        }
        true
    }

    /// When the next frame is due
    #[inline]
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Time between frames
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_frame_rate() {
        let clock = FrameClock::new(25);
        assert_eq!(clock.interval(), Duration::from_millis(40));
    }

    #[test]
    fn test_first_frame_due_immediately() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(25, start);
        assert!(clock.tick(start));
        assert_eq!(clock.next_deadline(), start + Duration::from_millis(40));
    }

    #[test]
    fn test_not_due_before_deadline() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(25, start);
        assert!(clock.tick(start));
        assert!(!clock.tick(start + Duration::from_millis(39)));
        assert!(clock.tick(start + Duration::from_millis(40)));
        assert_eq!(clock.next_deadline(), start + Duration::from_millis(80));
    }

    #[test]
    fn test_late_frame_reanchors() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(25, start);
        assert!(clock.tick(start));

        // A long stall yields one frame, not a burst
        let late = start + Duration::from_millis(500);
        assert!(clock.tick(late));
        assert_eq!(clock.next_deadline(), late + Duration::from_millis(40));
        assert!(!clock.tick(late + Duration::from_millis(1)));
    }

    #[test]
    fn test_zero_frame_rate_clamped() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.interval(), Duration::from_secs(1));
    }
}
