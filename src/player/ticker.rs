//! Fixed-interval ticker for the per-frame playback poll.
//!
//! The driver needs to be polled at a steady cadence while playing. Instead
//! of a free-running callback that must be remembered and cancelled, the
//! ticker is a plain value owned by the play loop: when the loop exits, the
//! ticker goes with it and nothing keeps firing.

use std::thread;
use std::time::{Duration, Instant};

/// A drift-compensating fixed-interval ticker.
///
/// Deadlines advance by whole intervals from the previous deadline, not from
/// "now", so a late tick does not push every following tick later. If the
/// loop falls more than one interval behind, the schedule resets instead of
/// firing a burst of catch-up ticks.
#[derive(Debug)]
pub struct FrameTicker {
    interval: Duration,
    next: Instant,
}

impl FrameTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Instant::now() + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time remaining until the next tick; zero when overdue. Useful as a
    /// poll timeout so input handling and ticking share one loop.
    pub fn remaining(&self) -> Duration {
        self.next.saturating_duration_since(Instant::now())
    }

    /// Whether the next tick is due.
    pub fn due(&self) -> bool {
        Instant::now() >= self.next
    }

    /// Advance the schedule after a tick has been handled.
    pub fn advance(&mut self) {
        self.next += self.interval;
        let now = Instant::now();
        if self.next < now {
            // Fell behind by more than an interval; reset rather than burst.
            self.next = now + self.interval;
        }
    }

    /// Block until the next tick is due, then advance the schedule.
    pub fn wait(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_due_immediately() {
        let ticker = FrameTicker::new(Duration::from_millis(50));
        assert!(!ticker.due());
        assert!(ticker.remaining() > Duration::ZERO);
    }

    #[test]
    fn due_after_interval_elapses() {
        let ticker = FrameTicker::new(Duration::from_millis(5));
        thread::sleep(Duration::from_millis(10));
        assert!(ticker.due());
        assert_eq!(ticker.remaining(), Duration::ZERO);
    }

    #[test]
    fn advance_schedules_next_tick() {
        let mut ticker = FrameTicker::new(Duration::from_millis(5));
        thread::sleep(Duration::from_millis(6));
        assert!(ticker.due());
        ticker.advance();
        assert!(!ticker.due());
    }

    #[test]
    fn advance_resets_when_far_behind() {
        let mut ticker = FrameTicker::new(Duration::from_millis(1));
        thread::sleep(Duration::from_millis(20));
        ticker.advance();
        // A burst of overdue ticks would leave this immediately due again;
        // the reset schedules one full interval out.
        assert!(ticker.remaining() > Duration::ZERO);
    }

    #[test]
    fn wait_blocks_for_roughly_one_interval() {
        let mut ticker = FrameTicker::new(Duration::from_millis(10));
        let start = Instant::now();
        ticker.wait();
        assert!(start.elapsed() >= Duration::from_millis(8));
    }
}
