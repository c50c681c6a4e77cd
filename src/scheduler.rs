use std::time::{Duration, Instant};

/// Fixed-cadence redraw driver. Each due deadline yields exactly one tick;
/// the next deadline restarts from the current instant, so frames missed
/// during a stall are dropped rather than replayed.
pub struct FrameScheduler {
    interval: Duration,
    next_tick: Instant,
}

impl FrameScheduler {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    /// Returns true when a tick is due and schedules the following one.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        if now >= self.next_tick {
            self.next_tick = now + self.interval;
            true
        } else {
            false
        }
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(16);

    #[test]
    fn not_due_before_first_interval() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(INTERVAL, start);
        assert!(!scheduler.tick_due(start));
        assert!(!scheduler.tick_due(start + Duration::from_millis(15)));
    }

    #[test]
    fn due_once_per_interval() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(INTERVAL, start);
        let wakeup = start + INTERVAL;
        assert!(scheduler.tick_due(wakeup));
        assert!(!scheduler.tick_due(wakeup));
        assert!(scheduler.tick_due(wakeup + INTERVAL));
    }

    #[test]
    fn stall_yields_a_single_tick() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(INTERVAL, start);
        let late = start + INTERVAL * 10;
        assert!(scheduler.tick_due(late));
        // No catch-up: the missed frames are gone and the next deadline
        // lies one full interval past the late wakeup.
        assert!(!scheduler.tick_due(late));
        assert_eq!(scheduler.next_deadline(), late + INTERVAL);
    }
}
