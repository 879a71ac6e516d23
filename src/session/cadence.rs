//! Fixed-interval schedules driven by host timestamps.

use crate::core::Timestamp;

/// A repeating deadline: every `interval_ms` after it was armed.
///
/// The host calls `poll` with its current time; each call yields at most
/// one overdue cycle, so a loop over `poll` replays every cycle that
/// elapsed since the last call, in order. `poll_latest` skips straight to
/// the most recent cycle instead, for checks that only care about "now".
///
/// A cycle that would fall past the end of the clock is never scheduled:
/// the cadence disarms itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cadence {
    interval_ms: u64,
    next_due: Option<Timestamp>,
}

impl Cadence {
    /// A disarmed cadence. A zero interval is treated as 1ms.
    #[must_use]
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: if interval_ms == 0 { 1 } else { interval_ms },
            next_due: None,
        }
    }

    /// Schedule the first cycle one interval after `now`.
    pub fn arm(&mut self, now: Timestamp) {
        self.next_due = self.after(now);
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Timestamp> {
        self.next_due
    }

    /// Take the next cycle if it is due by `now`, returning its due time.
    pub fn poll(&mut self, now: Timestamp) -> Option<Timestamp> {
        let due = self.next_due.filter(|&due| due <= now)?;
        self.next_due = self.after(due);
        Some(due)
    }

    /// Take every cycle due by `now` at once, returning the latest one.
    pub fn poll_latest(&mut self, now: Timestamp) -> Option<Timestamp> {
        let due = self.next_due.filter(|&due| due <= now)?;
        let skipped = now.millis_since(due) / self.interval_ms;
        // due + skipped * interval <= now, so this cannot overflow
        let latest = Timestamp(due.as_millis() + skipped * self.interval_ms);
        self.next_due = self.after(latest);
        Some(latest)
    }

    fn after(&self, at: Timestamp) -> Option<Timestamp> {
        at.as_millis().checked_add(self.interval_ms).map(Timestamp)
    }
}
