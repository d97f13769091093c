//! Timers and wall-clock time as seen by the meter.
//!
//! The meter never sleeps or spawns anything itself. It asks a [`Scheduler`]
//! for a repeating timer and expects the host to call
//! [`crate::AmpMeter::on_timer`] with the timer's id whenever it fires.

use std::collections::BTreeMap;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Starts and cancels repeating timers on behalf of the meter.
pub trait Scheduler {
    fn start_repeating(&mut self, interval: Duration) -> TimerId;

    /// Cancels future ticks of `id`. Unknown ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

pub trait Clock {
    /// Wall-clock time in milliseconds.
    fn now_millis(&self) -> f64;
}

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    interval: Duration,
    next_due: Instant,
}

/// A [`Scheduler`] for event-loop hosts: the host polls it with the current
/// instant and sleeps until [`IntervalScheduler::next_deadline`].
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    next_id: u64,
    timers: BTreeMap<TimerId, Entry>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.timers.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().map(|entry| entry.next_due).min()
    }

    /// Returns the timers due at `now` and schedules their next tick.
    ///
    /// A timer that fell behind fires once and skips the missed ticks.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerId> {
        let mut due = Vec::new();
        for (id, entry) in &mut self.timers {
            if entry.next_due <= now {
                due.push(*id);
                entry.next_due += entry.interval;
                if entry.next_due <= now {
                    entry.next_due = now + entry.interval;
                }
            }
        }
        due
    }

    fn start_at(&mut self, interval: Duration, now: Instant) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        // A zero interval would fire on every poll forever.
        let interval = interval.max(Duration::from_millis(1));
        self.timers.insert(
            id,
            Entry {
                interval,
                next_due: now + interval,
            },
        );
        tracing::trace!(timer = id.raw(), ?interval, "timer started");
        id
    }
}

impl Scheduler for IntervalScheduler {
    fn start_repeating(&mut self, interval: Duration) -> TimerId {
        self.start_at(interval, Instant::now())
    }

    fn cancel(&mut self, id: TimerId) {
        if self.timers.remove(&id).is_some() {
            tracing::trace!(timer = id.raw(), "timer cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_each_interval() {
        let mut scheduler = IntervalScheduler::new();
        let t0 = Instant::now();
        let id = scheduler.start_at(Duration::from_millis(33), t0);

        assert!(scheduler.poll(t0).is_empty());
        assert_eq!(scheduler.poll(t0 + Duration::from_millis(33)), vec![id]);
        assert!(scheduler.poll(t0 + Duration::from_millis(40)).is_empty());
        assert_eq!(scheduler.poll(t0 + Duration::from_millis(66)), vec![id]);
    }

    #[test]
    fn late_poll_fires_once_and_catches_up() {
        let mut scheduler = IntervalScheduler::new();
        let t0 = Instant::now();
        let id = scheduler.start_at(Duration::from_millis(10), t0);

        let late = t0 + Duration::from_millis(95);
        assert_eq!(scheduler.poll(late), vec![id]);
        assert_eq!(scheduler.next_deadline(), Some(late + Duration::from_millis(10)));
    }

    #[test]
    fn cancel_removes_the_timer() {
        let mut scheduler = IntervalScheduler::new();
        let id = scheduler.start_repeating(Duration::from_millis(5));
        assert_eq!(scheduler.active(), 1);

        scheduler.cancel(id);
        scheduler.cancel(id);
        assert_eq!(scheduler.active(), 0);
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn ids_are_unique() {
        let mut scheduler = IntervalScheduler::new();
        let a = scheduler.start_repeating(Duration::from_millis(5));
        let b = scheduler.start_repeating(Duration::from_millis(5));
        assert_ne!(a, b);
    }

    #[test]
    fn system_clock_is_past_the_epoch() {
        assert!(SystemClock.now_millis() > 0.0);
    }
}
