use std::time::{Duration, Instant};

/// Tracks when the next tick of a running game is due.
///
/// There is only ever one pending deadline.  Rescheduling replaces it, so a
/// change in tick interval takes effect immediately and no tick fires at the
/// old cadence.  Stopping the ticker forgets the deadline; ticks missed while
/// stopped are never replayed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Ticker {
    next_tick: Option<Instant>,
}

impl Ticker {
    pub(crate) fn new() -> Ticker {
        Ticker::default()
    }

    /// Return the deadline for the next tick, scheduling one `interval` after
    /// `now` if none is pending
    pub(crate) fn deadline(&mut self, now: Instant, interval: Duration) -> Instant {
        *self.next_tick.get_or_insert(now + interval)
    }

    /// Replace any pending deadline with one `interval` after `now`
    pub(crate) fn reschedule(&mut self, now: Instant, interval: Duration) {
        self.next_tick = Some(now + interval);
    }

    pub(crate) fn stop(&mut self) {
        self.next_tick = None;
    }

    #[cfg(test)]
    pub(crate) fn is_scheduled(&self) -> bool {
        self.next_tick.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_is_stable_until_rescheduled() {
        let start = Instant::now();
        let mut ticker = Ticker::new();
        let first = ticker.deadline(start, Duration::from_millis(120));
        assert_eq!(first, start + Duration::from_millis(120));
        let later = start + Duration::from_millis(50);
        assert_eq!(ticker.deadline(later, Duration::from_millis(120)), first);
    }

    #[test]
    fn reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut ticker = Ticker::new();
        ticker.deadline(start, Duration::from_millis(120));
        let fired = start + Duration::from_millis(120);
        ticker.reschedule(fired, Duration::from_millis(96));
        assert_eq!(
            ticker.deadline(fired, Duration::from_millis(120)),
            fired + Duration::from_millis(96)
        );
    }

    #[test]
    fn stop_drops_missed_ticks() {
        let start = Instant::now();
        let mut ticker = Ticker::new();
        ticker.deadline(start, Duration::from_millis(120));
        ticker.stop();
        assert!(!ticker.is_scheduled());
        let resumed = start + Duration::from_secs(10);
        assert_eq!(
            ticker.deadline(resumed, Duration::from_millis(120)),
            resumed + Duration::from_millis(120)
        );
        assert!(ticker.is_scheduled());
    }
}
