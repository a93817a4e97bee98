//! Tick scheduling abstraction with a virtual-clock and a Tokio implementation

use std::collections::{BTreeSet, HashMap};
use std::pin::Pin;
use std::time::Duration;

use tokio::time::Sleep;

/// Identifies one scheduled tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(u64);

/// Something that can fire a tick after a delay
pub trait Scheduler {
    /// Schedule a tick `delay` from now
    fn schedule(&mut self, delay: Duration) -> TickId;

    /// Cancel a pending tick. Returns false if it already fired or was cancelled.
    fn cancel(&mut self, id: TickId) -> bool;
}

/// Scheduler over a virtual clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    queue: BTreeSet<(Duration, TickId)>,
    due: HashMap<TickId, Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_pending(&self, id: TickId) -> bool {
        self.due.contains_key(&id)
    }

    /// Due time of the earliest pending tick
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.iter().next().map(|(at, _)| *at)
    }

    /// Jump to the earliest pending tick and fire it
    pub fn fire_next(&mut self) -> Option<TickId> {
        let (at, id) = self.queue.pop_first()?;
        self.due.remove(&id);
        self.now = at;
        Some(id)
    }

    /// Move the clock forward by `by`, firing due ticks one at a time in due order.
    ///
    /// The clock sits at each tick's due time while `on_fire` runs, so ticks
    /// it schedules are measured from there and fire within the same window
    /// if they fall inside it. Returns the number of ticks fired.
    pub fn advance<F>(&mut self, by: Duration, mut on_fire: F) -> usize
    where
        F: FnMut(&mut Self, TickId),
    {
        let target = self.now + by;
        let mut fired = 0;
        while self.next_deadline().is_some_and(|at| at <= target) {
            if let Some(id) = self.fire_next() {
                on_fire(self, id);
                fired += 1;
            }
        }
        self.now = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TickId {
        let id = TickId(self.next_id);
        self.next_id += 1;
        let at = self.now + delay;
        self.queue.insert((at, id));
        self.due.insert(id, at);
        id
    }

    fn cancel(&mut self, id: TickId) -> bool {
        match self.due.remove(&id) {
            Some(at) => self.queue.remove(&(at, id)),
            None => false,
        }
    }
}

/// Single-slot scheduler over Tokio timers.
///
/// Holds at most one pending tick; scheduling replaces it. The owner awaits
/// [`TokioScheduler::fired`] to learn when the pending tick is due.
#[derive(Debug, Default)]
pub struct TokioScheduler {
    next_id: u64,
    pending: Option<(TickId, Pin<Box<Sleep>>)>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_tick(&self) -> Option<TickId> {
        self.pending.as_ref().map(|(id, _)| *id)
    }

    /// Wait for the pending tick. Never resolves while nothing is pending.
    ///
    /// Cancel safe: dropping the future leaves the pending tick in place.
    pub async fn fired(&mut self) -> TickId {
        let id = match self.pending.as_mut() {
            Some((id, sleep)) => {
                sleep.as_mut().await;
                *id
            }
            None => std::future::pending().await,
        };
        self.pending = None;
        id
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration) -> TickId {
        let id = TickId(self.next_id);
        self.next_id += 1;
        self.pending = Some((id, Box::pin(tokio::time::sleep(delay))));
        id
    }

    fn cancel(&mut self, id: TickId) -> bool {
        if self.pending_tick() == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut s = ManualScheduler::new();
        let late = s.schedule(ms(300));
        let early = s.schedule(ms(100));
        let mid = s.schedule(ms(200));

        assert_eq!(s.next_deadline(), Some(ms(100)));
        let mut fired = Vec::new();
        let count = s.advance(ms(250), |s, id| fired.push((id, s.now())));
        assert_eq!(count, 2);
        assert_eq!(fired, vec![(early, ms(100)), (mid, ms(200))]);
        assert_eq!(s.now(), ms(250));
        assert_eq!(s.fire_next(), Some(late));
        assert_eq!(s.now(), ms(300));
        assert_eq!(s.fire_next(), None);
    }

    #[test]
    fn test_cancelled_tick_never_fires() {
        let mut s = ManualScheduler::new();
        let id = s.schedule(ms(10));
        assert!(s.cancel(id));
        assert!(!s.is_pending(id));
        assert_eq!(s.advance(ms(100), |_, _| {}), 0);
    }

    #[test]
    fn test_double_cancel_is_noop() {
        let mut s = ManualScheduler::new();
        let id = s.schedule(ms(10));
        assert!(s.cancel(id));
        assert!(!s.cancel(id));
        assert_eq!(s.pending_len(), 0);
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let mut s = ManualScheduler::new();
        let id = s.schedule(ms(10));
        assert_eq!(s.fire_next(), Some(id));
        assert!(!s.cancel(id));
    }

    #[test]
    fn test_advance_fires_ticks_scheduled_inside_window() {
        let mut s = ManualScheduler::new();
        s.schedule(ms(100));
        let mut fired_at = Vec::new();
        // each fired tick reschedules itself 100ms later
        s.advance(ms(350), |s, _| {
            fired_at.push(s.now());
            s.schedule(ms(100));
        });
        assert_eq!(fired_at, vec![ms(100), ms(200), ms(300)]);
        assert_eq!(s.next_deadline(), Some(ms(400)));
        assert_eq!(s.now(), ms(350));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_fires_after_delay() {
        let start = tokio::time::Instant::now();
        let mut s = TokioScheduler::new();
        let id = s.schedule(ms(200));
        assert_eq!(s.fired().await, id);
        assert_eq!(start.elapsed(), ms(200));
        assert_eq!(s.pending_tick(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_cancel() {
        let mut s = TokioScheduler::new();
        let id = s.schedule(ms(200));
        assert!(s.cancel(id));
        assert!(!s.cancel(id));

        let waited = tokio::time::timeout(ms(1000), s.fired()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_stale_cancel_keeps_pending() {
        let mut s = TokioScheduler::new();
        let old = s.schedule(ms(100));
        let new = s.schedule(ms(100));
        assert!(!s.cancel(old));
        assert_eq!(s.fired().await, new);
    }
}
