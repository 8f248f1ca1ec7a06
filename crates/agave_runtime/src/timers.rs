//! Cooperative timer queue.
//!
//! [`TimerQueue`] is the host timer primitive behind `throttle` and `repeat`: one-shot timeouts and
//! periodic intervals, each identified by a [`TimerId`] that can be cleared.
//!
//! ## Notes
//! - Each queue owns a [`LocalSet`]. Timers are tasks spawned onto it, so callbacks may capture
//!   non-`Send` state (like [`crate::Value`]) and scheduling works from anywhere, including outside
//!   a runtime.
//! - Timers only make progress while the queue is driven with [`TimerQueue::run_until`] or
//!   [`TimerQueue::block_on`] on a runtime with the time driver enabled.
//! - Callbacks fire in timer order on the single local thread; wall-clock exactness is not promised.
//! - Delays below zero (and `NaN`) are treated as zero, delays above [`MAX_DELAY`] saturate, and
//!   interval periods are at least 1ms.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::task::{AbortHandle, LocalSet};
use tokio::time::{Instant, MissedTickBehavior};

/// Longest delay a timer accepts (2^31 - 1 ms, about 24.8 days).
pub const MAX_DELAY: Duration = Duration::from_millis(2_147_483_647);

/// Opaque identity of a scheduled timeout or interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Return the numeric id, as surfaced to dynamic callers.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn from_u64(id: u64) -> Self {
        TimerId(id)
    }
}

/// Shared handle to a queue of pending timers.
///
/// Cloning the handle shares the queue.
#[derive(Clone, Default)]
pub struct TimerQueue {
    inner: Rc<TimerQueueInner>,
}

#[derive(Default)]
struct TimerQueueInner {
    next_id: Cell<u64>,
    pending: RefCell<HashMap<TimerId, AbortHandle>>,
    local: Rc<LocalSet>,
}

impl TimerQueueInner {
    fn allocate(&self) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        TimerId(id)
    }
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` once after `delay`.
    pub fn set_timeout(&self, delay: Duration, callback: impl FnOnce() + 'static) -> TimerId {
        let id = self.inner.allocate();
        let delay = delay.min(MAX_DELAY);
        let deadline = Instant::now() + delay;
        let queue = Rc::downgrade(&self.inner);
        let task = self.inner.local.spawn_local(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(inner) = queue.upgrade() {
                inner.pending.borrow_mut().remove(&id);
            }
            tracing::trace!(timer = id.0, "timeout fired");
            callback();
        });
        self.inner.pending.borrow_mut().insert(id, task.abort_handle());
        tracing::trace!(timer = id.0, delay_ms = delay.as_millis() as u64, "timeout scheduled");
        id
    }

    /// Run `callback` every `period`, starting one period from now, until cleared.
    pub fn set_interval(&self, period: Duration, mut callback: impl FnMut() + 'static) -> TimerId {
        let id = self.inner.allocate();
        let period = period.clamp(Duration::from_millis(1), MAX_DELAY);
        let start = Instant::now() + period;
        let task = self.inner.local.spawn_local(async move {
            let mut ticks = tokio::time::interval_at(start, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                callback();
            }
        });
        self.inner.pending.borrow_mut().insert(id, task.abort_handle());
        tracing::trace!(timer = id.0, period_ms = period.as_millis() as u64, "interval scheduled");
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was never scheduled.
    pub fn clear(&self, id: TimerId) -> bool {
        match self.inner.pending.borrow_mut().remove(&id) {
            Some(handle) => {
                handle.abort();
                tracing::trace!(timer = id.0, "timer cleared");
                true
            }
            None => false,
        }
    }

    /// Return true if `id` is still scheduled.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.inner.pending.borrow().contains_key(&id)
    }

    /// Return the number of scheduled timers.
    pub fn pending_count(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    /// Drive pending timers until `future` completes.
    ///
    /// Must be awaited on a runtime with the time driver enabled.
    pub async fn run_until<F: Future>(&self, future: F) -> F::Output {
        let local = Rc::clone(&self.inner.local);
        local.run_until(future).await
    }

    /// Block on `future` with `runtime`, driving pending timers meanwhile.
    pub fn block_on<F: Future>(&self, runtime: &Runtime, future: F) -> F::Output {
        self.inner.local.block_on(runtime, future)
    }
}

/// Convert a host millisecond count to a [`Duration`].
///
/// Negative and `NaN` counts become zero; counts above [`MAX_DELAY`] saturate.
pub fn duration_from_millis(millis: f64) -> Duration {
    if millis.is_nan() || millis <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(millis / 1000.0).map_or(MAX_DELAY, |d| d.min(MAX_DELAY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn timeout_fires_once_after_delay() {
        let timers = TimerQueue::new();
        timers
            .run_until(async {
                let fired = Rc::new(Cell::new(0));
                let counter = Rc::clone(&fired);
                let id = timers.set_timeout(Duration::from_millis(100), move || counter.set(counter.get() + 1));
                assert!(timers.is_pending(id));

                sleep(Duration::from_millis(50)).await;
                assert_eq!(fired.get(), 0);

                sleep(Duration::from_millis(100)).await;
                assert_eq!(fired.get(), 1);
                assert!(!timers.is_pending(id));
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn cleared_timeout_never_fires() {
        let timers = TimerQueue::new();
        timers
            .run_until(async {
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);
                let id = timers.set_timeout(Duration::from_millis(10), move || flag.set(true));
                assert!(timers.clear(id));
                assert!(!timers.clear(id));

                sleep(Duration::from_millis(50)).await;
                assert!(!fired.get());
                assert_eq!(timers.pending_count(), 0);
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn interval_ticks_until_cleared() {
        let timers = TimerQueue::new();
        timers
            .run_until(async {
                let ticks = Rc::new(Cell::new(0));
                let counter = Rc::clone(&ticks);
                let id = timers.set_interval(Duration::from_millis(100), move || counter.set(counter.get() + 1));

                sleep(Duration::from_millis(350)).await;
                assert_eq!(ticks.get(), 3);

                timers.clear(id);
                sleep(Duration::from_millis(500)).await;
                assert_eq!(ticks.get(), 3);
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn scheduling_outside_the_queue_waits_for_the_driver() {
        let timers = TimerQueue::new();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        timers.set_timeout(Duration::from_millis(10), move || counter.set(counter.get() + 1));

        sleep(Duration::from_millis(50)).await;
        assert_eq!(fired.get(), 0);

        timers.run_until(sleep(Duration::from_millis(1))).await;
        assert_eq!(fired.get(), 1);
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn scheduling_without_a_runtime_does_not_panic() {
        let timers = TimerQueue::new();
        let id = timers.set_interval(Duration::from_millis(100), || {});
        assert!(timers.is_pending(id));
        assert!(timers.clear(id));
    }

    #[test]
    fn duration_from_millis_clamps() {
        assert_eq!(duration_from_millis(-5.0), Duration::ZERO);
        assert_eq!(duration_from_millis(f64::NAN), Duration::ZERO);
        assert_eq!(duration_from_millis(1500.0), Duration::from_millis(1500));
        assert_eq!(duration_from_millis(f64::INFINITY), MAX_DELAY);
        assert_eq!(duration_from_millis(1e15), MAX_DELAY);
    }
}
