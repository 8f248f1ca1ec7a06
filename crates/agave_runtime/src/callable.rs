//! Callable operations: `throttle` and `repeat`.
//!
//! Both schedule work on a [`TimerQueue`]; scheduled calls run while the queue is driven.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::timers::{TimerId, TimerQueue};
use crate::value::{Callable, Value};

/// A throttled wrapper around a callable.
///
/// Each call (re)starts a single pending delay. Without `immediate`, only the trailing call fires,
/// with the arguments of the most recent call. With `immediate`, the first call of a burst fires
/// synchronously and the trailing call is suppressed.
#[derive(Clone)]
pub struct Throttled {
    state: Rc<ThrottleState>,
    timers: TimerQueue,
}

// Held by the pending timer task, so it must not own the queue.
struct ThrottleState {
    func: Callable,
    wait: Duration,
    immediate: bool,
    pending: Cell<Option<TimerId>>,
    last_args: RefCell<Vec<Value>>,
}

/// Wrap `func` so that bursts of calls collapse into one invocation.
pub fn throttle(timers: &TimerQueue, func: Callable, wait: Duration, immediate: bool) -> Throttled {
    Throttled {
        state: Rc::new(ThrottleState {
            func,
            wait,
            immediate,
            pending: Cell::new(None),
            last_args: RefCell::new(Vec::new()),
        }),
        timers: timers.clone(),
    }
}

impl Throttled {
    /// Call the wrapper.
    ///
    /// Returns the wrapped function's result when it fires on the leading edge, `undefined`
    /// otherwise.
    pub fn call(&self, args: &[Value]) -> Value {
        let state = &self.state;
        let call_now = state.immediate && state.pending.get().is_none();
        if let Some(id) = state.pending.take() {
            self.timers.clear(id);
        }
        *state.last_args.borrow_mut() = args.to_vec();

        let trailing = Rc::clone(state);
        let id = self.timers.set_timeout(state.wait, move || {
            trailing.pending.set(None);
            if !trailing.immediate {
                let args = trailing.last_args.take();
                trailing.func.call(&args);
            }
        });
        state.pending.set(Some(id));

        if call_now { state.func.call(args) } else { Value::Undefined }
    }

    /// Return true while a delay is pending.
    pub fn is_pending(&self) -> bool {
        self.state.pending.get().is_some()
    }

    /// Expose the wrapper as a dynamic callable.
    pub fn into_callable(self) -> Callable {
        Callable::new(move |args| self.call(args))
    }
}

/// Invoke `func` with `args` every `interval` until the returned timer is cleared.
///
/// With `leading_edge`, `func` is also invoked once synchronously before the first tick.
pub fn repeat(timers: &TimerQueue, func: Callable, args: Vec<Value>, interval: Duration, leading_edge: bool) -> TimerId {
    if leading_edge {
        func.call(&args);
    }
    timers.set_interval(interval, move || {
        func.call(&args);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn recorder() -> (Callable, Rc<RefCell<Vec<Vec<Value>>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let func = Callable::new(move |args| {
            sink.borrow_mut().push(args.to_vec());
            Value::from(args.len() as f64)
        });
        (func, calls)
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn trailing_call_uses_last_arguments() {
        let timers = TimerQueue::new();
        timers
            .run_until(async {
                let (func, calls) = recorder();
                let wrapper = throttle(&timers, func, Duration::from_millis(100), false);

                for i in 1..=3 {
                    assert_eq!(wrapper.call(&[Value::from(i)]), Value::Undefined);
                    sleep(Duration::from_millis(50)).await;
                }
                assert!(calls.borrow().is_empty());

                // The last call was 50ms ago; the delay elapses 50ms from now.
                sleep(Duration::from_millis(49)).await;
                assert!(calls.borrow().is_empty());
                sleep(Duration::from_millis(2)).await;
                assert_eq!(*calls.borrow(), vec![vec![Value::from(3)]]);
                assert!(!wrapper.is_pending());
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn immediate_fires_on_leading_edge_only() {
        let timers = TimerQueue::new();
        timers
            .run_until(async {
                let (func, calls) = recorder();
                let wrapper = throttle(&timers, func, Duration::from_millis(100), true);

                assert_eq!(wrapper.call(&[Value::from("a")]), Value::from(1));
                sleep(Duration::from_millis(50)).await;
                assert_eq!(wrapper.call(&[Value::from("b")]), Value::Undefined);
                sleep(Duration::from_millis(200)).await;
                assert_eq!(calls.borrow().len(), 1);

                // A new burst after the delay fires again.
                wrapper.call(&[Value::from("c")]);
                assert_eq!(calls.borrow().len(), 2);
                assert_eq!(calls.borrow()[1], vec![Value::from("c")]);
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn trailing_call_fires_after_wrapper_is_dropped() {
        let timers = TimerQueue::new();
        timers
            .run_until(async {
                let (func, calls) = recorder();
                throttle(&timers, func, Duration::from_millis(10), false).call(&[]);
                sleep(Duration::from_millis(20)).await;
                assert_eq!(calls.borrow().len(), 1);
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn repeat_with_leading_edge_until_cleared() {
        let timers = TimerQueue::new();
        timers
            .run_until(async {
                let (func, calls) = recorder();
                let id = repeat(&timers, func, vec![Value::from(7)], Duration::from_millis(100), true);
                assert_eq!(calls.borrow().len(), 1);

                sleep(Duration::from_millis(250)).await;
                assert_eq!(calls.borrow().len(), 3);
                assert!(calls.borrow().iter().all(|args| *args == vec![Value::from(7)]));

                assert!(timers.clear(id));
                sleep(Duration::from_millis(500)).await;
                assert_eq!(calls.borrow().len(), 3);
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn repeat_without_leading_edge_waits_one_interval() {
        let timers = TimerQueue::new();
        timers
            .run_until(async {
                let (func, calls) = recorder();
                let id = repeat(&timers, func, Vec::new(), Duration::from_millis(100), false);
                assert!(calls.borrow().is_empty());
                sleep(Duration::from_millis(150)).await;
                assert_eq!(calls.borrow().len(), 1);
                timers.clear(id);
            })
            .await;
    }

    #[test]
    fn scheduling_without_a_runtime_does_not_panic() {
        let timers = TimerQueue::new();
        let (func, calls) = recorder();
        let id = repeat(&timers, func.clone(), Vec::new(), Duration::from_millis(100), true);
        assert_eq!(calls.borrow().len(), 1);
        assert!(timers.clear(id));

        let wrapper = throttle(&timers, func, Duration::from_millis(100), false);
        assert_eq!(wrapper.call(&[]), Value::Undefined);
        assert!(wrapper.is_pending());
    }
}
