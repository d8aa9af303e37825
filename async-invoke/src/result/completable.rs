use super::AsyncResult;
use super::state::{COMPLETED, FAILED, RUNNING, State};
use crate::callback::BoxCallback;
use crate::error::{AsyncError, Failure, Interrupted};
use crate::interrupt::{self, Signal};

use parking_lot::Mutex;

use std::fmt;
use std::mem;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::task::Waker;

/// A result handle that is completed once, by the worker running its task.
///
/// The handle is cheap to clone; every clone observes the same outcome.
/// The worker keeps one clone to record the outcome, the caller keeps
/// the others.
///
/// Completion follows a fixed order:
/// 1. the outcome is stored,
/// 2. the callback, if any, is invoked with that outcome,
/// 3. the state becomes `Completed` or `Failed`,
/// 4. blocked waiters and pending futures are woken.
///
/// Observers only look at the state, so nobody sees the handle as finished
/// before the callback has returned. A terminal state being visible also
/// implies the outcome is visible, which is why
/// [`is_completed`](AsyncResult::is_completed) and
/// [`value`](AsyncResult::value) never take a lock.
pub struct CompletableResult<T, E> {
    inner: Arc<Inner<T, E>>,
}

struct Inner<T, E> {
    /// One of `RUNNING`, `COMPLETED`, `FAILED`.
    state: AtomicUsize,

    /// Written exactly once, before the callback runs and before `state`
    /// leaves `RUNNING`.
    outcome: OnceLock<Result<T, Failure<E>>>,

    /// Taken on completion, so it can only ever fire once.
    callback: Mutex<Option<BoxCallback<T, E>>>,

    /// Parking spot for threads blocked in `wait`.
    signal: Arc<Signal>,

    /// Wakers of futures awaiting this result.
    wakers: Mutex<Vec<Waker>>,
}

impl<T, E> CompletableResult<T, E> {
    /// Creates a running result, optionally bound to a completion callback.
    pub fn new(callback: Option<BoxCallback<T, E>>) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: AtomicUsize::new(RUNNING),
                outcome: OnceLock::new(),
                callback: Mutex::new(callback),
                signal: Arc::new(Signal::new()),
                wakers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> State {
        State::from_raw(self.inner.state.load(Ordering::Acquire))
    }

    /// Borrows the outcome if the task has finished.
    ///
    /// Unlike [`value`](AsyncResult::value), this does not require the value
    /// or error to be `Clone`.
    pub fn outcome(&self) -> Option<Result<&T, &Failure<E>>> {
        if self.inner.state.load(Ordering::Acquire) == RUNNING {
            return None;
        }

        self.inner.outcome.get().map(Result::as_ref)
    }

    /// Returns a copy of the failure if the task failed.
    pub fn failure(&self) -> Option<Failure<E>>
    where
        E: Clone,
    {
        match self.outcome() {
            Some(Err(failure)) => Some(failure.clone()),
            _ => None,
        }
    }

    /// Records a successful outcome.
    ///
    /// Returns `false`, leaving the result untouched, if it was already
    /// completed.
    pub fn set_value(&self, value: T) -> bool {
        self.complete(Ok(value))
    }

    /// Records the error returned by the task.
    ///
    /// Returns `false`, leaving the result untouched, if it was already
    /// completed.
    pub fn set_exception(&self, error: E) -> bool {
        self.complete(Err(Failure::Error(error)))
    }

    /// Records any failure, including panics and spawn errors.
    ///
    /// Returns `false`, leaving the result untouched, if it was already
    /// completed.
    pub fn set_failure(&self, failure: Failure<E>) -> bool {
        self.complete(Err(failure))
    }

    fn complete(&self, outcome: Result<T, Failure<E>>) -> bool {
        let terminal = if outcome.is_ok() { COMPLETED } else { FAILED };

        if self.inner.outcome.set(outcome).is_err() {
            tracing::warn!("result already completed, ignoring second completion");
            return false;
        }

        if let Some(outcome) = self.inner.outcome.get() {
            self.invoke_callback(outcome.as_ref());
        }

        // Published only once the callback has returned.
        self.inner.state.store(terminal, Ordering::Release);

        self.inner.signal.notify_all();

        let wakers = mem::take(&mut *self.inner.wakers.lock());
        for waker in wakers {
            waker.wake();
        }

        true
    }

    fn invoke_callback(&self, outcome: Result<&T, &Failure<E>>) {
        let Some(callback) = self.inner.callback.lock().take() else {
            return;
        };

        // Waiters must still be released if the callback panics.
        if panic::catch_unwind(AssertUnwindSafe(|| callback.on_complete(outcome))).is_err() {
            tracing::error!("completion callback panicked");
        }
    }

    /// Registers a waker to be woken on completion.
    pub(super) fn register_waker(&self, waker: &Waker) {
        let mut wakers = self.inner.wakers.lock();

        if !wakers.iter().any(|w| w.will_wake(waker)) {
            wakers.push(waker.clone());
        }
    }
}

impl<T, E> AsyncResult for CompletableResult<T, E>
where
    T: Clone,
    E: Clone,
{
    type Output = T;
    type Error = E;

    fn is_completed(&self) -> bool {
        self.inner.state.load(Ordering::Acquire) > RUNNING
    }

    fn value(&self) -> Result<T, AsyncError<E>> {
        match self.outcome() {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(failure)) => Err(AsyncError::TaskFailed(failure.clone())),
            None => Err(AsyncError::NotReady),
        }
    }

    fn wait(&self) -> Result<(), Interrupted> {
        if self.is_completed() {
            return Ok(());
        }

        interrupt::park_until(&self.inner.signal, || self.is_completed())
    }
}

impl<T, E> Clone for CompletableResult<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T, E> fmt::Debug for CompletableResult<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletableResult")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
