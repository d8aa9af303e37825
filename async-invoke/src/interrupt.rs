//! Cooperative thread interruption.
//!
//! Every thread owns an interrupt flag. Another thread holding that thread's
//! [`Interrupter`] can raise the flag; if the target is parked in
//! [`AsyncResult::wait`](crate::AsyncResult::wait) it is woken and the wait
//! returns [`Interrupted`]. The flag is consumed when it aborts a wait.
//!
//! An interrupt raised while the thread is not waiting stays pending and
//! aborts the next wait that would otherwise block.
//!
//! ```rust
//! use async_invoke::interrupt;
//!
//! let me = interrupt::current();
//! me.interrupt();
//! assert!(me.is_interrupted());
//! assert!(interrupt::interrupted());
//! assert!(!me.is_interrupted());
//! ```

use crate::error::Interrupted;

use parking_lot::{Condvar, Mutex};

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

thread_local! {
    /// Interrupt state of the current thread.
    static CURRENT: Arc<InterruptState> = Arc::new(InterruptState::new());
}

/// The mutex/condition-variable pair a waiter parks on.
///
/// Completion and interruption both notify through it while holding
/// the lock, so a waiter that checked its predicate under the lock
/// cannot miss the wakeup.
#[derive(Default)]
pub(crate) struct Signal {
    lock: Mutex<()>,
    condvar: Condvar,
}

impl Signal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Wakes every thread parked on this signal.
    pub(crate) fn notify_all(&self) {
        let _guard = self.lock.lock();
        self.condvar.notify_all();
    }
}

struct InterruptState {
    /// Raised by [`Interrupter::interrupt`], cleared when observed.
    flag: AtomicBool,

    /// The signal the thread is currently parked on, if any.
    parked: Mutex<Option<Arc<Signal>>>,
}

impl InterruptState {
    fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
            parked: Mutex::new(None),
        }
    }
}

/// Clears the parked slot when a wait ends, whichever way it ends.
struct Registration<'a> {
    state: &'a InterruptState,
}

impl<'a> Registration<'a> {
    fn new(state: &'a InterruptState, signal: &Arc<Signal>) -> Self {
        *state.parked.lock() = Some(signal.clone());
        Self { state }
    }
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.state.parked.lock().take();
    }
}

/// A handle that interrupts one particular thread.
///
/// Obtained through [`current`] on the thread to be interrupted, then sent
/// to whichever thread should be able to interrupt it.
#[derive(Clone)]
pub struct Interrupter {
    state: Arc<InterruptState>,
}

impl Interrupter {
    /// Raises the interrupt flag of the target thread and wakes it if it
    /// is currently blocked in a wait.
    pub fn interrupt(&self) {
        self.state.flag.store(true, Ordering::SeqCst);

        // `parked` must be released before the signal lock is taken.
        let parked = self.state.parked.lock().clone();

        if let Some(signal) = parked {
            signal.notify_all();
        }
    }

    /// Whether an interrupt is pending, without clearing it.
    pub fn is_interrupted(&self) -> bool {
        self.state.flag.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for Interrupter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interrupter")
            .field("interrupted", &self.is_interrupted())
            .finish()
    }
}

/// Returns the interrupter of the calling thread.
pub fn current() -> Interrupter {
    CURRENT.with(|state| Interrupter {
        state: state.clone(),
    })
}

/// Reports whether the calling thread has a pending interrupt and clears it.
pub fn interrupted() -> bool {
    CURRENT.with(|state| state.flag.swap(false, Ordering::SeqCst))
}

/// Parks the calling thread on `signal` until `done` returns `true`.
///
/// The predicate is re-checked after every wakeup, so spurious wakeups and
/// notifications meant for other waiters are harmless. Completion wins over
/// a pending interrupt: if `done` already holds, the flag is left alone.
pub(crate) fn park_until(
    signal: &Arc<Signal>,
    done: impl Fn() -> bool,
) -> Result<(), Interrupted> {
    CURRENT.with(|state| {
        let _registration = Registration::new(state, signal);
        let mut guard = signal.lock.lock();

        loop {
            if done() {
                return Ok(());
            }

            if state.flag.swap(false, Ordering::SeqCst) {
                return Err(Interrupted);
            }

            signal.condvar.wait(&mut guard);
        }
    })
}
