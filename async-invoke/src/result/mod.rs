//! Result handles for asynchronously executed tasks.
//!
//! This module defines:
//! - the [`AsyncResult`] contract observed by callers,
//! - the [`CompletableResult`] handle that implements it,
//! - the lifecycle [`State`] reported by a handle.
//!
//! A handle moves from `Running` to either `Completed` or `Failed` exactly
//! once. Callers can poll it, block on it, or `.await` it.

pub(crate) mod completable;
pub(crate) mod future;
pub(crate) mod state;

pub use completable::CompletableResult;
pub use state::State;

use crate::error::{AsyncError, Interrupted};

/// The observable side of a task submitted to an executor.
pub trait AsyncResult {
    /// The value produced by a successful task.
    type Output;

    /// The error type a task may return.
    type Error;

    /// Whether the task has finished, successfully or not.
    ///
    /// Never blocks.
    fn is_completed(&self) -> bool;

    /// Returns the task's value.
    ///
    /// # Errors
    ///
    /// - [`AsyncError::NotReady`] while the task is still running.
    /// - [`AsyncError::TaskFailed`] if the task failed, carrying the cause.
    ///
    /// Once the task has finished, every call returns the same outcome.
    fn value(&self) -> Result<Self::Output, AsyncError<Self::Error>>;

    /// Blocks the calling thread until the task has finished.
    ///
    /// Returns immediately if it already has.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] if the calling thread is interrupted through
    /// [`interrupt`](crate::interrupt) while waiting. The handle is not
    /// affected and the wait can be retried.
    fn wait(&self) -> Result<(), Interrupted>;
}
