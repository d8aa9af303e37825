//! Task executors.
//!
//! This module contains:
//! - [`AsyncExecutor`]: the submission contract,
//! - [`ThreadAsyncExecutor`]: an executor running every task on a fresh thread,
//! - [`ExecutorBuilder`]: configuration of the thread executor.

pub(crate) mod builder;
pub(crate) mod thread;

pub use builder::ExecutorBuilder;
pub use thread::ThreadAsyncExecutor;

use crate::callback::{AsyncCallback, BoxCallback};
use crate::error::AsyncError;
use crate::result::{AsyncResult, CompletableResult};

/// Submits tasks for asynchronous execution.
///
/// Implementors only provide [`spawn_task`](Self::spawn_task); the other
/// operations are expressed in terms of it and of [`AsyncResult`].
pub trait AsyncExecutor {
    /// Starts `task` and returns its result handle without blocking.
    ///
    /// The callback, when present, is invoked exactly once when the task
    /// finishes. A failing task never affects the executor or other tasks;
    /// its failure is only reported through the returned handle.
    fn spawn_task<T, E, F>(
        &self,
        task: F,
        callback: Option<BoxCallback<T, E>>,
    ) -> CompletableResult<T, E>
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
        T: Send + Sync + 'static,
        E: Send + Sync + 'static;

    /// Starts `task` without a completion callback.
    fn start_process<T, E, F>(&self, task: F) -> CompletableResult<T, E>
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
        T: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        self.spawn_task(task, None)
    }

    /// Starts `task` and invokes `callback` once it finishes.
    fn start_process_with_callback<T, E, F, C>(
        &self,
        task: F,
        callback: C,
    ) -> CompletableResult<T, E>
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
        C: AsyncCallback<T, E> + 'static,
        T: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        self.spawn_task(task, Some(Box::new(callback)))
    }

    /// Blocks until `handle` has finished, then returns its value.
    ///
    /// # Errors
    ///
    /// - [`AsyncError::Interrupted`] if the calling thread is interrupted
    ///   while waiting.
    /// - [`AsyncError::TaskFailed`] if the task failed.
    fn end_process<R>(&self, handle: &R) -> Result<R::Output, AsyncError<R::Error>>
    where
        R: AsyncResult,
    {
        if !handle.is_completed() {
            handle.wait()?;
        }

        handle.value()
    }
}
