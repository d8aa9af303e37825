use super::AsyncExecutor;
use super::builder::ExecutorBuilder;
use crate::callback::BoxCallback;
use crate::error::Failure;
use crate::result::CompletableResult;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Executor that runs every task on a newly spawned thread.
///
/// There is no pooling and no bound on concurrency: each submitted task
/// gets its own worker thread, named after the executor's prefix and a
/// per-executor counter (`executor-1`, `executor-2`, ...). The number only
/// serves diagnostics; two executors count independently.
///
/// # Examples
///
/// ```rust
/// use async_invoke::{AsyncExecutor, ThreadAsyncExecutor};
///
/// let executor = ThreadAsyncExecutor::new();
/// let handle = executor.start_process(|| Ok::<_, String>(6 * 7));
///
/// assert_eq!(executor.end_process(&handle).unwrap(), 42);
/// ```
#[derive(Debug)]
pub struct ThreadAsyncExecutor {
    /// Number of workers spawned so far.
    next_id: AtomicUsize,

    /// Prefix of worker thread names.
    thread_name_prefix: String,

    /// Stack size of worker threads.
    stack_size: Option<usize>,
}

impl ThreadAsyncExecutor {
    /// Creates an executor with the default configuration.
    pub fn new() -> Self {
        ExecutorBuilder::new().build()
    }

    /// Returns a builder to configure a new executor.
    pub fn builder() -> ExecutorBuilder {
        ExecutorBuilder::new()
    }

    pub(crate) fn from_builder(builder: ExecutorBuilder) -> Self {
        Self {
            next_id: AtomicUsize::new(0),
            thread_name_prefix: builder.thread_name_prefix,
            stack_size: builder.stack_size,
        }
    }

    /// Number of workers this executor has spawned, or tried to spawn.
    pub fn workers_spawned(&self) -> usize {
        self.next_id.load(Ordering::Relaxed)
    }

    fn next_worker_name(&self) -> String {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.thread_name_prefix, id)
    }
}

impl Default for ThreadAsyncExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncExecutor for ThreadAsyncExecutor {
    fn spawn_task<T, E, F>(
        &self,
        task: F,
        callback: Option<BoxCallback<T, E>>,
    ) -> CompletableResult<T, E>
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
        T: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        let result = CompletableResult::new(callback);
        let worker = result.clone();
        let name = self.next_worker_name();

        let mut builder = thread::Builder::new().name(name.clone());
        if let Some(size) = self.stack_size {
            builder = builder.stack_size(size);
        }

        match builder.spawn(move || run(worker, task)) {
            Ok(_) => tracing::debug!(worker = %name, "spawned worker"),
            Err(err) => {
                tracing::error!(worker = %name, error = %err, "failed to spawn worker");
                result.set_failure(Failure::Spawn(Arc::new(err)));
            }
        }

        result
    }
}

/// Body of a worker thread: runs the task and records its outcome.
fn run<T, E, F>(result: CompletableResult<T, E>, task: F)
where
    F: FnOnce() -> Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(task)) {
        Ok(Ok(value)) => {
            tracing::debug!("task completed");
            result.set_value(value);
        }
        Ok(Err(error)) => {
            tracing::debug!("task failed");
            result.set_exception(error);
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(panic = %message, "task panicked");
            result.set_failure(Failure::Panicked(message));
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_owned()
    }
}
