use crate::error::Failure;

/// A single-shot completion notification.
///
/// The callback runs on the worker thread right after the outcome has been
/// recorded. Until it returns, the handle still reports itself as running,
/// so [`wait`](crate::AsyncResult::wait) and
/// [`end_process`](crate::AsyncExecutor::end_process) never return ahead of
/// it. It is invoked exactly once per task with either the value or the
/// failure, never both.
///
/// A slow callback only delays the worker that completes it. A panicking
/// callback is caught and logged.
///
/// Any `Fn(Result<&T, &Failure<E>>) + Send` closure is a callback. Wrapping
/// it in [`callback_fn`] lets the compiler infer the argument type:
///
/// ```rust
/// use async_invoke::{AsyncExecutor, ThreadAsyncExecutor, callback_fn};
///
/// let executor = ThreadAsyncExecutor::new();
/// let handle = executor.start_process_with_callback(
///     || Ok::<_, String>(7),
///     callback_fn(|outcome| assert_eq!(outcome.ok(), Some(&7))),
/// );
/// assert_eq!(executor.end_process(&handle).unwrap(), 7);
/// ```
pub trait AsyncCallback<T, E>: Send {
    /// Called once the task has finished.
    fn on_complete(&self, outcome: Result<&T, &Failure<E>>);
}

impl<T, E, F> AsyncCallback<T, E> for F
where
    F: Fn(Result<&T, &Failure<E>>) + Send,
{
    fn on_complete(&self, outcome: Result<&T, &Failure<E>>) {
        self(outcome)
    }
}

/// An owned, type-erased callback as stored by a result handle.
pub type BoxCallback<T, E> = Box<dyn AsyncCallback<T, E> + 'static>;

/// Builds a callback from a closure.
///
/// Closures passed straight to
/// [`start_process_with_callback`](crate::AsyncExecutor::start_process_with_callback)
/// need their argument type spelled out; going through this function does not.
pub fn callback_fn<T, E, F>(f: F) -> F
where
    F: Fn(Result<&T, &Failure<E>>) + Send,
{
    f
}
