use super::ThreadAsyncExecutor;

/// Default prefix of worker thread names.
pub(crate) const DEFAULT_THREAD_NAME_PREFIX: &str = "executor-";

/// Builder for configuring and creating a [`ThreadAsyncExecutor`].
///
/// # Examples
///
/// ```rust
/// use async_invoke::ExecutorBuilder;
///
/// let executor = ExecutorBuilder::new()
///     .thread_name_prefix("loader-")
///     .stack_size(512 * 1024)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ExecutorBuilder {
    /// Prefix of worker thread names; the worker number is appended.
    pub(crate) thread_name_prefix: String,

    /// Stack size of worker threads, `None` for the platform default.
    pub(crate) stack_size: Option<usize>,
}

impl ExecutorBuilder {
    /// Creates a new `ExecutorBuilder` with default configuration.
    ///
    /// Workers are named `executor-1`, `executor-2`, ... and use the
    /// platform's default stack size.
    pub fn new() -> Self {
        Self {
            thread_name_prefix: DEFAULT_THREAD_NAME_PREFIX.to_owned(),
            stack_size: None,
        }
    }

    /// Sets the prefix of worker thread names.
    pub fn thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Sets the stack size, in bytes, of worker threads.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn stack_size(mut self, size: usize) -> Self {
        assert!(size > 0, "stack_size must be > 0");

        self.stack_size = Some(size);
        self
    }

    /// Builds the executor with the configured options.
    pub fn build(self) -> ThreadAsyncExecutor {
        ThreadAsyncExecutor::from_builder(self)
    }
}

impl Default for ExecutorBuilder {
    /// Creates a default `ExecutorBuilder`.
    fn default() -> Self {
        Self::new()
    }
}
