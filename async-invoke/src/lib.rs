//! # async-invoke
//!
//! **async-invoke** runs method calls asynchronously: submit a task, get a
//! handle back immediately, and observe the outcome whenever it suits you.
//!
//! Each task runs on its own freshly spawned worker thread. Its handle, a
//! [`CompletableResult`], moves exactly once from running to either
//! completed or failed, and can be observed by:
//!
//! - **polling** with [`AsyncResult::is_completed`] and [`AsyncResult::value`],
//! - **blocking** with [`AsyncResult::wait`] or [`AsyncExecutor::end_process`],
//! - **a callback** passed at submission, invoked once on the worker thread,
//! - **`.await`**, since the handle is also a [`Future`].
//!
//! Blocking waits park on a condition variable and can be cut short through
//! the [`interrupt`] module.
//!
//! ## Quick Start
//!
//! ```rust
//! use async_invoke::{AsyncExecutor, AsyncResult, ThreadAsyncExecutor};
//! use std::time::Duration;
//!
//! let executor = ThreadAsyncExecutor::new();
//!
//! let handle = executor.start_process(|| {
//!     std::thread::sleep(Duration::from_millis(10));
//!     Ok::<_, String>("done")
//! });
//!
//! // The caller is free to do other work meanwhile.
//! handle.wait().unwrap();
//! assert_eq!(handle.value().unwrap(), "done");
//! ```
//!
//! ## Modules
//!
//! - [`interrupt`] — Interrupting threads blocked in a wait
//!
//! ## Logging
//!
//! Worker spawns, task outcomes and panics are reported through
//! [`tracing`]. Install any subscriber in the host program to see them.

mod callback;
mod error;
mod executor;
mod result;

pub mod interrupt;

pub use callback::{AsyncCallback, BoxCallback, callback_fn};
pub use error::{AsyncError, Failure, Interrupted};
pub use executor::{AsyncExecutor, ExecutorBuilder, ThreadAsyncExecutor};
pub use result::{AsyncResult, CompletableResult, State};
