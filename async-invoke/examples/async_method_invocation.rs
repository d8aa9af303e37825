//! Example: Submitting work, doing something else, and collecting results
//!
//! Run with `RUST_LOG=debug` to see worker spawns and completions.

use async_invoke::{AsyncExecutor, AsyncResult, Failure, ThreadAsyncExecutor, callback_fn};
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn lazy<T: Send + 'static>(value: T, delay: u64) -> impl FnOnce() -> Result<T, String> + Send {
    move || {
        thread::sleep(Duration::from_millis(delay));
        info!(delay, "value computed");
        Ok(value)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_names(true)
        .init();

    let executor = ThreadAsyncExecutor::new();

    let first = executor.start_process(lazy(10, 500));
    let second = executor.start_process(lazy("test", 300));
    let third = executor.start_process(lazy(50u64, 700));
    let fourth = executor.start_process_with_callback(
        lazy(20, 400),
        callback_fn(|outcome: Result<&i32, &Failure<String>>| match outcome {
            Ok(value) => info!(value, "callback"),
            Err(failure) => info!(%failure, "callback"),
        }),
    );
    let fifth = executor.start_process_with_callback(
        || Err::<&str, _>(String::from("no callback value")),
        callback_fn(|outcome: Result<&&str, &Failure<String>>| {
            info!(failed = outcome.is_err(), "callback");
        }),
    );

    // The main thread keeps going while the workers run.
    thread::sleep(Duration::from_millis(350));
    info!("some other work done");

    match executor.end_process(&first) {
        Ok(value) => info!(value, "first result"),
        Err(err) => info!(%err, "first failed"),
    }
    match executor.end_process(&second) {
        Ok(value) => info!(value, "second result"),
        Err(err) => info!(%err, "second failed"),
    }
    match executor.end_process(&third) {
        Ok(value) => info!(value, "third result"),
        Err(err) => info!(%err, "third failed"),
    }

    if fourth.wait().is_ok() {
        info!("fourth completed");
    }
    if fifth.wait().is_ok() {
        info!(failed = fifth.value().is_err(), "fifth completed");
    }
}
