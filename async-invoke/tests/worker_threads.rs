use async_invoke::{AsyncExecutor, ExecutorBuilder, ThreadAsyncExecutor};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

fn current_thread_name() -> Result<String, ()> {
    thread::current().name().map(str::to_owned).ok_or(())
}

#[test]
fn test_worker_threads_default_names() {
    let executor = ThreadAsyncExecutor::new();

    let first = executor.start_process(current_thread_name);
    let second = executor.start_process(current_thread_name);

    assert_eq!(executor.end_process(&first).unwrap(), "executor-1");
    assert_eq!(executor.end_process(&second).unwrap(), "executor-2");
}

#[test]
fn test_worker_threads_custom_prefix() {
    let executor = ExecutorBuilder::new().thread_name_prefix("loader-").build();

    let handle = executor.start_process(current_thread_name);

    assert_eq!(executor.end_process(&handle).unwrap(), "loader-1");
}

#[test]
fn test_worker_threads_counters_are_per_executor() {
    let a = ThreadAsyncExecutor::new();
    let b = ThreadAsyncExecutor::builder().thread_name_prefix("other-").build();

    let a1 = a.start_process(current_thread_name);
    let b1 = b.start_process(current_thread_name);
    let a2 = a.start_process(current_thread_name);

    assert_eq!(a.end_process(&a1).unwrap(), "executor-1");
    assert_eq!(a.end_process(&a2).unwrap(), "executor-2");
    assert_eq!(b.end_process(&b1).unwrap(), "other-1");

    assert_eq!(a.workers_spawned(), 2);
    assert_eq!(b.workers_spawned(), 1);
}

#[test]
fn test_worker_threads_each_task_gets_own_thread() {
    let executor = ThreadAsyncExecutor::new();

    let handles: Vec<_> = (0..20)
        .map(|_| executor.start_process(current_thread_name))
        .collect();

    let names: HashSet<_> = handles
        .iter()
        .map(|handle| executor.end_process(handle).unwrap())
        .collect();

    assert_eq!(names.len(), 20);
    assert_eq!(executor.workers_spawned(), 20);
}

#[test]
fn test_worker_threads_not_the_caller() {
    let executor = ThreadAsyncExecutor::new();
    let caller = thread::current().id();

    let handle = executor.start_process(move || Ok::<_, ()>(thread::current().id() != caller));

    assert!(executor.end_process(&handle).unwrap());
}

#[test]
fn test_worker_threads_stress() {
    let executor = ThreadAsyncExecutor::new();
    let counter = Arc::new(Mutex::new(0));

    let handles: Vec<_> = (0..100)
        .map(|_| {
            let counter = counter.clone();
            executor.start_process(move || {
                *counter.lock().unwrap() += 1;
                Ok::<_, ()>(())
            })
        })
        .collect();

    for handle in &handles {
        executor.end_process(handle).unwrap();
    }

    assert_eq!(*counter.lock().unwrap(), 100);
}

#[test]
fn test_worker_threads_custom_stack_size() {
    let executor = ExecutorBuilder::new().stack_size(256 * 1024).build();

    let handle = executor.start_process(|| Ok::<_, ()>((1..=10).sum::<u32>()));

    assert_eq!(executor.end_process(&handle).unwrap(), 55);
}

#[test]
#[should_panic(expected = "stack_size must be > 0")]
fn test_worker_threads_zero_stack_panics() {
    let _ = ExecutorBuilder::new().stack_size(0).build();
}

#[test]
fn test_worker_threads_nested_submissions() {
    let executor = Arc::new(ThreadAsyncExecutor::new());
    let inner = executor.clone();

    let handle = executor.start_process(move || {
        let nested = inner.start_process(|| Ok::<_, ()>(10));
        inner.end_process(&nested).map(|v| v + 20).map_err(|_| ())
    });

    assert_eq!(executor.end_process(&handle).unwrap(), 30);
    assert_eq!(executor.workers_spawned(), 2);
}
