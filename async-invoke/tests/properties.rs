use async_invoke::{AsyncExecutor, AsyncResult, ThreadAsyncExecutor, callback_fn};
use proptest::prelude::*;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn every_handle_reports_its_own_outcome(delays in prop::collection::vec(0u64..15, 1..8)) {
        let executor = ThreadAsyncExecutor::new();

        let handles: Vec<_> = delays
            .iter()
            .copied()
            .enumerate()
            .map(|(index, delay)| {
                executor.start_process(move || {
                    thread::sleep(Duration::from_millis(delay));
                    if index % 3 == 2 { Err(index) } else { Ok(index) }
                })
            })
            .collect();

        for (index, handle) in handles.iter().enumerate() {
            let outcome = executor.end_process(handle);

            if index % 3 == 2 {
                let cause = outcome.unwrap_err().failure().and_then(|f| f.as_error().copied());
                prop_assert_eq!(cause, Some(index));
            } else {
                prop_assert_eq!(outcome.unwrap(), index);
            }
            prop_assert!(handle.is_completed());
        }
    }

    #[test]
    fn callback_fires_exactly_once(value in any::<i64>(), fail in any::<bool>()) {
        let executor = ThreadAsyncExecutor::new();
        let (notify, notified) = mpsc::channel();

        let handle = executor.start_process_with_callback(
            move || if fail { Err(value) } else { Ok(value) },
            callback_fn(move |outcome: Result<&i64, &async_invoke::Failure<i64>>| {
                let _ = notify.send(outcome.map(|v| *v).map_err(|f| f.as_error().copied()));
            }),
        );

        handle.wait().unwrap();

        let first = notified.recv_timeout(Duration::from_secs(5)).unwrap();
        if fail {
            prop_assert_eq!(first, Err(Some(value)));
        } else {
            prop_assert_eq!(first, Ok(value));
        }
        prop_assert!(notified.recv_timeout(Duration::from_millis(20)).is_err());
    }
}
