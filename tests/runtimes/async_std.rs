//! Runtime compatibility tests for async-std

use std::time::{Duration, Instant};

use orchan::{signal, OrChannel, Signal};

fn async_std_or() -> OrChannel {
    OrChannel::new(|fut| {
        async_std::task::spawn(fut);
    })
}

fn sleep_signal(after: Duration) -> Signal {
    Signal::from_future(async_std::task::sleep(after))
}

#[async_std::test]
async fn test_first_sleep_wins_async_std() {
    let or = async_std_or();
    let start = Instant::now();

    or.wait_for_first([
        sleep_signal(Duration::from_secs(10)),
        sleep_signal(Duration::from_millis(20)),
        sleep_signal(Duration::from_secs(5)),
    ])
    .await;

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(20));
    assert!(elapsed < Duration::from_secs(5));
}

#[async_std::test]
async fn test_trigger_from_task_async_std() {
    let or = async_std_or();
    let (trigger, fired) = signal::channel();

    let derived = or.wait_for_first([Signal::never(), Signal::never(), Signal::never(), fired]);

    async_std::task::spawn(async move {
        async_std::task::sleep(Duration::from_millis(10)).await;
        trigger.fire();
    });

    derived.await;
}

#[async_std::test]
async fn test_empty_input_async_std() {
    let or = async_std_or();
    let derived = or.wait_for_first(Vec::new());

    let result = async_std::future::timeout(Duration::from_millis(30), derived).await;
    assert!(result.is_err());
}
