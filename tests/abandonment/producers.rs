//! Producers behind losing inputs run to completion on their own

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::common::{counted_timer, tokio_or, wait_idle};
use orchan::signal;

#[tokio::test(start_paused = true)]
async fn test_losing_producers_keep_running() {
    let or = tokio_or();
    let finished = Arc::new(AtomicUsize::new(0));

    let derived = or.wait_for_first([
        counted_timer(Duration::from_secs(10), &finished),
        counted_timer(Duration::from_secs(1), &finished),
        counted_timer(Duration::from_secs(5), &finished),
        counted_timer(Duration::from_secs(20), &finished),
    ]);

    derived.await;
    assert_eq!(finished.load(Ordering::SeqCst), 1);

    // Nothing told the other producers to stop
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(finished.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_watchers_exit_even_if_losers_never_fire() {
    let or = tokio_or();
    let (winner, won) = signal::channel();
    let (loser_triggers, losers): (Vec<_>, Vec<_>) = (0..9).map(|_| signal::channel()).unzip();

    let derived = or.wait_for_first(losers.into_iter().chain(std::iter::once(won)));
    winner.fire();
    derived.await;

    assert!(wait_idle(&or, Duration::from_secs(5)).await);

    // Every watcher has let go of the losing signals
    assert_eq!(loser_triggers.len(), 9);
    assert!(loser_triggers.iter().all(|t| t.is_abandoned()));
}

#[tokio::test]
async fn test_caller_cancels_losers_with_own_signal() {
    let or = tokio_or();
    let (stop, stopped) = signal::channel();
    let cancelled = Arc::new(AtomicUsize::new(0));

    let mut inputs = Vec::new();
    let mut handles = Vec::new();
    for millis in [5u64, 10_000, 20_000] {
        let stopped = stopped.clone();
        let cancelled = Arc::clone(&cancelled);
        let (done, finished) = signal::channel();

        handles.push(tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(millis)) => done.fire(),
                _ = stopped => {
                    cancelled.fetch_add(1, Ordering::SeqCst);
                }
            }
        }));
        inputs.push(finished);
    }

    or.wait_for_first(inputs).await;
    stop.fire();

    for handle in handles {
        handle.await.unwrap();
    }
    assert_eq!(cancelled.load(Ordering::SeqCst), 2);
}
