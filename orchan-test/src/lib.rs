//! Signal and spawner helpers for internal use in orchan tests and benchmarks.
//!
//! This crate is not meant for public use and offers no stability guarantees.

#![cfg(not(tarpaulin_include))]

use std::time::Duration;

use futures::future::BoxFuture;
use orchan::{signal, OrChannel, Signal, Trigger};

/// Spawner that hands watchers to the ambient Tokio runtime.
pub fn tokio_spawner() -> impl Fn(BoxFuture<'static, ()>) + Send + Sync + 'static {
    |fut| {
        tokio::spawn(fut);
    }
}

/// Combinator backed by the ambient Tokio runtime.
pub fn tokio_or() -> OrChannel {
    OrChannel::new(tokio_spawner())
}

/// Signal that fires once `after` has elapsed on the Tokio clock.
pub fn sleep_signal(after: Duration) -> Signal {
    Signal::from_future(tokio::time::sleep(after))
}

/// `count` independent trigger/signal pairs, split into two vectors.
pub fn triggers(count: usize) -> (Vec<Trigger>, Vec<Signal>) {
    (0..count).map(|_| signal::channel()).unzip()
}

/// `count` signals that never fire.
pub fn never(count: usize) -> Vec<Signal> {
    (0..count).map(|_| Signal::never()).collect()
}

/// Poll until every watcher of `or` has exited, or `limit` elapses.
///
/// Returns whether the combinator went idle in time.
pub async fn wait_idle(or: &OrChannel, limit: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + limit;
    while or.active_watchers() != 0 {
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    true
}
