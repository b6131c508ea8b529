//! # Stopping a Worker with a Signal
//!
//! A worker prints strings from a stream until a `done` signal fires. The signal
//! is the first of a manual stop and a one-second deadline, so the worker exits
//! after about a second even though its input never ends.
//!
//! ## Running This Example
//! ```bash
//! cargo run --example stream_until
//! ```

use std::time::Duration;

use futures::StreamExt;
use orchan::{signal, OrChannel, Signal};
use tokio::time::{interval, sleep};

#[tokio::main]
async fn main() {
    let or = OrChannel::new(|fut| {
        tokio::spawn(fut);
    });

    let (_stop, stopped) = signal::channel();
    let deadline = Signal::from_future(sleep(Duration::from_secs(1)));
    let done = or.wait_for_first([stopped, deadline]);

    let strings = futures::stream::unfold(
        (interval(Duration::from_millis(150)), 0u32),
        |(mut ticks, n)| async move {
            ticks.tick().await;
            Some((format!("message {n}"), (ticks, n + 1)))
        },
    );

    let worker = tokio::spawn(async move {
        let mut strings = Box::pin(strings.take_until(done));
        while let Some(s) = strings.next().await {
            println!("{s}");
        }
        println!("worker exited.");
    });

    worker.await.unwrap();
    println!("Done.");
}
