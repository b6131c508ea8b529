//! # Racing Timers
//!
//! Five timers fire after 2h, 5m, 1s, 1h and 1m. Merging them with an or-channel
//! gives a signal that fires after about one second.
//!
//! ## Running This Example
//! ```bash
//! cargo run --example timer_race
//! RUST_LOG=orchan=trace cargo run --example timer_race --features tracing
//! ```
//!
//! ## Expected Output
//! ```text
//! done after 1.00...s (watchers still waiting: 0)
//! ```

use std::time::Duration;

use orchan::{OrChannel, Signal};
use tokio::time::{sleep, Instant};
use tracing_subscriber::{fmt, EnvFilter};

fn sig(after: Duration) -> Signal {
    Signal::from_future(sleep(after))
}

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orchan=info")),
        )
        .init();

    let or = OrChannel::new(|fut| {
        tokio::spawn(fut);
    });

    let start = Instant::now();
    or.wait_for_first([
        sig(Duration::from_secs(2 * 60 * 60)),
        sig(Duration::from_secs(5 * 60)),
        sig(Duration::from_secs(1)),
        sig(Duration::from_secs(60 * 60)),
        sig(Duration::from_secs(60)),
    ])
    .await;
    let elapsed = start.elapsed();

    // Let the watcher tree wind down
    sleep(Duration::from_millis(10)).await;

    println!(
        "done after {:?} (watchers still waiting: {})",
        elapsed,
        or.active_watchers()
    );
}
