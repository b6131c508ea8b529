//! Or-Channel Completion Signals
//!
//! A small, runtime-agnostic combinator that waits for the **first** of many one-shot
//! completion signals, plus the signal type it operates on.
//!
//! # Features
//!
//! - **Payload-free one-shot signals**: [`Signal`] is a cloneable future that resolves once
//!   its event has happened. Every clone observes the same event.
//! - **Any future is a signal**: timers, join handles and shutdown futures become signals
//!   with [`Signal::from_future`].
//! - **Or-channel fan-in**: [`OrChannel::wait_for_first`] derives a signal that fires as
//!   soon as any input fires, for any number of inputs.
//! - **Runtime-agnostic**: watchers are spawned through a caller-provided spawner, so Tokio,
//!   smol, async-std, async-executor and `futures` thread pools all work.
//! - **Bounded fan-in per watcher**: each watcher observes a fixed number of inputs and
//!   nests the rest, so very large fan-ins never build one huge wait set.
//!
//! # Quick Start
//!
//! ```no_run
//! use orchan::{OrChannel, Signal};
//! use std::time::Duration;
//! use tokio::time::{sleep, Instant};
//!
//! # async {
//! let or = OrChannel::new(|fut| {
//!     tokio::spawn(fut);
//! });
//!
//! let after = |secs| Signal::from_future(sleep(Duration::from_secs(secs)));
//!
//! let start = Instant::now();
//! or.wait_for_first([
//!     after(2 * 60 * 60),
//!     after(5 * 60),
//!     after(1),
//!     after(60 * 60),
//!     after(60),
//! ])
//! .await;
//!
//! println!("done after {:?}", start.elapsed()); // about one second
//! # };
//! ```
//!
//! # Core Concepts
//!
//! ## Signal
//!
//! A [`Signal`] is a one-shot event with no payload. Create one with:
//!
//! - [`signal::channel`]: a [`Trigger`] / [`Signal`] pair; call [`Trigger::fire`] to fire it
//! - [`Signal::from_future`]: fires when the wrapped future completes
//! - [`Signal::never`] and [`Signal::fired`]: the two constant signals
//!
//! Dropping a [`Trigger`] without firing abandons its signal, which then never fires.
//!
//! ## OrChannel
//!
//! [`OrChannel`] merges signals. Its behavior depends only on how many inputs it gets:
//!
//! | Inputs | Result | Watchers spawned |
//! |--------|--------|------------------|
//! | 0 | [`Signal::never`] | none |
//! | 1 | the input itself | none |
//! | 2 or more | a new signal | one per tree node |
//!
//! Each watcher observes up to [`OrChannel::fan_in`] inputs directly (3 by default). Inputs
//! beyond that are merged by a nested watcher, which also observes its parent's output so
//! the whole tree exits once any node fires.
//!
//! ## Losing inputs are abandoned, not canceled
//!
//! When the derived signal fires, the producers behind the other inputs keep running. The
//! combinator only stops looking at them. To stop them, give each producer a signal of your
//! own and fire it:
//!
//! ```no_run
//! use futures::StreamExt;
//! use orchan::signal;
//!
//! # async {
//! let (stop, stopped) = signal::channel();
//! let ticks = futures::stream::repeat(()).take_until(stopped);
//!
//! stop.fire();
//! assert_eq!(ticks.count().await, 0);
//! # };
//! ```
//!
//! # Runtime Agnostic
//!
//! The spawner passed to [`OrChannel::new`] decides where watchers run:
//!
//! ```ignore
//! // With Tokio
//! let or = OrChannel::new(|fut| { tokio::spawn(fut); });
//!
//! // With smol
//! let or = OrChannel::new(|fut| smol::spawn(fut).detach());
//!
//! // With async-std
//! let or = OrChannel::new(|fut| { async_std::task::spawn(fut); });
//! ```
//!
//! # Error Handling
//!
//! Waiting cannot fail. The only fallible call is [`OrChannel::with_fan_in`], which returns
//! [`OrResult<T>`] and rejects widths below 2 with [`OrError::InvalidFanIn`].
//!
//! Waiting on the result of `wait_for_first` with no inputs blocks forever. Check for an
//! empty input first, or include a timer signal among the inputs.
//!
//! # Optional Tracing Support
//!
//! Enable the `tracing` feature to get debug and trace events for watcher creation,
//! nesting and firing:
//!
//! ```toml
//! [dependencies]
//! orchan = { version = "0.1", features = ["tracing"] }
//! tracing-subscriber = "0.3"
//! ```
//!
//! ```bash
//! RUST_LOG=orchan=debug cargo run    # watcher creation
//! RUST_LOG=orchan=trace cargo run    # nesting and firing
//! ```
//!
//! With the feature disabled (the default) the instrumentation is compiled out and
//! `tracing` is not linked.

mod error;
mod or_channel;
pub mod signal;

// Public re-exports
pub use error::{OrError, OrResult};
pub use or_channel::{wait_for_first, OrChannel, DEFAULT_FAN_IN};
pub use signal::{Signal, Trigger};
