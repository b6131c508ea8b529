//! The or-channel combinator.
//!
//! Merges any number of completion signals into one derived signal that fires as
//! soon as the first input fires. Inputs beyond the fan-in width are folded into a
//! nested derived signal, giving a small-arity merge tree with one watcher task
//! per internal node.
//!
//! Uses an atomic counter to report how many watchers are still alive.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use futures::future::{self, BoxFuture};
use futures::FutureExt;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::error::{OrError, OrResult};
use crate::signal::{self, Signal};

/// Number of signals each watcher observes directly before nesting the rest.
pub const DEFAULT_FAN_IN: usize = 3;

type Spawner = Arc<dyn Fn(BoxFuture<'static, ()>) + Send + Sync>;

// Keeps the live-watcher count accurate even if the executor drops a watcher
// without running it to completion.
struct WatcherGuard {
    count: Arc<AtomicUsize>,
}

impl WatcherGuard {
    fn new(count: &Arc<AtomicUsize>) -> Self {
        count.fetch_add(1, Ordering::SeqCst);
        Self {
            count: Arc::clone(count),
        }
    }
}

impl Drop for WatcherGuard {
    fn drop(&mut self) {
        let _remaining = self.count.fetch_sub(1, Ordering::SeqCst) - 1;

        #[cfg(feature = "tracing")]
        trace!(remaining = _remaining, "watcher exited");
    }
}

/// Wait for the first of many completion signals.
///
/// An `OrChannel` owns a spawner for the async runtime in use and a fan-in width.
/// It is cheap to clone; clones share the spawner and the watcher count.
///
/// # Workflow
///
/// 1. Create a combinator with [`OrChannel::new`], passing a spawner
/// 2. Optionally change the fan-in width with [`OrChannel::with_fan_in`]
/// 3. Merge signals with [`OrChannel::wait_for_first`]
/// 4. Await the derived [`Signal`]
///
/// # Examples
///
/// ```no_run
/// use orchan::{OrChannel, Signal};
/// use std::time::Duration;
/// use tokio::time::sleep;
///
/// # async {
/// let or = OrChannel::new(|fut| {
///     tokio::spawn(fut);
/// });
///
/// let after = |d| Signal::from_future(sleep(d));
/// let first = or.wait_for_first([
///     after(Duration::from_secs(7200)),
///     after(Duration::from_secs(300)),
///     after(Duration::from_secs(1)),
///     after(Duration::from_secs(3600)),
///     after(Duration::from_secs(60)),
/// ]);
///
/// first.await; // resolves after about one second
/// # };
/// ```
///
/// # Losing inputs
///
/// Nothing is propagated to the producers of inputs that did not win. Their
/// signals are simply no longer observed. Callers that need to stop those
/// producers must hand them a signal of their own and fire it.
#[derive(Clone)]
pub struct OrChannel {
    spawner: Spawner,
    fan_in: usize,
    watchers: Arc<AtomicUsize>,
}

impl OrChannel {
    /// Create a combinator that spawns its watchers with `spawner`.
    ///
    /// - Tokio: `|fut| { tokio::spawn(fut); }`
    /// - Smol: `|fut| smol::spawn(fut).detach()`
    /// - Async-std: `|fut| { async_std::task::spawn(fut); }`
    ///
    /// The spawner must run futures concurrently with the caller. An executor
    /// that drives the future to completion inline would block on the first
    /// watcher.
    pub fn new<S>(spawner: S) -> Self
    where
        S: Fn(BoxFuture<'static, ()>) + Send + Sync + 'static,
    {
        #[cfg(feature = "tracing")]
        debug!(fan_in = DEFAULT_FAN_IN, "or-channel created");

        Self {
            spawner: Arc::new(spawner),
            fan_in: DEFAULT_FAN_IN,
            watchers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set how many signals each watcher observes directly.
    ///
    /// Any width of 2 or more gives the same observable behavior; it only
    /// changes the shape of the watcher tree.
    ///
    /// # Errors
    ///
    /// Returns [`OrError::InvalidFanIn`] if `width` is less than 2.
    ///
    /// ```
    /// use orchan::{OrChannel, OrError};
    ///
    /// let or = OrChannel::new(|_fut| {}).with_fan_in(2).unwrap();
    /// assert_eq!(or.fan_in(), 2);
    ///
    /// let err = OrChannel::new(|_fut| {}).with_fan_in(1).unwrap_err();
    /// assert_eq!(err, OrError::InvalidFanIn { width: 1 });
    /// ```
    pub fn with_fan_in(mut self, width: usize) -> OrResult<Self> {
        if width < 2 {
            return Err(OrError::InvalidFanIn { width });
        }
        self.fan_in = width;

        #[cfg(feature = "tracing")]
        debug!(fan_in = width, "or-channel fan-in set");

        Ok(self)
    }

    /// The configured fan-in width.
    pub fn fan_in(&self) -> usize {
        self.fan_in
    }

    /// Number of watcher tasks spawned by this combinator (or its clones) that
    /// have not exited yet.
    pub fn active_watchers(&self) -> usize {
        self.watchers.load(Ordering::SeqCst)
    }

    /// Derive a signal that fires when the first of `signals` fires.
    ///
    /// - No inputs: returns [`Signal::never`]. Awaiting it blocks forever.
    /// - One input: returns that signal itself; nothing is spawned.
    /// - Two or more: spawns a watcher and returns a fresh signal.
    ///
    /// Among inputs that are ready at the same time, which one wins is
    /// unspecified.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn wait_for_first<I>(&self, signals: I) -> Signal
    where
        I: IntoIterator<Item = Signal>,
    {
        let mut signals: Vec<Signal> = signals.into_iter().collect();

        if signals.len() <= 1 {
            #[cfg(feature = "tracing")]
            trace!(input_count = signals.len(), "no watcher needed");

            return signals.pop().unwrap_or_else(Signal::never);
        }

        self.spawn_watcher(signals)
    }

    fn spawn_watcher(&self, mut signals: Vec<Signal>) -> Signal {
        let (trigger, derived) = signal::channel();

        // Inputs past the fan-in width go to a nested node. The nested node also
        // watches this node's output so it exits as soon as this node fires.
        let tail = if signals.len() > self.fan_in {
            let mut tail = signals.split_off(self.fan_in);
            tail.push(derived.clone());
            tail
        } else {
            Vec::new()
        };

        #[cfg(feature = "tracing")]
        debug!(
            direct_inputs = signals.len(),
            nested_inputs = tail.len(),
            fan_in = self.fan_in,
            "spawning watcher"
        );

        let guard = WatcherGuard::new(&self.watchers);
        let node = self.clone();

        // The nested node is built from inside the watcher, so deep trees never
        // recurse on the caller's stack.
        let watcher = async move {
            let _guard = guard;

            if !tail.is_empty() {
                #[cfg(feature = "tracing")]
                trace!(nested_inputs = tail.len(), "creating nested node");

                signals.push(node.wait_for_first(tail));
            }

            let (_, _winner, _) = future::select_all(signals).await;

            #[cfg(feature = "tracing")]
            trace!(winner = _winner, "watcher fired");

            trigger.fire();
        };

        (self.spawner)(watcher.boxed());

        derived
    }
}

impl std::fmt::Debug for OrChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrChannel")
            .field("fan_in", &self.fan_in)
            .field("active_watchers", &self.active_watchers())
            .finish_non_exhaustive()
    }
}

/// Derive a signal that fires when the first of `signals` fires, using a
/// one-off [`OrChannel`] with the default fan-in width.
///
/// ```no_run
/// # use orchan::{signal, wait_for_first};
/// # async {
/// let (stop, stopped) = signal::channel();
/// let (done, finished) = signal::channel();
///
/// let either = wait_for_first([stopped, finished], |fut| {
///     tokio::spawn(fut);
/// });
///
/// stop.fire();
/// either.await;
/// # drop(done);
/// # };
/// ```
pub fn wait_for_first<I, S>(signals: I, spawner: S) -> Signal
where
    I: IntoIterator<Item = Signal>,
    S: Fn(BoxFuture<'static, ()>) + Send + Sync + 'static,
{
    OrChannel::new(spawner).wait_for_first(signals)
}
