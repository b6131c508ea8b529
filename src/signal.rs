//! One-shot completion signals.
//!
//! A [`Signal`] is a payload-free event that fires at most once. Every clone of a
//! signal observes the same event, the way many receivers can all see a channel
//! close. Signals come from three places:
//!
//! - [`channel`], which pairs a signal with a [`Trigger`] that fires it
//! - [`Signal::from_future`], which fires when an arbitrary future completes
//!   (a timer, a join handle, a shutdown future)
//! - [`OrChannel::wait_for_first`](crate::OrChannel::wait_for_first), which derives
//!   a signal from several others

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::future::{self, BoxFuture, FusedFuture, Shared};
use futures::FutureExt;

/// A cloneable, awaitable one-shot completion event.
///
/// Awaiting a `Signal` resolves once the underlying event has occurred. Awaiting
/// does not consume the event: clones awaited later resolve immediately.
///
/// # Examples
///
/// ```
/// use orchan::signal;
///
/// let (trigger, done) = signal::channel();
/// assert!(!done.has_fired());
///
/// trigger.fire();
/// assert!(done.has_fired());
/// done.wait_blocking();
/// ```
#[derive(Clone)]
#[must_use = "a signal does nothing unless awaited or passed to a combinator"]
pub struct Signal {
    inner: Shared<BoxFuture<'static, ()>>,
}

impl Signal {
    /// A signal that fires when `fut` completes. The future's output is discarded.
    ///
    /// The future is driven by whoever awaits the signal, so it only makes
    /// progress while some clone is being polled.
    ///
    /// ```no_run
    /// # use orchan::Signal;
    /// # use std::time::Duration;
    /// # async {
    /// let timeout = Signal::from_future(tokio::time::sleep(Duration::from_secs(1)));
    /// timeout.await;
    /// # };
    /// ```
    pub fn from_future<F>(fut: F) -> Self
    where
        F: Future + Send + 'static,
    {
        Self {
            inner: fut.map(|_| ()).boxed().shared(),
        }
    }

    /// A signal that never fires.
    pub fn never() -> Self {
        Self::from_future(future::pending::<()>())
    }

    /// A signal that has already fired.
    pub fn fired() -> Self {
        Self::from_future(future::ready(()))
    }

    /// Check without blocking whether the event has occurred.
    ///
    /// Polls a clone once with a no-op waker, so it also drives
    /// [`Signal::from_future`] signals that nobody else is awaiting.
    pub fn has_fired(&self) -> bool {
        // A handle that already resolved can't be cloned into a pollable one.
        self.inner.is_terminated()
            || self.inner.peek().is_some()
            || self.inner.clone().now_or_never().is_some()
    }

    /// Whether both handles observe the same underlying event.
    pub fn ptr_eq(&self, other: &Signal) -> bool {
        Shared::ptr_eq(&self.inner, &other.inner)
    }

    /// Wait asynchronously for the event. Equivalent to `.await`ing the signal.
    pub async fn wait(self) {
        self.await
    }

    /// Block the current thread until the event has occurred.
    ///
    /// Intended for synchronous callers. Calling this from inside an async task
    /// blocks that executor thread.
    pub fn wait_blocking(self) {
        futures::executor::block_on(self)
    }
}

impl Future for Signal {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        // Once fired, a signal stays fired for every later poll.
        if self.inner.is_terminated() {
            return Poll::Ready(());
        }
        Pin::new(&mut self.inner).poll(cx)
    }
}

impl FusedFuture for Signal {
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}

impl std::fmt::Debug for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field(
                "observed",
                &(self.inner.is_terminated() || self.inner.peek().is_some()),
            )
            .finish()
    }
}

/// The firing half of a signal created by [`channel`].
///
/// Firing consumes the trigger, so the paired signal fires at most once.
/// Dropping a trigger without firing abandons the signal: it never fires.
#[derive(Debug)]
pub struct Trigger {
    tx: oneshot::Sender<()>,
}

impl Trigger {
    /// Fire the paired signal, waking everything waiting on it.
    pub fn fire(self) {
        // Nobody listening is fine; the event still happened.
        let _ = self.tx.send(());
    }

    /// Whether every clone of the paired signal has been dropped.
    pub fn is_abandoned(&self) -> bool {
        self.tx.is_canceled()
    }
}

/// Create a [`Trigger`] and the [`Signal`] it fires.
pub fn channel() -> (Trigger, Signal) {
    let (tx, rx) = oneshot::channel::<()>();

    let signal = Signal::from_future(async move {
        // A dropped trigger means the event will never happen.
        if rx.await.is_err() {
            future::pending::<()>().await;
        }
    });

    (Trigger { tx }, signal)
}
