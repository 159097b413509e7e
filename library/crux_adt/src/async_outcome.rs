//! `AsyncOutcome<T, E>`: an `Outcome` that settles asynchronously, once.
//!
//! # Settlement
//!
//! The settlement cell is a `tokio::sync::oneshot` channel: the producer
//! side is a [`Settler`] whose `succeed`/`fail` consume it, so an outcome is
//! written at most once by construction. The consumer side is wrapped in
//! `futures_util::future::Shared`, which lets any number of clones observe
//! the same settled value without re-running the producing computation.
//!
//! # Observation
//!
//! `AsyncOutcome` is itself a `Future<Output = Outcome<T, E>>`. Awaiting a
//! clone after settlement yields an equal `Outcome` every time. Domain
//! failures settle as `Outcome::Failure`; nothing is raised.
//!
//! There is no cancellation: once built inside a tokio runtime, the
//! underlying computation runs to completion whether or not it is observed.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::future::{BoxFuture, FutureExt, Shared};
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Producer handle for an [`AsyncOutcome`].
///
/// Dropping it without settling leaves the outcome pending forever.
pub struct Settler<T, E> {
    sender: oneshot::Sender<Outcome<T, E>>,
}

impl<T, E> Settler<T, E> {
    /// Settle with `Success(value)`.
    pub fn succeed(self, value: T) {
        self.settle(Outcome::Success(value));
    }

    /// Settle with `Failure(error)`.
    pub fn fail(self, error: E) {
        self.settle(Outcome::Failure(error));
    }

    fn settle(self, outcome: Outcome<T, E>) {
        if self.sender.send(outcome).is_err() {
            // Every observer is gone; the value has nowhere to go.
            tracing::trace!("async outcome settled after all observers were dropped");
        }
    }
}

impl<T, E> fmt::Debug for Settler<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settler")
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

/// An asynchronous, single-resolution `Outcome`.
pub struct AsyncOutcome<T, E> {
    settlement: Shared<BoxFuture<'static, Outcome<T, E>>>,
}

impl<T, E> AsyncOutcome<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Build from a settlement callback.
    ///
    /// `executor` runs immediately and receives the [`Settler`]; it may
    /// settle inline or move the settler into a spawned task.
    pub fn new<F>(executor: F) -> Self
    where
        F: FnOnce(Settler<T, E>),
    {
        let (sender, receiver) = oneshot::channel();
        executor(Settler { sender });
        Self::from_receiver(receiver)
    }

    /// An outcome already settled as `Success(value)`.
    pub fn success(value: T) -> Self {
        Self::new(|settler| settler.succeed(value))
    }

    /// An outcome already settled as `Failure(error)`.
    pub fn failure(error: E) -> Self {
        Self::new(|settler| settler.fail(error))
    }

    /// Adapt a fallible future: `Ok(v)` settles as `Success(v)`, `Err(e)` as
    /// `Failure(e)`.
    ///
    /// Inside a tokio runtime the future is spawned immediately and runs to
    /// completion even if every handle is dropped. Outside a runtime there is
    /// nowhere to spawn it, so it is driven by the first observer instead.
    /// Either way it runs once.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let Ok(handle) = Handle::try_current() else {
            tracing::trace!("no tokio runtime; async outcome settles on first poll");
            return Self {
                settlement: future.map(Outcome::from).boxed().shared(),
            };
        };
        let (sender, receiver) = oneshot::channel();
        let settler = Settler { sender };
        handle.spawn(async move {
            match future.await {
                Ok(value) => settler.succeed(value),
                Err(error) => settler.fail(error),
            }
        });
        Self::from_receiver(receiver)
    }

    fn from_receiver(receiver: oneshot::Receiver<Outcome<T, E>>) -> Self {
        let settlement = async move {
            match receiver.await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!("settler dropped without settling; async outcome stays pending");
                    std::future::pending().await
                }
            }
        };
        Self {
            settlement: settlement.boxed().shared(),
        }
    }

    /// Transform the success value once the source settles.
    ///
    /// Takes `self` so it is not shadowed by `FutureExt::map`; clone first to
    /// keep observing the source.
    pub fn map<U, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        let source = self.settlement;
        AsyncOutcome {
            settlement: async move { source.await.map(f) }.boxed().shared(),
        }
    }

    /// Transform the failure value once the source settles.
    pub fn map_err<G, F>(self, f: F) -> AsyncOutcome<T, G>
    where
        G: Clone + Send + Sync + 'static,
        F: FnOnce(E) -> G + Send + 'static,
    {
        let source = self.settlement;
        AsyncOutcome {
            settlement: async move { source.await.map_err(f) }.boxed().shared(),
        }
    }

    /// Non-blocking peek: `Present` once settled, `Absent` while pending.
    ///
    /// Polls the shared settlement once with a no-op waker, so a future
    /// adapted outside a runtime may start running here.
    pub fn settled(&self) -> Maybe<Outcome<T, E>> {
        self.settlement.clone().now_or_never().into()
    }
}

impl<T, E> Clone for AsyncOutcome<T, E> {
    fn clone(&self) -> Self {
        Self {
            settlement: self.settlement.clone(),
        }
    }
}

impl<T, E> fmt::Debug for AsyncOutcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncOutcome")
            .field("observed", &self.settlement.peek().is_some())
            .finish()
    }
}

impl<T, E> Future for AsyncOutcome<T, E>
where
    T: Clone,
    E: Clone,
{
    type Output = Outcome<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.settlement.poll_unpin(cx)
    }
}

/// Adapt any fallible future into an [`AsyncOutcome`].
pub fn to_async_outcome<Fut, T, E>(future: Fut) -> AsyncOutcome<T, E>
where
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    AsyncOutcome::from_future(future)
}

/// Extension trait: `future.into_async_outcome()`.
///
/// Blanket-implemented for every `Send` future yielding a `Result`.
pub trait IntoAsyncOutcome<T, E> {
    fn into_async_outcome(self) -> AsyncOutcome<T, E>;
}

impl<Fut, T, E> IntoAsyncOutcome<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn into_async_outcome(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_future(self)
    }
}
