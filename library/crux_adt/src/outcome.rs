//! `Outcome<T, E>`: success or failure of a computation.
//!
//! Mirrors [`Maybe`] with `Success`/`Failure` in place of
//! `Present`/`Absent`, plus the error-channel combinators (`map_err`,
//! `unwrap_err`, `expect_err`) and the projections onto `Maybe`.

use crate::errors::{expectation_failed, value_not_failure, value_not_success, ExtractResult};
use crate::maybe::Maybe;

/// The result of a computation: `Success(T)` or `Failure(E)`.
///
/// `E` is unconstrained; an `Outcome` may itself be an error payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Extract the success value; fails with `ValueNotSuccess`.
    pub fn unwrap(self) -> ExtractResult<T> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(_) => Err(value_not_success()),
        }
    }

    /// Extract the failure value; fails with `ValueNotFailure`.
    pub fn unwrap_err(self) -> ExtractResult<E> {
        match self {
            Outcome::Success(_) => Err(value_not_failure()),
            Outcome::Failure(error) => Ok(error),
        }
    }

    pub fn expect(self, message: &str) -> ExtractResult<T> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(_) => Err(expectation_failed(message)),
        }
    }

    pub fn expect_err(self, message: &str) -> ExtractResult<E> {
        match self {
            Outcome::Success(_) => Err(expectation_failed(message)),
            Outcome::Failure(error) => Ok(error),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Extract the success value or compute one from the error.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(_) => default,
        }
    }

    /// Fold both variants into a `U`; `default_fn` receives the error.
    pub fn map_or_else<U, D, F>(self, default_fn: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => default_fn(error),
        }
    }

    /// Project the success channel onto `Maybe`.
    pub fn ok_to_maybe(self) -> Maybe<T> {
        match self {
            Outcome::Success(value) => Maybe::Present(value),
            Outcome::Failure(_) => Maybe::Absent,
        }
    }

    /// Project the failure channel onto `Maybe`.
    pub fn err_to_maybe(self) -> Maybe<E> {
        match self {
            Outcome::Success(_) => Maybe::Absent,
            Outcome::Failure(error) => Maybe::Present(error),
        }
    }

    /// `Failure(self_error)` if `self` failed, otherwise `other`.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => other,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// `Success(self_value)` if `self` succeeded, otherwise `other`.
    pub fn or<G>(self, other: Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => other,
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    /// Convert into the standard library's `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
