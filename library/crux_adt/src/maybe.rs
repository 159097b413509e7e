//! `Maybe<T>`: presence or absence of a value.
//!
//! Every combinator consumes the container and returns a new one; nothing
//! mutates in place, so a `Maybe` can be shared freely between readers.

use crate::errors::{expectation_failed, value_absent, ExtractResult};
use crate::outcome::Outcome;

/// A value that is either `Present` or `Absent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> Maybe<T> {
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Borrow the payload without consuming the container.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Extract the payload.
    ///
    /// Fails with `ValueAbsent` on `Absent`.
    pub fn unwrap(self) -> ExtractResult<T> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(value_absent()),
        }
    }

    /// Extract the payload, failing with `message` on `Absent`.
    pub fn expect(self, message: &str) -> ExtractResult<T> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(expectation_failed(message)),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => f(),
        }
    }

    /// Keep the payload only if `predicate` holds.
    ///
    /// The predicate is never invoked on `Absent`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(value) if predicate(&value) => Maybe::Present(value),
            _ => Maybe::Absent,
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => default,
        }
    }

    /// Fold both variants into a `U`.
    ///
    /// The specialized matcher resolves through this combinator once both
    /// arms are registered.
    pub fn map_or_else<U, D, F>(self, default_fn: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => default_fn(),
        }
    }

    /// `Absent` if `self` is absent, otherwise `other`.
    ///
    /// The payload of `self` is discarded.
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Present(_) => other,
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// `self` if present, otherwise `other`.
    #[must_use]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Present(_) => self,
            Maybe::Absent => other,
        }
    }

    /// `Present` only when exactly one side is present.
    #[must_use]
    pub fn xor(self, other: Maybe<T>) -> Maybe<T> {
        match (self, other) {
            (present @ Maybe::Present(_), Maybe::Absent)
            | (Maybe::Absent, present @ Maybe::Present(_)) => present,
            _ => Maybe::Absent,
        }
    }

    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Maybe::Present(value) => Outcome::Success(value),
            Maybe::Absent => Outcome::Failure(error),
        }
    }

    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Present(value) => Outcome::Success(value),
            Maybe::Absent => Outcome::Failure(f()),
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    #[must_use]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Present(_) => self,
            Maybe::Absent => f(),
        }
    }

    /// Convert into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests;
