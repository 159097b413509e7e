//! Entry point: pick a matcher from the subject's type.
//!
//! `Maybe` and `Outcome` subjects get their specialized two-arm matchers.
//! Any borrowed [`Shape`] gets the generic pattern matcher.

use crux_adt::{Maybe, Outcome};

use crate::matcher::Matcher;
use crate::shape::Shape;
use crate::specialized::{MaybeMatcher, OutcomeMatcher};

/// A value that can start a match.
pub trait Matchable {
    /// Matcher builder producing outputs of type `R`.
    type Builder<R>;

    fn into_matcher<R>(self) -> Self::Builder<R>;
}

impl<T> Matchable for Maybe<T> {
    type Builder<R> = MaybeMatcher<T, R>;

    fn into_matcher<R>(self) -> MaybeMatcher<T, R> {
        MaybeMatcher::new(self)
    }
}

impl<T, E> Matchable for Outcome<T, E> {
    type Builder<R> = OutcomeMatcher<T, E, R>;

    fn into_matcher<R>(self) -> OutcomeMatcher<T, E, R> {
        OutcomeMatcher::new(self)
    }
}

impl<'s, T: Shape> Matchable for &'s T {
    type Builder<R> = Matcher<'s, T, R>;

    fn into_matcher<R>(self) -> Matcher<'s, T, R> {
        Matcher::new(self)
    }
}

/// Start a match on `subject`.
///
/// ```text
/// let label = match_on(&status)
///     .with(200, |_| "ok")
///     .with(p::when(|s: &i32| *s >= 500), |_| "server error")
///     .otherwise(|_| "other")
///     .exhaust()?;
///
/// let port = match_on(config_port).some(|port| port).none(|| 8080);
/// ```
pub fn match_on<S: Matchable, R>(subject: S) -> S::Builder<R> {
    subject.into_matcher()
}
