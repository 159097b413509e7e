//! The generic matcher.
//!
//! A `Matcher` borrows its subject and walks through three states:
//!
//! - `Open`: no arm has matched yet; `with` evaluates its pattern.
//! - `Closed(R)`: an arm matched; later arms are ignored.
//! - `Faulted(MatchError)`: an arm raised `UnsupportedPattern`; later arms
//!   are ignored and extraction reports the error.
//!
//! Every chained call consumes the matcher and returns the next state, so
//! at most one handler ever runs.

use crate::errors::{no_pattern_matched, MatchError, MatchResult};
use crate::eval::pattern_matches;
use crate::pattern::Pattern;
use crate::shape::Shape;

#[derive(Debug)]
enum State<R> {
    Open,
    Closed(R),
    Faulted(MatchError),
}

/// First-match-wins matcher over a borrowed subject.
#[derive(Debug)]
#[must_use = "a matcher does nothing until it is extracted"]
pub struct Matcher<'s, T, R> {
    subject: &'s T,
    state: State<R>,
}

impl<'s, T: Shape, R> Matcher<'s, T, R> {
    pub fn new(subject: &'s T) -> Self {
        Matcher {
            subject,
            state: State::Open,
        }
    }

    /// Register an arm. If the matcher is still open and `pattern` matches,
    /// `handler` runs on the subject and its output closes the matcher.
    pub fn with<P, F>(self, pattern: P, handler: F) -> Self
    where
        P: Into<Pattern<T>>,
        F: FnOnce(&'s T) -> R,
    {
        let State::Open = self.state else {
            return self;
        };
        let state = match pattern_matches(&pattern.into(), self.subject) {
            Ok(true) => {
                tracing::trace!("arm matched");
                State::Closed(handler(self.subject))
            }
            Ok(false) => State::Open,
            Err(err) => State::Faulted(err),
        };
        Matcher {
            subject: self.subject,
            state,
        }
    }

    /// Fallback arm: runs `handler` if nothing matched so far.
    pub fn otherwise<F>(self, handler: F) -> Self
    where
        F: FnOnce(&'s T) -> R,
    {
        match self.state {
            State::Open => Matcher {
                subject: self.subject,
                state: State::Closed(handler(self.subject)),
            },
            State::Closed(_) | State::Faulted(_) => self,
        }
    }

    /// Whether an arm has matched.
    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self.state, State::Closed(_))
    }

    /// Extract the first matching arm's output.
    pub fn exhaust(self) -> MatchResult<R> {
        match self.state {
            State::Closed(output) => Ok(output),
            State::Open => {
                tracing::debug!(subject = ?self.subject, "no pattern matched");
                Err(no_pattern_matched())
            }
            State::Faulted(err) => Err(err),
        }
    }

    /// Same as [`exhaust`](Self::exhaust); reads as an assertion at call
    /// sites that expect every case to be covered.
    #[inline]
    pub fn assert_exhaust(self) -> MatchResult<R> {
        self.exhaust()
    }

    /// Extract and transform the output.
    pub fn then<U, F>(self, f: F) -> MatchResult<U>
    where
        F: FnOnce(R) -> U,
    {
        self.exhaust().map(f)
    }
}
