//! Matchers specialized for `Maybe` and `Outcome`.
//!
//! These are typestate builders. Registering one arm yields a builder that
//! holds the pending handler; registering the opposite arm evaluates the
//! subject through its own `map_or_else` and returns the output directly.
//! A builder with only one arm has no output, so forgetting an arm is a
//! compile error rather than a runtime one.
//!
//! Registering the same arm twice replaces the pending handler.

use std::marker::PhantomData;

use crux_adt::{Maybe, Outcome};

/// Matcher over a `Maybe<T>` with no arm registered.
#[must_use = "a matcher does nothing until both arms are registered"]
pub struct MaybeMatcher<T, R> {
    subject: Maybe<T>,
    output: PhantomData<fn() -> R>,
}

/// `MaybeMatcher` holding the `some` arm.
#[must_use = "register the `none` arm to evaluate"]
pub struct MaybeSomeArm<T, R, F> {
    subject: Maybe<T>,
    on_some: F,
    output: PhantomData<fn() -> R>,
}

/// `MaybeMatcher` holding the `none` arm.
#[must_use = "register the `some` arm to evaluate"]
pub struct MaybeNoneArm<T, R, G> {
    subject: Maybe<T>,
    on_none: G,
    output: PhantomData<fn() -> R>,
}

impl<T, R> MaybeMatcher<T, R> {
    pub fn new(subject: Maybe<T>) -> Self {
        MaybeMatcher {
            subject,
            output: PhantomData,
        }
    }

    pub fn some<F>(self, on_some: F) -> MaybeSomeArm<T, R, F>
    where
        F: FnOnce(T) -> R,
    {
        MaybeSomeArm {
            subject: self.subject,
            on_some,
            output: PhantomData,
        }
    }

    pub fn none<G>(self, on_none: G) -> MaybeNoneArm<T, R, G>
    where
        G: FnOnce() -> R,
    {
        MaybeNoneArm {
            subject: self.subject,
            on_none,
            output: PhantomData,
        }
    }
}

impl<T, R, F> MaybeSomeArm<T, R, F>
where
    F: FnOnce(T) -> R,
{
    /// Replace the pending `some` handler.
    pub fn some<F2>(self, on_some: F2) -> MaybeSomeArm<T, R, F2>
    where
        F2: FnOnce(T) -> R,
    {
        MaybeSomeArm {
            subject: self.subject,
            on_some,
            output: PhantomData,
        }
    }

    /// Complete the match.
    pub fn none<G>(self, on_none: G) -> R
    where
        G: FnOnce() -> R,
    {
        tracing::trace!(present = self.subject.is_present(), "maybe matched");
        self.subject.map_or_else(on_none, self.on_some)
    }
}

impl<T, R, G> MaybeNoneArm<T, R, G>
where
    G: FnOnce() -> R,
{
    /// Replace the pending `none` handler.
    pub fn none<G2>(self, on_none: G2) -> MaybeNoneArm<T, R, G2>
    where
        G2: FnOnce() -> R,
    {
        MaybeNoneArm {
            subject: self.subject,
            on_none,
            output: PhantomData,
        }
    }

    /// Complete the match.
    pub fn some<F>(self, on_some: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        tracing::trace!(present = self.subject.is_present(), "maybe matched");
        self.subject.map_or_else(self.on_none, on_some)
    }
}

/// Matcher over an `Outcome<T, E>` with no arm registered.
#[must_use = "a matcher does nothing until both arms are registered"]
pub struct OutcomeMatcher<T, E, R> {
    subject: Outcome<T, E>,
    output: PhantomData<fn() -> R>,
}

/// `OutcomeMatcher` holding the `ok` arm.
#[must_use = "register the `err` arm to evaluate"]
pub struct OutcomeOkArm<T, E, R, F> {
    subject: Outcome<T, E>,
    on_ok: F,
    output: PhantomData<fn() -> R>,
}

/// `OutcomeMatcher` holding the `err` arm.
#[must_use = "register the `ok` arm to evaluate"]
pub struct OutcomeErrArm<T, E, R, G> {
    subject: Outcome<T, E>,
    on_err: G,
    output: PhantomData<fn() -> R>,
}

impl<T, E, R> OutcomeMatcher<T, E, R> {
    pub fn new(subject: Outcome<T, E>) -> Self {
        OutcomeMatcher {
            subject,
            output: PhantomData,
        }
    }

    pub fn ok<F>(self, on_ok: F) -> OutcomeOkArm<T, E, R, F>
    where
        F: FnOnce(T) -> R,
    {
        OutcomeOkArm {
            subject: self.subject,
            on_ok,
            output: PhantomData,
        }
    }

    pub fn err<G>(self, on_err: G) -> OutcomeErrArm<T, E, R, G>
    where
        G: FnOnce(E) -> R,
    {
        OutcomeErrArm {
            subject: self.subject,
            on_err,
            output: PhantomData,
        }
    }
}

impl<T, E, R, F> OutcomeOkArm<T, E, R, F>
where
    F: FnOnce(T) -> R,
{
    /// Replace the pending `ok` handler.
    pub fn ok<F2>(self, on_ok: F2) -> OutcomeOkArm<T, E, R, F2>
    where
        F2: FnOnce(T) -> R,
    {
        OutcomeOkArm {
            subject: self.subject,
            on_ok,
            output: PhantomData,
        }
    }

    /// Complete the match.
    pub fn err<G>(self, on_err: G) -> R
    where
        G: FnOnce(E) -> R,
    {
        tracing::trace!(success = self.subject.is_success(), "outcome matched");
        self.subject.map_or_else(on_err, self.on_ok)
    }
}

impl<T, E, R, G> OutcomeErrArm<T, E, R, G>
where
    G: FnOnce(E) -> R,
{
    /// Replace the pending `err` handler.
    pub fn err<G2>(self, on_err: G2) -> OutcomeErrArm<T, E, R, G2>
    where
        G2: FnOnce(E) -> R,
    {
        OutcomeErrArm {
            subject: self.subject,
            on_err,
            output: PhantomData,
        }
    }

    /// Complete the match.
    pub fn ok<F>(self, on_ok: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        tracing::trace!(success = self.subject.is_success(), "outcome matched");
        self.subject.map_or_else(self.on_err, on_ok)
    }
}
