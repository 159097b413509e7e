//! Crux ADT - algebraic containers for presence and success.
//!
//! This crate provides:
//! - `Maybe<T>`: `Present(T)` or `Absent`
//! - `Outcome<T, E>`: `Success(T)` or `Failure(E)`
//! - `AsyncOutcome<T, E>`: an `Outcome` settled asynchronously, exactly once
//! - Extraction error types (`ExtractError`, `ExtractErrorKind`, `ExtractResult`)
//!
//! # Immutability
//!
//! Every combinator consumes its receiver and returns a fresh container.
//! Containers never mutate in place, so they can be shared between readers
//! without synchronization.
//!
//! # Unchecked extraction
//!
//! `unwrap`/`expect` and their error-channel counterparts return
//! `ExtractResult<T>` instead of panicking. Use the `*_or`, `*_or_else` and
//! `map_or*` combinators when the other variant is an expected case.

mod async_outcome;
mod errors;
mod maybe;
mod outcome;

pub use async_outcome::{to_async_outcome, AsyncOutcome, IntoAsyncOutcome, Settler};
pub use errors::{ExtractError, ExtractErrorKind, ExtractResult};
pub use maybe::Maybe;
pub use outcome::Outcome;

// Re-export error constructors for use by other crates
pub use errors::{expectation_failed, value_absent, value_not_failure, value_not_success};
