//! Crux Match - structural pattern matching for the Crux containers.
//!
//! This crate provides:
//! - The dynamic subject type (`Value`, `Heap`)
//! - Shape classification (`Shape`, `ShapeKind`)
//! - The pattern vocabulary (`Pattern`, `Predicate`) and its builders (`p`)
//! - The generic first-match-wins `Matcher`
//! - Two-arm matchers for `Maybe` and `Outcome`
//! - The `match_on` entry point and the `Matchable` dispatch trait
//! - Match error types (`MatchError`, `MatchErrorKind`, `MatchResult`)
//!
//! # Evaluation
//!
//! The generic matcher evaluates each arm as it is registered and stops at
//! the first match; later arms are neither tested nor run. Extraction
//! (`exhaust`, `assert_exhaust`, `then`) reports `NoPatternMatched` when no
//! arm matched, or the `UnsupportedPattern` raised during registration.
//!
//! The specialized matchers evaluate once both arms are registered. A
//! missing arm is a type error.

mod dispatch;
mod errors;
mod eval;
mod matcher;
mod pattern;
mod shape;
mod specialized;
mod value;

pub use dispatch::{match_on, Matchable};
pub use errors::{MatchError, MatchErrorKind, MatchResult};
pub use matcher::Matcher;
pub use pattern::{p, Pattern, Predicate};
pub use shape::{Shape, ShapeKind};
pub use specialized::{
    MaybeMatcher, MaybeNoneArm, MaybeSomeArm, OutcomeErrArm, OutcomeMatcher, OutcomeOkArm,
};
pub use value::{Heap, Value};

// Re-export error constructors for use by other crates
pub use errors::{no_pattern_matched, unsupported_pattern};
