//! Match errors.
//!
//! A generic matcher fails in two ways: extraction found no matching arm, or
//! a structural pattern contained a sub-pattern the engine cannot classify.
//! The second failure is raised while an arm is registered, held by the
//! matcher, and surfaced by the extraction call.
//!
//! # Structured Error Categories
//!
//! `MatchErrorKind` carries the typed category together with the rendered
//! diagnostics. Factory functions are the construction API.

use thiserror::Error;

/// Result of a matcher extraction.
pub type MatchResult<T> = Result<T, MatchError>;

/// Typed category of a match failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchErrorKind {
    /// Extraction on a matcher that never matched.
    #[error("no pattern matched")]
    NoPatternMatched,

    /// A field sub-pattern that is neither a scalar, a record, a wildcard,
    /// nor a predicate.
    #[error("unsupported pattern: {pattern} at pattern {enclosing}")]
    UnsupportedPattern {
        /// Rendered offending sub-pattern.
        pattern: String,
        /// Rendered pattern that contains it.
        enclosing: String,
    },
}

/// Match error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MatchError {
    /// Structured error category.
    pub kind: MatchErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl MatchError {
    fn from_kind(kind: MatchErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    #[inline]
    pub fn is_no_match(&self) -> bool {
        matches!(self.kind, MatchErrorKind::NoPatternMatched)
    }
}

/// No registered arm matched and no fallback was supplied.
#[cold]
pub fn no_pattern_matched() -> MatchError {
    MatchError::from_kind(MatchErrorKind::NoPatternMatched)
}

/// A sub-pattern could not be classified.
#[cold]
pub fn unsupported_pattern(pattern: impl Into<String>, enclosing: impl Into<String>) -> MatchError {
    MatchError::from_kind(MatchErrorKind::UnsupportedPattern {
        pattern: pattern.into(),
        enclosing: enclosing.into(),
    })
}
