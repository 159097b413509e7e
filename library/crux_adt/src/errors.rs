//! Extraction errors for the algebraic containers.
//!
//! Unchecked extraction (`unwrap`, `unwrap_err`, `expect`, `expect_err`)
//! fails when the container holds the other variant. These failures are
//! local and synchronous; callers that want to handle the missing case
//! reach for the `*_or` / `*_or_else` / `map_or*` family instead.
//!
//! # Structured Error Categories
//!
//! `ExtractErrorKind` carries the typed category. Factory functions
//! (e.g., `value_absent()`) are the public construction API and populate
//! both `kind` and `message`.

use thiserror::Error;

/// Result of an unchecked extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Typed category of an extraction failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExtractErrorKind {
    /// `unwrap` on `Maybe::Absent`.
    #[error("called `unwrap` on an `Absent` value")]
    ValueAbsent,

    /// `unwrap` on `Outcome::Failure`.
    #[error("called `unwrap` on a `Failure` value")]
    ValueNotSuccess,

    /// `unwrap_err` on `Outcome::Success`.
    #[error("called `unwrap_err` on a `Success` value")]
    ValueNotFailure,

    /// `expect` / `expect_err` with a caller-supplied message.
    #[error("{message}")]
    ExpectationFailed { message: String },
}

/// Extraction error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExtractError {
    /// Structured error category.
    pub kind: ExtractErrorKind,
    /// Human-readable error message (equals `kind.to_string()`).
    pub message: String,
}

impl ExtractError {
    fn from_kind(kind: ExtractErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Whether this error came from an `expect`-style call.
    #[inline]
    pub fn is_expectation(&self) -> bool {
        matches!(self.kind, ExtractErrorKind::ExpectationFailed { .. })
    }
}

/// `unwrap` was called on an absent value.
#[cold]
pub fn value_absent() -> ExtractError {
    ExtractError::from_kind(ExtractErrorKind::ValueAbsent)
}

/// `unwrap` was called on a failed outcome.
#[cold]
pub fn value_not_success() -> ExtractError {
    ExtractError::from_kind(ExtractErrorKind::ValueNotSuccess)
}

/// `unwrap_err` was called on a successful outcome.
#[cold]
pub fn value_not_failure() -> ExtractError {
    ExtractError::from_kind(ExtractErrorKind::ValueNotFailure)
}

/// `expect`-style extraction failed; carries the caller's message verbatim.
#[cold]
pub fn expectation_failed(message: impl Into<String>) -> ExtractError {
    ExtractError::from_kind(ExtractErrorKind::ExpectationFailed {
        message: message.into(),
    })
}

#[cfg(test)]
mod tests;
