//! Pattern evaluation.
//!
//! `pattern_matches` returns `Ok(false)` for a non-match. The only error is
//! `UnsupportedPattern`, raised when a literal sub-pattern in field
//! position has an opaque payload.

use crate::errors::{unsupported_pattern, MatchResult};
use crate::pattern::Pattern;
use crate::shape::{Shape, ShapeKind};

/// Test a pattern against a subject.
///
/// A pattern whose kind does not fit the subject's shape is a non-match.
#[tracing::instrument(level = "trace", skip_all)]
pub(crate) fn pattern_matches<T: Shape>(pattern: &Pattern<T>, subject: &T) -> MatchResult<bool> {
    match pattern {
        Pattern::Wildcard => Ok(true),
        Pattern::Predicate(pred) => Ok(pred.test(subject)),
        Pattern::Literal(expected) => match expected.kind() {
            ShapeKind::Scalar => Ok(expected == subject),
            ShapeKind::Record => record_literal_matches(expected, subject),
            // No field context to report, so an opaque literal just fails
            ShapeKind::Opaque => Ok(false),
        },
        Pattern::Structural(fields) => {
            if subject.is_record() {
                fields_match(pattern, fields, subject)
            } else {
                Ok(false)
            }
        }
    }
}

/// AND over declared fields, short-circuiting on the first failure.
fn fields_match<T: Shape>(
    enclosing: &Pattern<T>,
    fields: &[(String, Pattern<T>)],
    subject: &T,
) -> MatchResult<bool> {
    for (name, sub) in fields {
        let passed = match subject.field(name) {
            Some(value) => field_matches(enclosing, sub, value)?,
            None => sub.is_wildcard(),
        };
        if !passed {
            tracing::trace!(field = %name, "field rejected");
            return Ok(false);
        }
    }
    Ok(true)
}

fn field_matches<T: Shape>(enclosing: &Pattern<T>, sub: &Pattern<T>, value: &T) -> MatchResult<bool> {
    match sub {
        Pattern::Wildcard => Ok(true),
        Pattern::Predicate(pred) => Ok(pred.test(value)),
        Pattern::Structural(fields) => {
            if value.is_record() {
                fields_match(sub, fields, value)
            } else {
                Ok(false)
            }
        }
        Pattern::Literal(expected) => literal_in_field(expected, value, || enclosing.to_string()),
    }
}

/// Compare a literal sitting in field position.
fn literal_in_field<T: Shape>(
    expected: &T,
    value: &T,
    enclosing: impl FnOnce() -> String,
) -> MatchResult<bool> {
    match expected.kind() {
        ShapeKind::Scalar => Ok(expected == value),
        ShapeKind::Record => record_literal_matches(expected, value),
        ShapeKind::Opaque => {
            let err = unsupported_pattern(format!("{expected:?}"), enclosing());
            tracing::debug!(error = %err, "unsupported sub-pattern");
            Err(err)
        }
    }
}

/// Record literal against a subject: every literal field must be present and
/// match as a literal. Extra subject fields are ignored.
fn record_literal_matches<T: Shape>(expected: &T, subject: &T) -> MatchResult<bool> {
    if !subject.is_record() {
        return Ok(false);
    }
    for (name, field) in expected.entries() {
        let Some(actual) = subject.field(name) else {
            return Ok(false);
        };
        if !literal_in_field(field, actual, || format!("{expected:?}"))? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests;
