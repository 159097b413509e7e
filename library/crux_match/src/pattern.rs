//! Pattern vocabulary.
//!
//! Patterns carry an explicit kind tag. The only runtime classification
//! left to the engine is the [`Shape`](crate::Shape) of literal payloads.
//!
//! Build patterns with the [`p`](crate::p) helpers or by conversion: any
//! `T` becomes `Pattern::Literal(T)`, and `Pattern<Value>` also converts
//! from plain Rust scalars.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

type PredicateFn<T> = dyn Fn(&T) -> bool + Send + Sync;

/// A shared boolean test over a subject.
pub struct Predicate<T>(Arc<PredicateFn<T>>);

impl<T> Predicate<T> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Predicate(Arc::new(test))
    }

    #[inline]
    pub fn test(&self, subject: &T) -> bool {
        (self.0)(subject)
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Predicate(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<predicate>")
    }
}

/// A pattern over subjects of type `T`.
pub enum Pattern<T> {
    /// Scalars compare by equality; records compare field by field.
    Literal(T),
    /// Matches anything, including a missing field.
    Wildcard,
    /// Matches when the predicate returns `true`. In field position the
    /// predicate only runs if the field exists; a missing field fails
    /// without invoking it.
    Predicate(Predicate<T>),
    /// Named sub-patterns, tested in declaration order against a record.
    Structural(Vec<(String, Pattern<T>)>),
}

impl<T> Pattern<T> {
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Pattern::Wildcard)
    }
}

impl<T: Clone> Clone for Pattern<T> {
    fn clone(&self) -> Self {
        match self {
            Pattern::Literal(value) => Pattern::Literal(value.clone()),
            Pattern::Wildcard => Pattern::Wildcard,
            Pattern::Predicate(pred) => Pattern::Predicate(pred.clone()),
            Pattern::Structural(fields) => Pattern::Structural(fields.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Pattern<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(value) => write!(f, "Literal({value:?})"),
            Pattern::Wildcard => write!(f, "Wildcard"),
            Pattern::Predicate(pred) => write!(f, "Predicate({pred:?})"),
            Pattern::Structural(fields) => f.debug_tuple("Structural").field(fields).finish(),
        }
    }
}

/// Diagnostic rendering used in `UnsupportedPattern` errors.
impl<T: fmt::Debug> fmt::Display for Pattern<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(value) => write!(f, "{value:?}"),
            Pattern::Wildcard => write!(f, "_"),
            Pattern::Predicate(_) => write!(f, "<predicate>"),
            Pattern::Structural(fields) => {
                write!(f, "{{")?;
                for (i, (name, sub)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {sub}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl<T> From<T> for Pattern<T> {
    fn from(value: T) -> Self {
        Pattern::Literal(value)
    }
}

macro_rules! value_literal_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Pattern<Value> {
                fn from(value: $ty) -> Self {
                    Pattern::Literal(Value::from(value))
                }
            }
        )*
    };
}

value_literal_from!(bool, i32, i64, f64, &str, String);

/// Pattern builders.
pub mod p {
    use super::{Pattern, Predicate};

    /// Matches anything.
    pub fn wildcard<T>() -> Pattern<T> {
        Pattern::Wildcard
    }

    /// Matches when `test` returns `true`.
    pub fn when<T, F>(test: F) -> Pattern<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Pattern::Predicate(Predicate::new(test))
    }

    /// Literal pattern from anything convertible into the subject type.
    pub fn lit<T, V: Into<T>>(value: V) -> Pattern<T> {
        Pattern::Literal(value.into())
    }

    /// Structural pattern; fields are tested in the given order.
    pub fn record<T, K, I>(fields: I) -> Pattern<T>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Pattern<T>)>,
    {
        Pattern::Structural(
            fields
                .into_iter()
                .map(|(name, pattern)| (name.into(), pattern))
                .collect(),
        )
    }
}
