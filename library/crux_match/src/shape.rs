//! Shape classification of match subjects and literal payloads.
//!
//! The matching engine never inspects a value's concrete type. It asks the
//! value which of three shapes it has:
//!
//! - `Scalar`: indivisible; compared by equality.
//! - `Record`: named fields; compared field by field.
//! - `Opaque`: neither. Matched only by wildcards and predicates.

use std::fmt;
use std::iter;

use crate::value::Value;

/// Shape of a value as seen by the matcher.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Scalar,
    Record,
    Opaque,
}

/// A type that can be the subject of a [`Matcher`](crate::Matcher).
///
/// Only records need to override `field` and `entries`.
pub trait Shape: PartialEq + fmt::Debug {
    fn kind(&self) -> ShapeKind;

    /// Named field of a record; `None` for a missing field or a non-record.
    fn field(&self, _name: &str) -> Option<&Self> {
        None
    }

    /// Fields of a record, in the record's own iteration order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Self)> + '_> {
        Box::new(iter::empty())
    }

    #[inline]
    fn is_record(&self) -> bool {
        self.kind() == ShapeKind::Record
    }
}

macro_rules! scalar_shape {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Shape for $ty {
                #[inline]
                fn kind(&self) -> ShapeKind {
                    ShapeKind::Scalar
                }
            }
        )*
    };
}

scalar_shape!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

impl Shape for &str {
    #[inline]
    fn kind(&self) -> ShapeKind {
        ShapeKind::Scalar
    }
}

impl Shape for Value {
    fn kind(&self) -> ShapeKind {
        match self {
            Value::Record(_) => ShapeKind::Record,
            Value::List(_) => ShapeKind::Opaque,
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
                ShapeKind::Scalar
            }
        }
    }

    fn field(&self, name: &str) -> Option<&Self> {
        self.get(name)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Self)> + '_> {
        match self {
            Value::Record(fields) => Box::new(fields.iter().map(|(name, v)| (name.as_str(), v))),
            _ => Box::new(iter::empty()),
        }
    }
}

#[cfg(feature = "serde_json")]
impl Shape for serde_json::Value {
    fn kind(&self) -> ShapeKind {
        match self {
            serde_json::Value::Object(_) => ShapeKind::Record,
            serde_json::Value::Array(_) => ShapeKind::Opaque,
            serde_json::Value::Null
            | serde_json::Value::Bool(_)
            | serde_json::Value::Number(_)
            | serde_json::Value::String(_) => ShapeKind::Scalar,
        }
    }

    fn field(&self, name: &str) -> Option<&Self> {
        match self {
            serde_json::Value::Object(map) => map.get(name),
            _ => None,
        }
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Self)> + '_> {
        match self {
            serde_json::Value::Object(map) => {
                Box::new(map.iter().map(|(name, v)| (name.as_str(), v)))
            }
            _ => Box::new(iter::empty()),
        }
    }
}
