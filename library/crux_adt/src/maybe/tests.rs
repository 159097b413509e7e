#![allow(clippy::unwrap_used, reason = "tests unwrap for brevity")]

use super::*;
use crate::errors::ExtractErrorKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cell::Cell;

// Extraction

#[test]
fn unwrap_present_returns_payload() {
    assert_eq!(Maybe::Present(7).unwrap(), Ok(7));
}

#[test]
fn unwrap_absent_fails_with_value_absent() {
    let err = Maybe::<i32>::Absent.unwrap().unwrap_err();
    assert_eq!(err.kind, ExtractErrorKind::ValueAbsent);
}

#[test]
fn expect_absent_carries_caller_message() {
    let err = Maybe::<i32>::Absent.expect("need a port").unwrap_err();
    assert_eq!(
        err.kind,
        ExtractErrorKind::ExpectationFailed {
            message: "need a port".to_string()
        }
    );
    assert_eq!(Maybe::Present(1).expect("unused"), Ok(1));
}

#[test]
fn unwrap_or_and_unwrap_or_else() {
    assert_eq!(Maybe::Present(1).unwrap_or(9), 1);
    assert_eq!(Maybe::Absent.unwrap_or(9), 9);

    let called = Cell::new(false);
    let value = Maybe::Present(1).unwrap_or_else(|| {
        called.set(true);
        9
    });
    assert_eq!(value, 1);
    assert!(!called.get());
    assert_eq!(Maybe::Absent.unwrap_or_else(|| 9), 9);
}

// Filter / map family

#[test]
fn filter_keeps_or_drops() {
    assert_eq!(Maybe::Present(4).filter(|v| v % 2 == 0), Maybe::Present(4));
    assert_eq!(Maybe::Present(3).filter(|v| v % 2 == 0), Maybe::Absent);
}

#[test]
fn filter_on_absent_never_invokes_predicate() {
    let called = Cell::new(false);
    let result = Maybe::<i32>::Absent.filter(|_| {
        called.set(true);
        true
    });
    assert_eq!(result, Maybe::Absent);
    assert!(!called.get());
}

#[test]
fn map_family_short_circuits_on_absent() {
    let called = Cell::new(0);
    let bump = |v: i32| {
        called.set(called.get() + 1);
        v * 2
    };
    assert_eq!(Maybe::Absent.map(bump), Maybe::Absent);
    assert_eq!(Maybe::Absent.map_or(0, bump), 0);
    assert_eq!(Maybe::Absent.map_or_else(|| -1, bump), -1);
    assert_eq!(called.get(), 0);

    assert_eq!(Maybe::Present(2).map(bump), Maybe::Present(4));
    assert_eq!(Maybe::Present(2).map_or(0, bump), 4);
    assert_eq!(Maybe::Present(2).map_or_else(|| -1, bump), 4);
    assert_eq!(called.get(), 3);
}

// Boolean combinators

#[test]
fn and_discards_own_payload() {
    assert_eq!(Maybe::Present(1).and(Maybe::Present("w")), Maybe::Present("w"));
    assert_eq!(Maybe::<i32>::Absent.and(Maybe::Present("w")), Maybe::Absent);
    assert_eq!(Maybe::Present(1).and(Maybe::<&str>::Absent), Maybe::Absent);
}

#[test]
fn or_prefers_self() {
    assert_eq!(Maybe::Present(1).or(Maybe::Present(2)), Maybe::Present(1));
    assert_eq!(Maybe::Absent.or(Maybe::Present(2)), Maybe::Present(2));
    assert_eq!(Maybe::<i32>::Absent.or(Maybe::Absent), Maybe::Absent);
}

#[test]
fn xor_requires_exactly_one() {
    assert_eq!(Maybe::Present(1).xor(Maybe::Absent), Maybe::Present(1));
    assert_eq!(Maybe::Absent.xor(Maybe::Present(2)), Maybe::Present(2));
    assert_eq!(Maybe::Present(1).xor(Maybe::Present(2)), Maybe::Absent);
    assert_eq!(Maybe::<i32>::Absent.xor(Maybe::Absent), Maybe::Absent);
}

// Conversions

#[test]
fn ok_or_converts_to_outcome() {
    assert_eq!(Maybe::Present(1).ok_or("e"), Outcome::Success(1));
    assert_eq!(Maybe::<i32>::Absent.ok_or("e"), Outcome::Failure("e"));
    assert_eq!(Maybe::<i32>::Absent.ok_or_else(|| "lazy"), Outcome::Failure("lazy"));
}

#[test]
fn bind_short_circuits() {
    let half = |v: i32| if v % 2 == 0 { Maybe::Present(v / 2) } else { Maybe::Absent };
    assert_eq!(Maybe::Present(8).and_then(half), Maybe::Present(4));
    assert_eq!(Maybe::Present(3).and_then(half), Maybe::Absent);
    assert_eq!(Maybe::Absent.and_then(half), Maybe::Absent);

    assert_eq!(Maybe::Present(1).or_else(|| Maybe::Present(2)), Maybe::Present(1));
    assert_eq!(Maybe::Absent.or_else(|| Maybe::Present(2)), Maybe::Present(2));
}

#[test]
fn std_option_round_trip() {
    assert_eq!(Maybe::from(Some(3)), Maybe::Present(3));
    assert_eq!(Maybe::<i32>::from(None), Maybe::Absent);
    assert_eq!(Maybe::Present(3).into_option(), Some(3));
    assert_eq!(Maybe::<i32>::default(), Maybe::Absent);
}

#[test]
fn as_ref_borrows() {
    let owned = Maybe::Present(String::from("x"));
    assert_eq!(owned.as_ref().map(String::len), Maybe::Present(1));
    assert!(owned.is_present());
}

// Algebraic laws

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    prop::option::of(any::<i32>()).prop_map(Maybe::from)
}

proptest! {
    #[test]
    fn map_preserves_variant(m in maybe_strategy()) {
        prop_assert_eq!(m.map(i64::from).is_absent(), m.is_absent());
    }

    #[test]
    fn xor_is_symmetric(a in maybe_strategy(), b in maybe_strategy()) {
        prop_assert_eq!(a.xor(b), b.xor(a));
        prop_assert_eq!(a.xor(b).is_present(), a.is_present() != b.is_present());
    }

    #[test]
    fn and_then_present_is_application(v in any::<i32>()) {
        let f = |x: i32| Maybe::Present(x.wrapping_add(1));
        prop_assert_eq!(Maybe::Present(v).and_then(f), f(v));
    }
}
