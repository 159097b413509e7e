#![allow(clippy::unwrap_used, reason = "tests unwrap for brevity")]

use super::*;
use crate::errors::MatchErrorKind;
use crate::pattern::p;
use crate::value::Value;
use pretty_assertions::assert_eq;

fn positive() -> Pattern<Value> {
    p::when(|v: &Value| v.as_int().is_some_and(|n| n > 0))
}

fn rec<const N: usize>(fields: [(&str, Value); N]) -> Value {
    Value::record(fields)
}

// Top-level patterns

#[test]
fn scalar_literal_uses_equality() {
    assert!(pattern_matches(&p::lit(5), &5).unwrap());
    assert!(!pattern_matches(&p::lit(5), &6).unwrap());
    assert!(pattern_matches(&Pattern::from("message"), &Value::from("message")).unwrap());
    assert!(!pattern_matches(&Pattern::from(200), &Value::from("message")).unwrap());
}

#[test]
fn integer_literal_matches_equal_float() {
    assert!(pattern_matches(&Pattern::from(1), &Value::Float(1.0)).unwrap());
    assert!(!pattern_matches(&Pattern::from(1), &Value::Float(1.5)).unwrap());
    let pattern = p::record([("score", p::lit(3.0))]);
    assert!(pattern_matches(&pattern, &rec([("score", 3.into())])).unwrap());
}

#[test]
fn predicate_is_not_invoked_for_missing_field() {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    let called = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&called);
    let pattern = p::record([(
        "b",
        p::when(move |_: &Value| {
            flag.store(true, Ordering::SeqCst);
            true
        }),
    )]);
    assert!(!pattern_matches(&pattern, &rec([("a", 1.into())])).unwrap());
    assert!(!called.load(Ordering::SeqCst));
}

#[test]
fn wildcard_and_predicate() {
    assert!(pattern_matches(&p::wildcard(), &Value::Null).unwrap());
    assert!(pattern_matches(&p::when(|x: &i32| *x > 0), &1).unwrap());
    assert!(!pattern_matches(&p::when(|x: &i32| *x > 0), &-1).unwrap());
}

#[test]
fn structural_against_scalar_is_non_match() {
    let pattern = p::record([("a", p::wildcard())]);
    assert!(!pattern_matches(&pattern, &Value::Int(1)).unwrap());
}

#[test]
fn record_literal_against_scalar_is_non_match() {
    let literal = Pattern::Literal(rec([("a", Value::int(1))]));
    assert!(!pattern_matches(&literal, &Value::from("a")).unwrap());
}

#[test]
fn opaque_literal_at_top_level_is_non_match() {
    let list = Value::list(vec![Value::int(1)]);
    assert!(!pattern_matches(&Pattern::Literal(list.clone()), &list).unwrap());
}

// Structural patterns

#[test]
fn structural_with_literal_and_predicate() {
    let pattern = p::record([("a", p::lit(1)), ("b", positive())]);
    assert!(pattern_matches(&pattern, &rec([("a", 1.into()), ("b", 3.into())])).unwrap());
    assert!(!pattern_matches(&pattern, &rec([("a", 1.into()), ("b", (-3).into())])).unwrap());
    assert!(!pattern_matches(&pattern, &rec([("a", 2.into()), ("b", 3.into())])).unwrap());
}

#[test]
fn extra_subject_fields_are_ignored() {
    let pattern = p::record([("a", p::lit(1))]);
    let subject = rec([("a", 1.into()), ("z", "extra".into())]);
    assert!(pattern_matches(&pattern, &subject).unwrap());
}

#[test]
fn missing_field_matches_only_wildcard() {
    let subject = rec([("a", 1.into())]);
    assert!(pattern_matches(&p::record([("b", p::wildcard())]), &subject).unwrap());
    assert!(!pattern_matches(&p::record([("b", p::lit(1))]), &subject).unwrap());
    assert!(!pattern_matches(&p::record([("b", p::when(|_: &Value| true))]), &subject).unwrap());
    assert!(!pattern_matches(&p::record([("b", p::record::<Value, &str, _>([]))]), &subject).unwrap());
}

#[test]
fn nested_structural_recurses() {
    let pattern = p::record([("user", p::record([("age", positive())]))]);
    let adult = rec([("user", rec([("age", 30.into())]))]);
    let flat = rec([("user", 30.into())]);
    assert!(pattern_matches(&pattern, &adult).unwrap());
    assert!(!pattern_matches(&pattern, &flat).unwrap());
}

#[test]
fn record_literal_field_is_subset_comparison() {
    let pattern = p::record([("user", Pattern::Literal(rec([("id", 7.into())])))]);
    let subject = rec([("user", rec([("id", 7.into()), ("name", "bo".into())]))]);
    let other = rec([("user", rec([("id", 8.into())]))]);
    assert!(pattern_matches(&pattern, &subject).unwrap());
    assert!(!pattern_matches(&pattern, &other).unwrap());
}

#[test]
fn fields_short_circuit_in_declaration_order() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let pattern = p::record([
        ("a", p::lit(2)),
        (
            "b",
            p::when(move |_: &Value| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            }),
        ),
    ]);
    assert!(!pattern_matches(&pattern, &rec([("a", 1.into()), ("b", 1.into())])).unwrap());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// Unsupported patterns

#[test]
fn opaque_literal_in_field_is_unsupported() {
    let pattern = p::record([("tags", Pattern::Literal(Value::list(vec![])))]);
    let subject = rec([("tags", Value::list(vec![]))]);
    let err = pattern_matches(&pattern, &subject).unwrap_err();
    assert_eq!(
        err.kind,
        MatchErrorKind::UnsupportedPattern {
            pattern: "List([])".to_string(),
            enclosing: "{tags: List([])}".to_string(),
        }
    );
}

#[test]
fn opaque_inside_record_literal_names_the_record() {
    let literal = rec([("tags", Value::list(vec![]))]);
    let pattern = p::record([("meta", Pattern::Literal(literal))]);
    let subject = rec([("meta", rec([("tags", Value::list(vec![]))]))]);
    let err = pattern_matches(&pattern, &subject).unwrap_err();
    assert_eq!(
        err.kind,
        MatchErrorKind::UnsupportedPattern {
            pattern: "List([])".to_string(),
            enclosing: "{\"tags\": List([])}".to_string(),
        }
    );
}

#[test]
fn unsupported_field_after_failure_is_never_reached() {
    let pattern = p::record([
        ("a", p::lit(2)),
        ("tags", Pattern::Literal(Value::list(vec![]))),
    ]);
    let subject = rec([("a", 1.into()), ("tags", Value::list(vec![]))]);
    assert!(!pattern_matches(&pattern, &subject).unwrap());
}
