use super::*;
use pretty_assertions::assert_eq;

// Kind → message round-trip

#[test]
fn value_absent_has_correct_kind() {
    let err = value_absent();
    assert_eq!(err.kind, ExtractErrorKind::ValueAbsent);
    assert_eq!(err.message, "called `unwrap` on an `Absent` value");
    assert!(!err.is_expectation());
}

#[test]
fn value_not_success_has_correct_kind() {
    let err = value_not_success();
    assert_eq!(err.kind, ExtractErrorKind::ValueNotSuccess);
    assert_eq!(err.message, "called `unwrap` on a `Failure` value");
}

#[test]
fn value_not_failure_has_correct_kind() {
    let err = value_not_failure();
    assert_eq!(err.kind, ExtractErrorKind::ValueNotFailure);
    assert_eq!(err.message, "called `unwrap_err` on a `Success` value");
}

#[test]
fn expectation_failed_keeps_caller_message() {
    let err = expectation_failed("config must be loaded");
    assert_eq!(
        err.kind,
        ExtractErrorKind::ExpectationFailed {
            message: "config must be loaded".to_string()
        }
    );
    assert_eq!(err.message, "config must be loaded");
    assert!(err.is_expectation());
}

#[test]
fn display_matches_message() {
    assert_eq!(value_absent().to_string(), value_absent().message);
    assert_eq!(expectation_failed("boom").to_string(), "boom");
}
