//! Unit tests for `UnitOutcome`.
//!
//! `UnitOutcome` represents success or failure of an operation that produces
//! no value. Tests cover:
//! - Success and failure construction
//! - Contract violations raised by the failure factories
//! - `combine` aggregation
//! - `bind`/`map` short-circuiting
//! - Conversion to and from `ValueOutcome`

use outcomes::prelude::*;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn success_has_none_kind_and_no_errors() {
    let (succeeded, kind, errors) = UnitOutcome::success().into_parts();
    assert!(succeeded);
    assert_eq!(kind, ErrorKind::None);
    assert!(errors.is_empty());
}

#[rstest]
fn failure_with_builds_one_error() {
    let outcome = UnitOutcome::failure_with(ErrorKind::NotFound, "Missing", "not here");
    assert!(outcome.is_failure());
    assert_eq!(outcome.kind(), ErrorKind::NotFound);
    assert_eq!(outcome.errors(), &[Error::new("Missing", "not here")]);
}

#[rstest]
fn failure_many_preserves_order() {
    let errors = vec![
        Error::new("C", "third"),
        Error::new("A", "first"),
        Error::new("B", "second"),
    ];
    let outcome = UnitOutcome::failure_many(ErrorKind::Validation, errors.clone());
    assert_eq!(outcome.errors(), errors.as_slice());
}

#[rstest]
fn failure_many_drops_blank_entries() {
    let outcome = UnitOutcome::failure_many(
        ErrorKind::Validation,
        vec![Error::new(" ", ""), Error::new("A", "a")],
    );
    assert_eq!(outcome.errors(), &[Error::new("A", "a")]);
}

// =============================================================================
// Contract Violations
// =============================================================================

#[rstest]
#[case(ErrorKind::None, vec![Error::new("A", "a")], ContractViolation::NoneKindFailure)]
#[case(ErrorKind::Validation, vec![], ContractViolation::EmptyErrors)]
#[case(ErrorKind::Validation, vec![Error::new("", "")], ContractViolation::EmptyErrors)]
#[case(
    ErrorKind::Conflict,
    vec![Error::new("", "message")],
    ContractViolation::BlankErrorField { index: 0, field: ErrorField::Code }
)]
fn try_failure_many_reports_violation(
    #[case] kind: ErrorKind,
    #[case] errors: Vec<Error>,
    #[case] expected: ContractViolation,
) {
    assert_eq!(UnitOutcome::try_failure_many(kind, errors), Err(expected));
}

#[rstest]
#[should_panic(expected = "ErrorKind::None")]
fn failure_with_none_kind_panics() {
    let _ = UnitOutcome::failure(ErrorKind::None, Error::new("A", "a"));
}

#[rstest]
#[should_panic(expected = "at least one non-blank error")]
fn failure_many_with_no_errors_panics() {
    let _ = UnitOutcome::failure_many(ErrorKind::Internal, Vec::new());
}

#[rstest]
#[should_panic(expected = "blank message")]
fn failure_with_blank_message_panics() {
    let _ = UnitOutcome::failure_with(ErrorKind::Internal, "Code", "  ");
}

// =============================================================================
// Combine
// =============================================================================

#[rstest]
fn combine_of_nothing_succeeds() {
    assert_eq!(UnitOutcome::combine(Vec::new()), UnitOutcome::success());
}

#[rstest]
fn combine_of_successes_succeeds() {
    let outcome = UnitOutcome::combine([UnitOutcome::success(), UnitOutcome::success()]);
    assert!(outcome.is_success());
}

#[rstest]
fn combine_aggregates_failures_in_input_order() {
    let outcome = UnitOutcome::combine([
        UnitOutcome::success(),
        UnitOutcome::failure_with(ErrorKind::Validation, "A", "a"),
        UnitOutcome::failure_with(ErrorKind::Validation, "B", "b"),
    ]);
    assert_eq!(outcome.kind(), ErrorKind::Aggregate);
    assert_eq!(
        outcome.errors(),
        &[Error::new("A", "a"), Error::new("B", "b")]
    );
}

#[rstest]
fn combine_marks_single_failure_as_aggregate() {
    let outcome = UnitOutcome::combine([
        UnitOutcome::failure_with(ErrorKind::NotFound, "A", "a"),
        UnitOutcome::success(),
    ]);
    assert_eq!(outcome.kind(), ErrorKind::Aggregate);
    assert_eq!(outcome.errors().len(), 1);
}

#[rstest]
fn combine_flattens_multi_error_failures() {
    let outcome = UnitOutcome::combine([
        UnitOutcome::failure_many(
            ErrorKind::Validation,
            vec![Error::new("A", "a"), Error::new("B", "b")],
        ),
        UnitOutcome::failure_with(ErrorKind::Conflict, "C", "c"),
    ]);
    let codes: Vec<&str> = outcome.errors().iter().map(Error::code).collect();
    assert_eq!(codes, vec!["A", "B", "C"]);
}

// =============================================================================
// Bind and Map
// =============================================================================

#[rstest]
fn bind_on_success_returns_continuation_outcome() {
    let outcome = UnitOutcome::success()
        .bind(|| UnitOutcome::failure_with(ErrorKind::Conflict, "Taken", "already taken"));
    assert_eq!(outcome.kind(), ErrorKind::Conflict);
}

#[rstest]
fn bind_on_failure_skips_continuation() {
    let called = Cell::new(false);
    let original = UnitOutcome::failure_with(ErrorKind::Unauthorized, "Denied", "no");
    let outcome = original.clone().bind(|| {
        called.set(true);
        UnitOutcome::success()
    });
    assert!(!called.get());
    assert_eq!(outcome, original);
}

#[rstest]
fn bind_value_on_success_returns_value() {
    let outcome = UnitOutcome::success().bind_value(|| ValueOutcome::success(7));
    assert_eq!(outcome.value(), Some(&7));
}

#[rstest]
fn bind_value_on_failure_carries_errors() {
    let called = Cell::new(false);
    let outcome: ValueOutcome<i32> = UnitOutcome::failure_with(ErrorKind::Internal, "X", "x")
        .bind_value(|| {
            called.set(true);
            ValueOutcome::success(7)
        });
    assert!(!called.get());
    assert_eq!(outcome.kind(), ErrorKind::Internal);
    assert_eq!(outcome.errors(), &[Error::new("X", "x")]);
}

#[rstest]
fn map_value_wraps_result_on_success() {
    let outcome = UnitOutcome::success().map_value(|| "ready");
    assert_eq!(outcome, ValueOutcome::success("ready"));
}

#[rstest]
fn map_value_skips_function_on_failure() {
    let called = Cell::new(false);
    let outcome = UnitOutcome::failure_with(ErrorKind::Invalid, "I", "i").map_value(|| {
        called.set(true);
        1
    });
    assert!(!called.get());
    assert!(outcome.is_failure());
}

// =============================================================================
// Conversion
// =============================================================================

#[rstest]
fn into_value_outcome_lifts_success() {
    let outcome = UnitOutcome::success().into_value_outcome("value");
    assert_eq!(outcome.value(), Some(&"value"));
}

#[rstest]
fn into_value_outcome_keeps_failure() {
    let outcome =
        UnitOutcome::failure_with(ErrorKind::NotFound, "Missing", "gone").into_value_outcome(1);
    assert_eq!(outcome.kind(), ErrorKind::NotFound);
    assert_eq!(outcome.errors(), &[Error::new("Missing", "gone")]);
}

#[rstest]
fn round_trip_through_value_outcome() {
    let success = UnitOutcome::success();
    assert_eq!(success.clone().into_value_outcome(3).into_unit_outcome(), success);

    let failure = UnitOutcome::failure_with(ErrorKind::Conflict, "C", "c");
    assert_eq!(
        failure.clone().into_value_outcome(3).into_unit_outcome(),
        failure
    );
}

#[rstest]
fn from_value_outcome_drops_value() {
    let outcome: UnitOutcome = ValueOutcome::success(10).into();
    assert!(outcome.is_success());
}
