//! Property-based tests for outcome invariants.
//!
//! - **Success Law**: `success(v)` succeeds and holds `v`
//! - **Failure Law**: `failure_many(kind, errors)` fails and keeps `errors` in order
//! - **None Law**: a failure with `ErrorKind::None` is always rejected
//! - **Short-circuit Law**: `bind`/`map` on a failure never run the continuation
//! - **Combine Law**: failures aggregate in input order, successes vanish
//! - **Round-trip Law**: unit -> value -> unit is the identity
//! - **Monad Laws**: left identity, right identity and associativity of `bind`

use outcomes::prelude::*;
use proptest::prelude::*;
use static_assertions::assert_impl_all;

assert_impl_all!(Error: Send, Sync, Clone, Eq, std::hash::Hash);
assert_impl_all!(ErrorKind: Send, Sync, Copy);
assert_impl_all!(UnitOutcome: Send, Sync, Clone, Eq);
assert_impl_all!(ValueOutcome<String>: Send, Sync, Clone, Eq);
assert_impl_all!(OutcomeFailure: std::error::Error, Send, Sync);
assert_impl_all!(ContractViolation: std::error::Error, Send, Sync, Copy);

// =============================================================================
// Strategies
// =============================================================================

fn error_strategy() -> impl Strategy<Value = Error> {
    ("[A-Z][A-Za-z]{0,11}", "[a-z][a-z ]{0,23}")
        .prop_map(|(code, message)| Error::new(code, message))
}

fn errors_strategy() -> impl Strategy<Value = Vec<Error>> {
    prop::collection::vec(error_strategy(), 1..6)
}

fn failing_kind_strategy() -> impl Strategy<Value = ErrorKind> {
    prop::sample::select(
        ErrorKind::ALL
            .into_iter()
            .filter(|kind| kind.is_failure())
            .collect::<Vec<_>>(),
    )
}

fn unit_outcome_strategy() -> impl Strategy<Value = UnitOutcome> {
    prop_oneof![
        Just(UnitOutcome::success()),
        (failing_kind_strategy(), errors_strategy())
            .prop_map(|(kind, errors)| UnitOutcome::failure_many(kind, errors)),
    ]
}

fn value_outcome_strategy() -> impl Strategy<Value = ValueOutcome<i32>> {
    prop_oneof![
        any::<i32>().prop_map(ValueOutcome::success),
        (failing_kind_strategy(), errors_strategy())
            .prop_map(|(kind, errors)| ValueOutcome::failure_many(kind, errors)),
    ]
}

fn step(value: i32) -> ValueOutcome<i32> {
    if value % 3 == 0 {
        ValueOutcome::failure_with(ErrorKind::Validation, "DivisibleByThree", "rejected")
    } else {
        ValueOutcome::success(value.wrapping_add(1))
    }
}

fn other_step(value: i32) -> ValueOutcome<i32> {
    if value < 0 {
        ValueOutcome::failure_with(ErrorKind::Invalid, "Negative", "negative input")
    } else {
        ValueOutcome::success(value.wrapping_mul(2))
    }
}

// =============================================================================
// Construction Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_success_holds_value(value in any::<i64>()) {
        let outcome = ValueOutcome::success(value);
        prop_assert!(outcome.is_success());
        prop_assert_eq!(outcome.value(), Some(&value));
        prop_assert_eq!(outcome.kind(), ErrorKind::None);
    }

    #[test]
    fn prop_failure_keeps_errors_in_order(kind in failing_kind_strategy(), errors in errors_strategy()) {
        let outcome = ValueOutcome::<i32>::failure_many(kind, errors.clone());
        prop_assert!(outcome.is_failure());
        prop_assert_eq!(outcome.kind(), kind);
        prop_assert_eq!(outcome.errors(), errors.as_slice());
    }

    #[test]
    fn prop_none_kind_is_rejected(errors in prop::collection::vec(error_strategy(), 0..4)) {
        prop_assert_eq!(
            UnitOutcome::try_failure_many(ErrorKind::None, errors.clone()),
            Err(ContractViolation::NoneKindFailure)
        );
        prop_assert_eq!(
            ValueOutcome::<u8>::try_failure_many(ErrorKind::None, errors),
            Err(ContractViolation::NoneKindFailure)
        );
    }
}

// =============================================================================
// Short-circuit Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_bind_on_failure_never_runs(kind in failing_kind_strategy(), errors in errors_strategy()) {
        let mut called = false;
        let outcome = ValueOutcome::<i32>::failure_many(kind, errors.clone()).bind(|value| {
            called = true;
            ValueOutcome::success(value)
        });
        prop_assert!(!called);
        prop_assert_eq!(outcome.kind(), kind);
        prop_assert_eq!(outcome.errors(), errors.as_slice());
    }

    #[test]
    fn prop_map_on_failure_never_runs(kind in failing_kind_strategy(), errors in errors_strategy()) {
        let mut called = false;
        let outcome = UnitOutcome::failure_many(kind, errors.clone()).map_value(|| {
            called = true;
        });
        prop_assert!(!called);
        prop_assert_eq!(outcome.kind(), kind);
        prop_assert_eq!(outcome.errors(), errors.as_slice());
    }
}

// =============================================================================
// Combine Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_unit_combine_concatenates_failures(outcomes in prop::collection::vec(unit_outcome_strategy(), 0..8)) {
        let expected: Vec<Error> = outcomes
            .iter()
            .flat_map(|outcome| outcome.errors().to_vec())
            .collect();
        let combined = UnitOutcome::combine(outcomes);

        if expected.is_empty() {
            prop_assert_eq!(combined, UnitOutcome::success());
        } else {
            prop_assert_eq!(combined.kind(), ErrorKind::Aggregate);
            prop_assert_eq!(combined.errors(), expected.as_slice());
        }
    }

    #[test]
    fn prop_value_combine_keeps_first_success(outcomes in prop::collection::vec(value_outcome_strategy(), 1..8)) {
        let first_success = outcomes.iter().find_map(|outcome| outcome.value().copied());
        let any_failed = outcomes.iter().any(ValueOutcome::is_failure);
        let combined = ValueOutcome::combine(outcomes);

        if any_failed {
            prop_assert_eq!(combined.kind(), ErrorKind::Aggregate);
        } else {
            prop_assert_eq!(combined.value().copied(), first_success);
        }
    }
}

// =============================================================================
// Round-trip and Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_unit_value_round_trip(outcome in unit_outcome_strategy(), value in any::<u16>()) {
        let round_tripped = outcome.clone().into_value_outcome(value).into_unit_outcome();
        prop_assert_eq!(round_tripped, outcome);
    }

    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        prop_assert_eq!(ValueOutcome::success(value).bind(step), step(value));
    }

    #[test]
    fn prop_right_identity(outcome in value_outcome_strategy()) {
        prop_assert_eq!(outcome.clone().bind(ValueOutcome::success), outcome);
    }

    #[test]
    fn prop_associativity(outcome in value_outcome_strategy()) {
        let left = outcome.clone().bind(step).bind(other_step);
        let right = outcome.bind(|value| step(value).bind(other_step));
        prop_assert_eq!(left, right);
    }
}
