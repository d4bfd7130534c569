//! Outcome types - success or failure without panics for control flow.
//!
//! This module provides two outcome shapes:
//!
//! - [`UnitOutcome`]: success or failure of an operation that produces no value
//! - [`ValueOutcome<T>`]: success with a `T`, or failure
//!
//! Both are immutable values with exactly two states fixed at construction.
//! A failure carries an [`ErrorKind`] other than `None` and a non-empty,
//! ordered list of [`Error`]s. Combinators (`bind`, `map` and their async
//! twins) short-circuit on failure: the continuation is never invoked and the
//! original kind and errors are carried forward unchanged.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! let result = ValueOutcome::success(10)
//!     .bind(|x| ValueOutcome::success(x + 5))
//!     .bind(|_| ValueOutcome::<i32>::failure_with(ErrorKind::Validation, "E", "mid"))
//!     .map(|x| x * 2);
//!
//! assert!(result.is_failure());
//! assert_eq!(result.errors(), &[Error::new("E", "mid")]);
//! ```

#[cfg(feature = "async")]
mod async_ops;
#[cfg(feature = "async")]
mod future_ext;
#[cfg(feature = "serde")]
mod serde_impl;
mod unit;
mod value;

#[cfg(feature = "async")]
pub use future_ext::OutcomeFutureExt;
pub use unit::UnitOutcome;
pub use value::ValueOutcome;

use crate::error::{ContractViolation, Error, ErrorKind, OutcomeFailure};

/// The validated failure half shared by both outcome shapes.
///
/// Holding one of these proves the kind is not `None` and the error list is
/// non-empty with no blank field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Failure {
    kind: ErrorKind,
    errors: Vec<Error>,
}

impl Failure {
    /// Validates a kind and an error sequence.
    ///
    /// Entries whose code and message are both blank are dropped; order is
    /// preserved for the rest.
    pub(crate) fn new<I>(kind: ErrorKind, errors: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = Error>,
    {
        if !kind.is_failure() {
            return Err(ContractViolation::NoneKindFailure);
        }

        let mut kept = Vec::new();
        for (index, error) in errors.into_iter().enumerate() {
            if error.is_blank() {
                continue;
            }
            if let Some(field) = error.blank_field() {
                return Err(ContractViolation::BlankErrorField { index, field });
            }
            kept.push(error);
        }

        if kept.is_empty() {
            Err(ContractViolation::EmptyErrors)
        } else {
            Ok(Self { kind, errors: kept })
        }
    }

    /// Concatenates already-validated failures under `ErrorKind::Aggregate`.
    ///
    /// Returns `None` when `failures` is empty.
    pub(crate) fn aggregate<I>(failures: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut sources = 0_usize;
        let errors: Vec<Error> = failures
            .into_iter()
            .inspect(|_| sources += 1)
            .flat_map(|failure| failure.errors)
            .collect();

        if errors.is_empty() {
            return None;
        }
        tracing::debug!(sources, errors = errors.len(), "aggregated failing outcomes");
        Some(Self {
            kind: ErrorKind::Aggregate,
            errors,
        })
    }

    pub(crate) const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub(crate) fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub(crate) fn into_outcome_failure(self) -> OutcomeFailure {
        OutcomeFailure::new(self.kind, self.errors)
    }
}

/// Raises a contract violation as a panic after recording it.
#[track_caller]
pub(crate) fn raise(violation: ContractViolation) -> ! {
    tracing::error!(%violation, "outcome contract violated");
    panic!("{violation}")
}
