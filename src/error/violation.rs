//! Errors that leave the outcome channel.
//!
//! [`ContractViolation`] reports misuse of the outcome factories.
//! [`OutcomeFailure`] is what a failing outcome collapses into when the
//! caller opts out of further recovery with `ensure_success`.

use std::fmt;

use thiserror::Error as ThisError;

use super::{Error, ErrorKind};

/// Identifies which half of an [`Error`] was blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorField {
    /// The machine-readable code.
    Code,
    /// The human-readable message.
    Message,
}

impl fmt::Display for ErrorField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code => formatter.write_str("code"),
            Self::Message => formatter.write_str("message"),
        }
    }
}

/// A precondition of an outcome factory was violated.
///
/// These signal programmer error, not a domain failure. The panicking
/// factories raise them immediately; the `try_*` factories return them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ContractViolation {
    /// A failure was requested with `ErrorKind::None`.
    #[error("a failing outcome cannot carry ErrorKind::None")]
    NoneKindFailure,
    /// No error remained after dropping blank entries.
    #[error("a failing outcome requires at least one non-blank error")]
    EmptyErrors,
    /// One error had an empty code or message.
    #[error("error at position {index} has a blank {field}")]
    BlankErrorField {
        /// Position of the offending error in the input sequence.
        index: usize,
        /// The blank field.
        field: ErrorField,
    },
    /// A success was requested without a value.
    #[error("a successful outcome requires a value")]
    MissingValue,
    /// Value outcomes were combined from an empty input.
    #[error("cannot combine an empty sequence of value outcomes")]
    EmptyCombine,
}

/// A failing outcome collapsed into a Rust error.
///
/// The message lists every error message of the outcome, joined by `"; "`.
///
/// # Examples
///
/// ```rust
/// use outcomes::prelude::*;
///
/// let outcome: ValueOutcome<i32> =
///     ValueOutcome::failure_with(ErrorKind::Validation, "E", "mid");
/// let failure = outcome.ensure_success().unwrap_err();
/// assert_eq!(failure.kind(), ErrorKind::Validation);
/// assert_eq!(failure.to_string(), "Validation outcome: mid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{kind} outcome: {}", join_messages(.errors))]
pub struct OutcomeFailure {
    kind: ErrorKind,
    errors: Vec<Error>,
}

impl OutcomeFailure {
    pub(crate) const fn new(kind: ErrorKind, errors: Vec<Error>) -> Self {
        Self { kind, errors }
    }

    /// Returns the kind of the failed outcome.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the errors of the failed outcome, in order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the errors, consuming the failure.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

fn join_messages(errors: &[Error]) -> String {
    errors
        .iter()
        .map(Error::message)
        .collect::<Vec<_>>()
        .join("; ")
}
