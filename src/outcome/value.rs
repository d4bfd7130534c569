//! Outcome of an operation that produces a value.

use super::{Failure, UnitOutcome, raise};
use crate::error::{ContractViolation, Error, ErrorKind, OutcomeFailure};

/// Success carrying a `T`, or failure carrying a kind and errors.
///
/// A successful `ValueOutcome` always holds a value, has kind
/// `ErrorKind::None` and no errors. A failing one holds no value, any other
/// kind, and at least one error. Every transformation consumes the receiver
/// and yields a new outcome.
///
/// # Examples
///
/// ```rust
/// use outcomes::prelude::*;
///
/// fn parse_age(input: &str) -> ValueOutcome<u8> {
///     input.parse::<u8>().map_or_else(
///         |_| ValueOutcome::failure_with(ErrorKind::Validation, "InvalidAge", "not a number"),
///         ValueOutcome::success,
///     )
/// }
///
/// let adult = parse_age("42").map(|age| age >= 18);
/// assert_eq!(adult.value(), Some(&true));
///
/// let broken = parse_age("forty").map(|age| age >= 18);
/// assert_eq!(broken.errors()[0].code(), "InvalidAge");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an outcome may be a failure, which should be handled"]
pub struct ValueOutcome<T> {
    pub(super) state: Result<T, Failure>,
}

impl<T> ValueOutcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome holding `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self { state: Ok(value) }
    }

    pub(crate) const fn from_failure(failure: Failure) -> Self {
        Self {
            state: Err(failure),
        }
    }

    /// Creates a successful outcome from an optional value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::MissingValue`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::prelude::*;
    ///
    /// assert!(ValueOutcome::try_from_option(Some(1)).is_ok());
    /// assert_eq!(
    ///     ValueOutcome::<i32>::try_from_option(None),
    ///     Err(ContractViolation::MissingValue)
    /// );
    /// ```
    pub fn try_from_option(value: Option<T>) -> Result<Self, ContractViolation> {
        value
            .map(Self::success)
            .ok_or(ContractViolation::MissingValue)
    }

    /// Creates a failing outcome with a single error.
    ///
    /// # Errors
    ///
    /// Returns a [`ContractViolation`] if `kind` is `ErrorKind::None` or the
    /// error has a blank code or message.
    pub fn try_failure(kind: ErrorKind, error: Error) -> Result<Self, ContractViolation> {
        Self::try_failure_many(kind, [error])
    }

    /// Creates a failing outcome from a sequence of errors.
    ///
    /// # Errors
    ///
    /// Returns a [`ContractViolation`] if `kind` is `ErrorKind::None`, if no
    /// error remains after dropping blank entries, or if a remaining error
    /// has a blank code or message.
    pub fn try_failure_many<I>(kind: ErrorKind, errors: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = Error>,
    {
        Failure::new(kind, errors).map(Self::from_failure)
    }

    /// Creates a failing outcome from a code and a message.
    ///
    /// # Errors
    ///
    /// Same as [`try_failure`](Self::try_failure).
    pub fn try_failure_with(
        kind: ErrorKind,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ContractViolation> {
        Self::try_failure(kind, Error::new(code, message))
    }

    /// Creates a failing outcome with a single error.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is `ErrorKind::None` or the error has a blank code or
    /// message.
    #[track_caller]
    pub fn failure(kind: ErrorKind, error: Error) -> Self {
        match Self::try_failure(kind, error) {
            Ok(outcome) => outcome,
            Err(violation) => raise(violation),
        }
    }

    /// Creates a failing outcome from a sequence of errors.
    ///
    /// # Panics
    ///
    /// Panics on the conditions listed for [`try_failure_many`](Self::try_failure_many).
    #[track_caller]
    pub fn failure_many<I>(kind: ErrorKind, errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        match Self::try_failure_many(kind, errors) {
            Ok(outcome) => outcome,
            Err(violation) => raise(violation),
        }
    }

    /// Creates a failing outcome from a code and a message.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is `ErrorKind::None` or either string is blank.
    #[track_caller]
    pub fn failure_with(
        kind: ErrorKind,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::failure(kind, Error::new(code, message))
    }

    /// Combines outcomes into one.
    ///
    /// If any input failed, returns an `ErrorKind::Aggregate` failure holding
    /// the errors of every failing input, in input order. Otherwise returns
    /// the first input unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::EmptyCombine`] if `outcomes` is empty.
    pub fn try_combine<I>(outcomes: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut first_success = None;
        let mut failures = Vec::new();

        for outcome in outcomes {
            match outcome.state {
                Ok(value) => {
                    if first_success.is_none() {
                        first_success = Some(value);
                    }
                }
                Err(failure) => failures.push(failure),
            }
        }

        if let Some(failure) = Failure::aggregate(failures) {
            return Ok(Self::from_failure(failure));
        }
        first_success
            .map(Self::success)
            .ok_or(ContractViolation::EmptyCombine)
    }

    /// Combines outcomes into one.
    ///
    /// See [`try_combine`](Self::try_combine).
    ///
    /// # Panics
    ///
    /// Panics if `outcomes` is empty.
    #[track_caller]
    pub fn combine<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        match Self::try_combine(outcomes) {
            Ok(outcome) => outcome,
            Err(violation) => raise(violation),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if the outcome succeeded.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.state.is_ok()
    }

    /// Returns `true` if the outcome failed.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.state.is_err()
    }

    /// Returns a reference to the held value, if any.
    pub const fn value(&self) -> Option<&T> {
        match &self.state {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    /// Returns the failure kind, or `ErrorKind::None` on success.
    pub const fn kind(&self) -> ErrorKind {
        match &self.state {
            Ok(_) => ErrorKind::None,
            Err(failure) => failure.kind(),
        }
    }

    /// Returns the errors, empty on success.
    pub fn errors(&self) -> &[Error] {
        match &self.state {
            Ok(_) => &[],
            Err(failure) => failure.errors(),
        }
    }

    /// Decomposes the outcome into `(succeeded, value, kind, errors)`.
    pub fn into_parts(self) -> (bool, Option<T>, ErrorKind, Vec<Error>) {
        match self.state {
            Ok(value) => (true, Some(value), ErrorKind::None, Vec::new()),
            Err(failure) => (false, None, failure.kind(), failure.into_errors()),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the held value, or the failure as an error.
    ///
    /// This is the sanctioned way to leave the outcome channel once no
    /// recovery is possible, typically at the top of a program.
    ///
    /// # Errors
    ///
    /// Returns an [`OutcomeFailure`] carrying the kind and every error if the
    /// outcome failed.
    pub fn ensure_success(self) -> Result<T, OutcomeFailure> {
        self.state.map_err(Failure::into_outcome_failure)
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with the joined error messages if the outcome failed.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.ensure_success() {
            Ok(value) => value,
            Err(failure) => panic!("called `ValueOutcome::unwrap()` on a failure: {failure}"),
        }
    }

    /// Extracts `(succeeded, value, errors)` without panicking.
    ///
    /// On failure the value is `T::default()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::prelude::*;
    ///
    /// let (succeeded, value, errors) =
    ///     ValueOutcome::<u32>::failure_with(ErrorKind::NotFound, "Missing", "gone")
    ///         .try_get_value();
    /// assert!(!succeeded);
    /// assert_eq!(value, 0);
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn try_get_value(self) -> (bool, T, Vec<Error>)
    where
        T: Default,
    {
        match self.state {
            Ok(value) => (true, value, Vec::new()),
            Err(failure) => (false, T::default(), failure.into_errors()),
        }
    }

    /// Drops the value, keeping only success or the failure.
    pub fn into_unit_outcome(self) -> UnitOutcome {
        match self.state {
            Ok(_) => UnitOutcome::success(),
            Err(failure) => UnitOutcome::from_failure(failure),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Feeds the held value to `function` and returns its outcome.
    ///
    /// On failure, `function` is not called and the kind and errors are
    /// carried into the new value type.
    pub fn bind<U, F>(self, function: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> ValueOutcome<U>,
    {
        match self.state {
            Ok(value) => function(value),
            Err(failure) => ValueOutcome::from_failure(failure),
        }
    }

    /// Transforms the held value with `function`.
    ///
    /// On failure, `function` is not called.
    pub fn map<U, F>(self, function: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            Ok(value) => ValueOutcome::success(function(value)),
            Err(failure) => ValueOutcome::from_failure(failure),
        }
    }
}

impl<T> From<T> for ValueOutcome<T> {
    /// Lifts a bare value into a successful outcome.
    fn from(value: T) -> Self {
        Self::success(value)
    }
}

impl<T> From<ValueOutcome<T>> for Result<T, OutcomeFailure> {
    fn from(outcome: ValueOutcome<T>) -> Self {
        outcome.ensure_success()
    }
}
