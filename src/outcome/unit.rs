//! Outcome of an operation that produces no value.

use super::{Failure, ValueOutcome, raise};
use crate::error::{ContractViolation, Error, ErrorKind};

/// Success or failure of an operation that produces no value.
///
/// A successful `UnitOutcome` has kind `ErrorKind::None` and no errors.
/// A failing one has any other kind and at least one error. There is no
/// default state: instances come from [`success`](Self::success), the
/// `failure*` factories, or [`combine`](Self::combine).
///
/// # Examples
///
/// ```rust
/// use outcomes::prelude::*;
///
/// let combined = UnitOutcome::combine([
///     UnitOutcome::success(),
///     UnitOutcome::failure_with(ErrorKind::Validation, "A", "a"),
///     UnitOutcome::failure_with(ErrorKind::Validation, "B", "b"),
/// ]);
///
/// assert_eq!(combined.kind(), ErrorKind::Aggregate);
/// assert_eq!(combined.errors(), &[Error::new("A", "a"), Error::new("B", "b")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an outcome may be a failure, which should be handled"]
pub struct UnitOutcome {
    pub(super) state: Result<(), Failure>,
}

impl UnitOutcome {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome.
    #[inline]
    pub const fn success() -> Self {
        Self { state: Ok(()) }
    }

    pub(crate) const fn from_failure(failure: Failure) -> Self {
        Self {
            state: Err(failure),
        }
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
    /// Entries whose code and message are both blank are dropped; the rest
    /// keep their order.
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
    /// the errors of every failing input, in input order. Otherwise, including
    /// for an empty input, returns success.
    pub fn combine<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let failures = outcomes
            .into_iter()
            .filter_map(|outcome| outcome.state.err());
        Failure::aggregate(failures).map_or_else(Self::success, Self::from_failure)
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

    /// Returns the failure kind, or `ErrorKind::None` on success.
    pub const fn kind(&self) -> ErrorKind {
        match &self.state {
            Ok(()) => ErrorKind::None,
            Err(failure) => failure.kind(),
        }
    }

    /// Returns the errors, empty on success.
    pub fn errors(&self) -> &[Error] {
        match &self.state {
            Ok(()) => &[],
            Err(failure) => failure.errors(),
        }
    }

    /// Decomposes the outcome into `(succeeded, kind, errors)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::prelude::*;
    ///
    /// let (succeeded, kind, errors) = UnitOutcome::success().into_parts();
    /// assert!(succeeded);
    /// assert_eq!(kind, ErrorKind::None);
    /// assert!(errors.is_empty());
    /// ```
    pub fn into_parts(self) -> (bool, ErrorKind, Vec<Error>) {
        match self.state {
            Ok(()) => (true, ErrorKind::None, Vec::new()),
            Err(failure) => (false, failure.kind(), failure.into_errors()),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Lifts this outcome into a [`ValueOutcome`].
    ///
    /// A success becomes `ValueOutcome::success(value)`; a failure keeps its
    /// kind and errors and `value` is dropped.
    pub fn into_value_outcome<T>(self, value: T) -> ValueOutcome<T> {
        match self.state {
            Ok(()) => ValueOutcome::success(value),
            Err(failure) => ValueOutcome::from_failure(failure),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Runs `function` if this outcome succeeded and returns its outcome.
    ///
    /// A failing receiver is returned unchanged and `function` is not called.
    pub fn bind<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self.state {
            Ok(()) => function(),
            Err(_) => self,
        }
    }

    /// Runs a value-producing `function` if this outcome succeeded.
    ///
    /// A failure is carried into the value shape and `function` is not called.
    pub fn bind_value<T, F>(self, function: F) -> ValueOutcome<T>
    where
        F: FnOnce() -> ValueOutcome<T>,
    {
        match self.state {
            Ok(()) => function(),
            Err(failure) => ValueOutcome::from_failure(failure),
        }
    }

    /// Runs a side-effecting `function` if this outcome succeeded.
    pub fn map<F>(self, function: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_success() {
            function();
        }
        self
    }

    /// Produces a value with `function` if this outcome succeeded.
    pub fn map_value<T, F>(self, function: F) -> ValueOutcome<T>
    where
        F: FnOnce() -> T,
    {
        match self.state {
            Ok(()) => ValueOutcome::success(function()),
            Err(failure) => ValueOutcome::from_failure(failure),
        }
    }
}

impl FromIterator<Self> for UnitOutcome {
    /// Collects outcomes with [`UnitOutcome::combine`].
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::combine(iter)
    }
}

impl<T> From<ValueOutcome<T>> for UnitOutcome {
    fn from(outcome: ValueOutcome<T>) -> Self {
        outcome.into_unit_outcome()
    }
}
