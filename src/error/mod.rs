//! Error model shared by every outcome shape.
//!
//! This module provides:
//!
//! - [`Error`]: an immutable `(code, message)` pair describing one thing that
//!   went wrong
//! - [`ErrorKind`]: a coarse classification of why an outcome failed
//! - [`ContractViolation`]: misuse of the outcome factories (programmer error)
//! - [`OutcomeFailure`]: the error returned by `ensure_success` when a failing
//!   outcome is collapsed into a `Result`
//!
//! Domain failures travel inside outcomes; only contract violations and the
//! explicit `ensure_success` escape hatch leave the outcome channel.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::error::{Error, ErrorKind};
//!
//! let error = Error::new("NegativeAmount", "amount must not be negative");
//! assert_eq!(error.code(), "NegativeAmount");
//! assert_eq!(error.to_string(), "NegativeAmount: amount must not be negative");
//! assert!(ErrorKind::Validation.is_failure());
//! ```

mod kind;
mod violation;

pub use kind::ErrorKind;
pub use violation::{ContractViolation, ErrorField, OutcomeFailure};

use std::fmt;

/// A single error: a machine-readable code paired with a human-readable message.
///
/// Two errors are equal iff their codes and messages are equal. Construction
/// never fails; blank codes or messages are rejected at the point an `Error`
/// is wrapped into a failing outcome.
///
/// # Examples
///
/// ```rust
/// use outcomes::error::Error;
///
/// let first = Error::new("E", "mid");
/// let second = Error::new("E".to_string(), "mid".to_string());
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Error {
    code: String,
    message: String,
}

impl Error {
    /// Creates a new error from a code and a message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns the stable, machine-readable code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if both the code and the message are empty or whitespace.
    ///
    /// Blank errors carry no information and are dropped by the failure factories.
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty() && self.message.trim().is_empty()
    }

    /// Returns the first field that is empty or whitespace-only, if any.
    pub fn blank_field(&self) -> Option<ErrorField> {
        if self.code.trim().is_empty() {
            Some(ErrorField::Code)
        } else if self.message.trim().is_empty() {
            Some(ErrorField::Message)
        } else {
            None
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}
