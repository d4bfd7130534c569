//! Classification of outcome failures.

use std::fmt;

/// Coarse classification of why an outcome failed.
///
/// Consumers branch on the kind instead of inspecting message text.
/// `None` belongs to successful outcomes only and is rejected by every
/// failure factory. `Aggregate` marks failures produced by `combine`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The outcome succeeded.
    #[default]
    None,
    /// Input did not satisfy a validation rule.
    Validation,
    /// A requested entity does not exist.
    NotFound,
    /// The caller is not allowed to perform the operation.
    Unauthorized,
    /// The operation conflicts with existing state.
    Conflict,
    /// An unexpected internal failure.
    Internal,
    /// Errors collected from more than one outcome.
    Aggregate,
    /// The operation was invalid in the current context.
    Invalid,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Validation,
        Self::NotFound,
        Self::Unauthorized,
        Self::Conflict,
        Self::Internal,
        Self::Aggregate,
        Self::Invalid,
    ];

    /// Returns `true` for every kind that may be attached to a failing outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::error::ErrorKind;
    ///
    /// assert!(!ErrorKind::None.is_failure());
    /// assert!(ErrorKind::NotFound.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Validation => "Validation",
            Self::NotFound => "NotFound",
            Self::Unauthorized => "Unauthorized",
            Self::Conflict => "Conflict",
            Self::Internal => "Internal",
            Self::Aggregate => "Aggregate",
            Self::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
