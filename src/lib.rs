//! # outcomes
//!
//! Success/failure outcome types for Rust, with error aggregation and
//! short-circuiting `bind`/`map` combinators.
//!
//! ## Overview
//!
//! Domain failures (validation, not-found, conflict, ...) are values, not
//! panics. This crate provides:
//!
//! - **Error Model**: [`Error`](error::Error) (`code` + `message`) and
//!   [`ErrorKind`](error::ErrorKind)
//! - **Unit Outcome**: [`UnitOutcome`](outcome::UnitOutcome), success or
//!   failure with no value
//! - **Value Outcome**: [`ValueOutcome<T>`](outcome::ValueOutcome), success
//!   with a `T` or failure
//! - **Async Combinators**: `bind_async`/`map_async` and
//!   [`OutcomeFutureExt`](outcome::OutcomeFutureExt)
//!
//! ## Feature Flags
//!
//! - `async`: Asynchronous combinators (enabled by default)
//! - `serde`: Serialization of errors and outcomes
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! fn non_negative(amount: i64) -> ValueOutcome<i64> {
//!     if amount < 0 {
//!         ValueOutcome::failure_with(ErrorKind::Validation, "NegativeAmount", "amount is negative")
//!     } else {
//!         ValueOutcome::success(amount)
//!     }
//! }
//!
//! let doubled = non_negative(21).map(|amount| amount * 2);
//! assert_eq!(doubled.value(), Some(&42));
//!
//! let rejected = non_negative(-1).map(|amount| amount * 2);
//! assert_eq!(rejected.kind(), ErrorKind::Validation);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the outcome types and the error model.
///
/// # Usage
///
/// ```rust
/// use outcomes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::outcome::*;
}

pub mod error;
pub mod outcome;

pub use error::{ContractViolation, Error, ErrorKind, OutcomeFailure};
#[cfg(feature = "async")]
pub use outcome::OutcomeFutureExt;
pub use outcome::{UnitOutcome, ValueOutcome};
