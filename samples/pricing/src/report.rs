//! Reporting of outcomes to the log.
//!
//! The demonstration binary runs a fixed set of pricing scenarios and logs
//! what each one produced. Reports are plain data so they can be asserted on
//! in tests without capturing log output.

use std::fmt;

use outcomes::{ErrorKind, UnitOutcome, ValueOutcome};
use rust_decimal::Decimal;

use crate::domain::{AccommodationPrice, Currency, Establishment, Price};

/// Summary of a single outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Label of the scenario that produced the outcome.
    pub label: String,
    /// Whether the outcome succeeded.
    pub succeeded: bool,
    /// Classification of the failure, `None` on success.
    pub kind: ErrorKind,
    /// `code: message` lines of every error, in order.
    pub errors: Vec<String>,
}

impl Report {
    /// Summarises a value outcome.
    pub fn of<T>(label: impl Into<String>, outcome: &ValueOutcome<T>) -> Self {
        Self {
            label: label.into(),
            succeeded: outcome.is_success(),
            kind: outcome.kind(),
            errors: outcome.errors().iter().map(ToString::to_string).collect(),
        }
    }

    /// Summarises a unit outcome.
    pub fn of_unit(label: impl Into<String>, outcome: &UnitOutcome) -> Self {
        Self {
            label: label.into(),
            succeeded: outcome.is_success(),
            kind: outcome.kind(),
            errors: outcome.errors().iter().map(ToString::to_string).collect(),
        }
    }

    /// Writes the report to the log: successes at `info`, failures at `warn`.
    pub fn log(&self) {
        if self.succeeded {
            tracing::info!(scenario = %self.label, "succeeded");
        } else {
            tracing::warn!(
                scenario = %self.label,
                kind = %self.kind,
                errors = ?self.errors,
                "failed"
            );
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.succeeded {
            return write!(formatter, "{}: ok", self.label);
        }
        write!(formatter, "{}: {} [{}]", self.label, self.kind, self.errors.join("; "))
    }
}

/// Runs the canned pricing scenarios and returns their reports in order.
///
/// # Examples
///
/// ```rust
/// use pricing::report::scenarios;
///
/// let reports = scenarios();
/// assert!(reports.iter().any(|report| report.succeeded));
/// assert!(reports.iter().any(|report| !report.succeeded));
/// ```
pub fn scenarios() -> Vec<Report> {
    let valid = AccommodationPrice::create(Decimal::from(100), Decimal::from(150), Currency::EUR);
    let negative_standard =
        AccommodationPrice::create(Decimal::from(-50), Decimal::from(100), Currency::EUR);
    let inverted =
        AccommodationPrice::create(Decimal::from(150), Decimal::from(100), Currency::EUR);
    let unknown_currency =
        AccommodationPrice::from_code(Decimal::from(10), Decimal::from(20), "ZZZ");
    let mismatch = Price::zero(Currency::EUR).add(&Price::zero(Currency::USD));
    let registration = Establishment::register("", Decimal::from(-1), Decimal::from(5), "EUR");
    let checks = UnitOutcome::combine([
        valid.clone().into_unit_outcome(),
        Currency::create("GBP").into_unit_outcome(),
    ]);

    vec![
        Report::of("valid accommodation price", &valid),
        Report::of("negative standard price", &negative_standard),
        Report::of("peak below standard", &inverted),
        Report::of("unknown currency", &unknown_currency),
        Report::of("currency mismatch", &mismatch),
        Report::of("blank registration", &registration),
        Report::of_unit("independent checks", &checks),
    ]
}
