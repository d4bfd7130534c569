//! Validation rules enforced by the pricing value objects.
//!
//! Each rule is a tagged variant: the variant name is the stable error code
//! and the `Display` text is the message template.

use outcomes::{Error, ErrorKind, ValueOutcome};
use rust_decimal::Decimal;
use thiserror::Error as ThisError;

use super::Currency;

/// A violated pricing rule.
///
/// # Examples
///
/// ```rust
/// use pricing::domain::PricingRule;
/// use rust_decimal::Decimal;
///
/// let rule = PricingRule::NegativeStandardPrice { amount: Decimal::from(-50) };
/// let error = rule.to_error();
/// assert_eq!(error.code(), "NegativeStandardPrice");
/// assert_eq!(error.message(), "standard price -50 must not be negative");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PricingRule {
    /// The currency code was empty.
    #[error("currency code must not be blank")]
    BlankCurrency,
    /// The currency code is not an ISO code this application knows.
    #[error("currency code '{code}' is not recognised")]
    UnknownCurrency {
        /// The rejected code.
        code: String,
    },
    /// The currency is known but not offered by the catalog.
    #[error("currency {currency} is not offered")]
    UnsupportedCurrency {
        /// The rejected currency.
        currency: Currency,
    },
    /// A price amount was negative.
    #[error("amount {amount} must not be negative")]
    NegativeAmount {
        /// The rejected amount.
        amount: Decimal,
    },
    /// The standard price was negative.
    #[error("standard price {amount} must not be negative")]
    NegativeStandardPrice {
        /// The rejected amount.
        amount: Decimal,
    },
    /// The peak price was negative.
    #[error("peak price {amount} must not be negative")]
    NegativePeakPrice {
        /// The rejected amount.
        amount: Decimal,
    },
    /// The peak price was lower than the standard price.
    #[error("peak price {peak} must not be below standard price {standard}")]
    PeakBelowStandard {
        /// The standard price.
        standard: Decimal,
        /// The peak price.
        peak: Decimal,
    },
    /// Two prices in different currencies were combined.
    #[error("cannot combine {left} with {right}")]
    CurrencyMismatch {
        /// Currency of the left operand.
        left: Currency,
        /// Currency of the right operand.
        right: Currency,
    },
    /// The establishment name was empty.
    #[error("establishment name must not be blank")]
    BlankName,
    /// The establishment name was too long.
    #[error("establishment name has {length} characters, at most {max} are allowed")]
    NameTooLong {
        /// Length of the rejected name, in characters.
        length: usize,
        /// Maximum allowed length.
        max: usize,
    },
}

impl PricingRule {
    /// Returns the stable code identifying this rule.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BlankCurrency => "BlankCurrency",
            Self::UnknownCurrency { .. } => "UnknownCurrency",
            Self::UnsupportedCurrency { .. } => "UnsupportedCurrency",
            Self::NegativeAmount { .. } => "NegativeAmount",
            Self::NegativeStandardPrice { .. } => "NegativeStandardPrice",
            Self::NegativePeakPrice { .. } => "NegativePeakPrice",
            Self::PeakBelowStandard { .. } => "PeakBelowStandard",
            Self::CurrencyMismatch { .. } => "CurrencyMismatch",
            Self::BlankName => "BlankName",
            Self::NameTooLong { .. } => "NameTooLong",
        }
    }

    /// Builds the outcome error for this rule.
    #[must_use]
    pub fn to_error(&self) -> Error {
        Error::new(self.code(), self.to_string())
    }

    /// Fails an outcome with this single rule under `kind`.
    pub fn fail<T>(&self, kind: ErrorKind) -> ValueOutcome<T> {
        ValueOutcome::failure(kind, self.to_error())
    }
}

/// Runs `build` if no rule was violated, otherwise fails with every rule.
pub(crate) fn check<T, F>(rules: Vec<PricingRule>, build: F) -> ValueOutcome<T>
where
    F: FnOnce() -> ValueOutcome<T>,
{
    if rules.is_empty() {
        return build();
    }
    tracing::debug!(
        codes = ?rules.iter().map(PricingRule::code).collect::<Vec<_>>(),
        "validation rejected input"
    );
    ValueOutcome::failure_many(ErrorKind::Validation, rules.iter().map(PricingRule::to_error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PricingRule::BlankCurrency, "BlankCurrency")]
    #[case(PricingRule::BlankName, "BlankName")]
    #[case(
        PricingRule::PeakBelowStandard { standard: Decimal::from(150), peak: Decimal::from(100) },
        "PeakBelowStandard"
    )]
    fn test_code_matches_variant(#[case] rule: PricingRule, #[case] code: &str) {
        assert_eq!(rule.code(), code);
        assert_eq!(rule.to_error().code(), code);
    }

    #[rstest]
    fn test_message_template() {
        let rule = PricingRule::NameTooLong {
            length: 120,
            max: 100,
        };
        assert_eq!(
            rule.to_error().message(),
            "establishment name has 120 characters, at most 100 are allowed"
        );
    }

    #[rstest]
    fn test_check_without_rules_builds() {
        let outcome = check(Vec::new(), || ValueOutcome::success(1));
        assert_eq!(outcome, ValueOutcome::success(1));
    }

    #[rstest]
    fn test_check_collects_every_rule() {
        let outcome: ValueOutcome<()> = check(
            vec![PricingRule::BlankCurrency, PricingRule::BlankName],
            || unreachable!(),
        );
        assert_eq!(outcome.kind(), ErrorKind::Validation);
        let codes: Vec<&str> = outcome.errors().iter().map(Error::code).collect();
        assert_eq!(codes, vec!["BlankCurrency", "BlankName"]);
    }
}
