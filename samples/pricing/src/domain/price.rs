//! Price value object.

use std::fmt;

use outcomes::{ErrorKind, ValueOutcome};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rules::check;
use super::{Currency, PricingRule};

/// A non-negative amount of money in a currency.
///
/// # Examples
///
/// ```rust
/// use pricing::domain::{Currency, Price};
/// use rust_decimal::Decimal;
///
/// let price = Price::create(Decimal::new(1250, 2), Currency::EUR);
/// assert_eq!(price.value().map(ToString::to_string), Some("12.50 EUR".to_string()));
///
/// let negative = Price::create(Decimal::from(-1), Currency::EUR);
/// assert_eq!(negative.errors()[0].code(), "NegativeAmount");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    amount: Decimal,
    currency: Currency,
}

impl Price {
    /// Creates a price, rejecting negative amounts.
    pub fn create(amount: Decimal, currency: Currency) -> ValueOutcome<Self> {
        let mut rules = Vec::new();
        if amount < Decimal::ZERO {
            rules.push(PricingRule::NegativeAmount { amount });
        }
        check(rules, || ValueOutcome::success(Self { amount, currency }))
    }

    /// A zero price in `currency`.
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns the amount.
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Adds two prices of the same currency.
    ///
    /// Fails with `Conflict` if the currencies differ.
    pub fn add(&self, other: &Self) -> ValueOutcome<Self> {
        if self.currency != other.currency {
            return PricingRule::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            }
            .fail(ErrorKind::Conflict);
        }
        Self::create(self.amount + other.amount, self.currency)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.currency.decimal_places();
        write!(
            formatter,
            "{:.precision$} {}",
            self.amount.round_dp(scale),
            self.currency,
            precision = scale as usize
        )
    }
}
