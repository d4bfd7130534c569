//! Currency value object and the catalog of offered currencies.

use std::fmt;

use outcomes::{ErrorKind, ValueOutcome};
use serde::{Deserialize, Serialize};

use super::PricingRule;

/// ISO 4217 currencies known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Euro
    EUR,
    /// United States Dollar
    USD,
    /// Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
}

impl Currency {
    /// Every known currency.
    pub const ALL: [Self; 5] = [Self::EUR, Self::USD, Self::GBP, Self::JPY, Self::CHF];

    /// Parses a currency code.
    ///
    /// Surrounding whitespace is ignored and the code is case-insensitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricing::domain::Currency;
    ///
    /// assert_eq!(Currency::create(" usd ").value(), Some(&Currency::USD));
    /// assert_eq!(Currency::create("XXX").errors()[0].code(), "UnknownCurrency");
    /// ```
    pub fn create(code: &str) -> ValueOutcome<Self> {
        let normalized = code.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return PricingRule::BlankCurrency.fail(ErrorKind::Validation);
        }
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == normalized)
            .map_or_else(
                || PricingRule::UnknownCurrency { code: normalized }.fail(ErrorKind::Validation),
                ValueOutcome::success,
            )
    }

    /// The currency used when none is configured.
    pub const fn default_currency() -> Self {
        Self::EUR
    }

    /// Returns the ISO code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::EUR => "EUR",
            Self::USD => "USD",
            Self::GBP => "GBP",
            Self::JPY => "JPY",
            Self::CHF => "CHF",
        }
    }

    /// Returns the number of decimal places used for amounts.
    pub const fn decimal_places(self) -> u32 {
        match self {
            Self::JPY => 0,
            Self::EUR | Self::USD | Self::GBP | Self::CHF => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

/// The currencies an establishment may price in.
///
/// Lookups are asynchronous so the catalog can stand in for a remote
/// reference-data service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCatalog {
    offered: Vec<Currency>,
}

impl CurrencyCatalog {
    /// Creates a catalog offering the given currencies.
    pub fn new(offered: impl IntoIterator<Item = Currency>) -> Self {
        Self {
            offered: offered.into_iter().collect(),
        }
    }

    /// Returns `true` if `currency` is offered.
    pub fn offers(&self, currency: Currency) -> bool {
        self.offered.contains(&currency)
    }

    /// Looks up an offered currency by code.
    ///
    /// Malformed or unknown codes fail with `Validation`; known currencies
    /// that are not offered fail with `NotFound`.
    pub async fn find(&self, code: &str) -> ValueOutcome<Currency> {
        let parsed = Currency::create(code);
        tokio::task::yield_now().await;
        parsed.bind(|currency| {
            if self.offers(currency) {
                ValueOutcome::success(currency)
            } else {
                PricingRule::UnsupportedCurrency { currency }.fail(ErrorKind::NotFound)
            }
        })
    }
}

impl Default for CurrencyCatalog {
    fn default() -> Self {
        Self::new(Currency::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("EUR", Currency::EUR)]
    #[case("eur", Currency::EUR)]
    #[case("  jpy\n", Currency::JPY)]
    #[case("Chf", Currency::CHF)]
    fn test_create_accepts_known_codes(#[case] code: &str, #[case] expected: Currency) {
        assert_eq!(Currency::create(code), ValueOutcome::success(expected));
    }

    #[rstest]
    #[case("", "BlankCurrency")]
    #[case("   ", "BlankCurrency")]
    #[case("ABC", "UnknownCurrency")]
    #[case("EURO", "UnknownCurrency")]
    fn test_create_rejects(#[case] code: &str, #[case] expected_code: &str) {
        let outcome = Currency::create(code);
        assert_eq!(outcome.kind(), ErrorKind::Validation);
        assert_eq!(outcome.errors().len(), 1);
        assert_eq!(outcome.errors()[0].code(), expected_code);
    }

    #[rstest]
    fn test_default_currency_is_euro() {
        assert_eq!(Currency::default_currency(), Currency::EUR);
    }

    #[rstest]
    #[tokio::test]
    async fn test_catalog_rejects_unoffered_currency() {
        let catalog = CurrencyCatalog::new([Currency::EUR]);
        let outcome = catalog.find("usd").await;
        assert_eq!(outcome.kind(), ErrorKind::NotFound);
        assert_eq!(outcome.errors()[0].code(), "UnsupportedCurrency");
    }

    #[rstest]
    #[tokio::test]
    async fn test_catalog_finds_offered_currency() {
        let outcome = CurrencyCatalog::default().find("gbp").await;
        assert_eq!(outcome.value(), Some(&Currency::GBP));
    }
}
