//! Accommodation price value object.
//!
//! An accommodation is sold at a standard price and at a peak price for
//! high-demand dates. Both share one currency and the peak price may never
//! undercut the standard price.

use std::sync::LazyLock;

use outcomes::ValueOutcome;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rules::check;
use super::{Currency, Price, PricingRule};

static EMPTY: LazyLock<AccommodationPrice> = LazyLock::new(|| AccommodationPrice {
    standard: Price::zero(Currency::default_currency()),
    peak: Price::zero(Currency::default_currency()),
});

/// Which price of an accommodation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Ordinary dates.
    Standard,
    /// High-demand dates.
    Peak,
}

/// Standard and peak prices of an accommodation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccommodationPrice {
    standard: Price,
    peak: Price,
}

impl AccommodationPrice {
    /// Validates and creates an accommodation price.
    ///
    /// Every violated rule is reported in one `Validation` failure:
    /// a negative standard price, a negative peak price, and a peak price
    /// below the standard price are checked independently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricing::domain::{AccommodationPrice, Currency};
    /// use rust_decimal::Decimal;
    ///
    /// let outcome =
    ///     AccommodationPrice::create(Decimal::from(150), Decimal::from(100), Currency::EUR);
    /// let codes: Vec<&str> = outcome.errors().iter().map(|error| error.code()).collect();
    /// assert_eq!(codes, vec!["PeakBelowStandard"]);
    /// ```
    pub fn create(standard: Decimal, peak: Decimal, currency: Currency) -> ValueOutcome<Self> {
        let mut rules = Vec::new();
        if standard < Decimal::ZERO {
            rules.push(PricingRule::NegativeStandardPrice { amount: standard });
        }
        if peak < Decimal::ZERO {
            rules.push(PricingRule::NegativePeakPrice { amount: peak });
        }
        if peak < standard {
            rules.push(PricingRule::PeakBelowStandard { standard, peak });
        }

        check(rules, || {
            Price::create(standard, currency).bind(|standard_price| {
                Price::create(peak, currency).map(|peak_price| Self {
                    standard: standard_price,
                    peak: peak_price,
                })
            })
        })
    }

    /// Parses the currency code first, then validates the prices.
    ///
    /// A bad currency code short-circuits: the prices are not checked.
    pub fn from_code(standard: Decimal, peak: Decimal, currency_code: &str) -> ValueOutcome<Self> {
        Currency::create(currency_code).bind(|currency| Self::create(standard, peak, currency))
    }

    /// The zero price in the default currency.
    pub fn empty() -> &'static Self {
        &EMPTY
    }

    /// Returns the standard price.
    pub const fn standard(&self) -> &Price {
        &self.standard
    }

    /// Returns the peak price.
    pub const fn peak(&self) -> &Price {
        &self.peak
    }

    /// Returns the currency shared by both prices.
    pub const fn currency(&self) -> Currency {
        self.standard.currency()
    }

    /// Returns the price that applies in `season`.
    pub const fn price_for(&self, season: Season) -> &Price {
        match season {
            Season::Standard => &self.standard,
            Season::Peak => &self.peak,
        }
    }

    /// Returns the peak surcharge over the standard price.
    pub fn surcharge(&self) -> Decimal {
        self.peak.amount() - self.standard.amount()
    }
}
