//! Establishment entity.

use std::fmt;

use outcomes::{UnitOutcome, ValueOutcome};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rules::check;
use super::{AccommodationPrice, PricingRule};

/// Maximum length of an establishment name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Identity of an [`Establishment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EstablishmentId(Uuid);

impl EstablishmentId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EstablishmentId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.as_uuid().hyphenated())
    }
}

/// A named place that sells stays at an [`AccommodationPrice`].
///
/// Unlike the value objects, an establishment has an identity: two
/// establishments with equal names and prices are still different if their
/// ids differ. Updates return a new instance with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Establishment {
    id: EstablishmentId,
    name: String,
    price: AccommodationPrice,
}

impl Establishment {
    /// Creates an establishment from a name and an already valid price.
    pub fn create(name: &str, price: AccommodationPrice) -> ValueOutcome<Self> {
        validate_name(name).map(|name| Self {
            id: EstablishmentId::generate(),
            name,
            price,
        })
    }

    /// Validates a name and raw prices together.
    ///
    /// The name and the price are independent, so both are checked and
    /// their errors are reported together as an `Aggregate` failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::ErrorKind;
    /// use pricing::domain::Establishment;
    /// use rust_decimal::Decimal;
    ///
    /// let outcome = Establishment::register("  ", Decimal::from(-5), Decimal::from(10), "EUR");
    /// assert_eq!(outcome.kind(), ErrorKind::Aggregate);
    /// let codes: Vec<&str> = outcome.errors().iter().map(|error| error.code()).collect();
    /// assert_eq!(codes, vec!["BlankName", "NegativeStandardPrice"]);
    /// ```
    pub fn register(
        name: &str,
        standard: Decimal,
        peak: Decimal,
        currency_code: &str,
    ) -> ValueOutcome<Self> {
        let name = validate_name(name);
        let price = AccommodationPrice::from_code(standard, peak, currency_code);

        UnitOutcome::combine([
            name.clone().into_unit_outcome(),
            price.clone().into_unit_outcome(),
        ])
        .bind_value(|| {
            name.bind(|name| {
                price.map(|price| Self {
                    id: EstablishmentId::generate(),
                    name,
                    price,
                })
            })
        })
    }

    /// Returns the identifier.
    pub const fn id(&self) -> EstablishmentId {
        self.id
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accommodation price.
    pub const fn price(&self) -> &AccommodationPrice {
        &self.price
    }

    /// Returns a copy of this establishment with a new price.
    #[must_use]
    pub fn with_price(&self, price: AccommodationPrice) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }

    /// Validates new raw prices in the current currency and applies them.
    pub fn reprice(&self, standard: Decimal, peak: Decimal) -> ValueOutcome<Self> {
        AccommodationPrice::create(standard, peak, self.price.currency())
            .map(|price| self.with_price(price))
    }

    /// Renames the establishment, keeping its identity.
    pub fn rename(&self, name: &str) -> ValueOutcome<Self> {
        validate_name(name).map(|name| Self {
            name,
            ..self.clone()
        })
    }
}

fn validate_name(name: &str) -> ValueOutcome<String> {
    let trimmed = name.trim();
    let length = trimmed.chars().count();

    let mut rules = Vec::new();
    if trimmed.is_empty() {
        rules.push(PricingRule::BlankName);
    } else if length > MAX_NAME_LENGTH {
        rules.push(PricingRule::NameTooLong {
            length,
            max: MAX_NAME_LENGTH,
        });
    }
    check(rules, || ValueOutcome::success(trimmed.to_string()))
}
