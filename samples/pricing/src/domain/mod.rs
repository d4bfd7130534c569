//! Domain layer for the pricing application.
//!
//! # Structure
//!
//! - [`PricingRule`] - One tagged variant per validation rule
//! - [`Currency`] and [`CurrencyCatalog`] - Supported currencies
//! - [`Price`] - A non-negative amount in a currency
//! - [`AccommodationPrice`] - Standard and peak prices of a stay
//! - [`Establishment`] - An identified place that sells stays
//!
//! # Design Principles
//!
//! - **Self-validation**: constructors return a `ValueOutcome`, never an
//!   invalid value
//! - **Collect, don't fail fast**: every violated rule of one construction
//!   attempt is reported in a single `Validation` failure
//! - **Immutability**: updates produce new instances

mod accommodation_price;
mod currency;
mod establishment;
mod price;
mod rules;

pub use accommodation_price::{AccommodationPrice, Season};
pub use currency::{Currency, CurrencyCatalog};
pub use establishment::{Establishment, EstablishmentId, MAX_NAME_LENGTH};
pub use price::Price;
pub use rules::PricingRule;
