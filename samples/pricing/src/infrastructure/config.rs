//! Application configuration management.
//!
//! Settings are read from environment variables (and a `.env` file when one
//! is present). Every setting is optional: unset variables fall back to the
//! defaults of [`AppConfig::default`], while set but malformed values are
//! reported as [`ConfigError::InvalidValue`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pricing::infrastructure::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Pricing in {}", config.currency);
//! ```

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::Decimal;

const CURRENCY_KEY: &str = "PRICING_CURRENCY";
const STANDARD_KEY: &str = "PRICING_STANDARD";
const PEAK_KEY: &str = "PRICING_PEAK";
const ESTABLISHMENT_KEY: &str = "PRICING_ESTABLISHMENT";

/// Configuration error types.
///
/// Every setting has a default, so an unset variable is never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration.
///
/// The raw values are kept unvalidated: turning them into value objects is
/// the domain's job and its failures are reported as outcomes.
///
/// # Fields
///
/// - `currency`: ISO code looked up in the currency catalog
/// - `standard`: standard price of the configured establishment
/// - `peak`: peak price of the configured establishment
/// - `establishment`: name of the configured establishment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Currency code.
    pub currency: String,
    /// Standard price amount.
    pub standard: Decimal,
    /// Peak price amount.
    pub peak: Decimal,
    /// Establishment name.
    pub establishment: String,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PRICING_CURRENCY`: currency code (optional, default: "EUR")
    /// - `PRICING_STANDARD`: standard price (optional, default: 100)
    /// - `PRICING_PEAK`: peak price (optional, default: 150)
    /// - `PRICING_ESTABLISHMENT`: establishment name (optional, default: "Harbour Inn")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a price is set but is not a decimal
    /// number, or if a variable is not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        dotenvy::dotenv().ok();

        Self::from_lookup(read_env)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Propagates lookup errors and returns `ConfigError::InvalidValue` for
    /// prices that cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let defaults = Self::default();

        let currency = get_optional(&lookup, CURRENCY_KEY, defaults.currency)?;
        let standard = get_optional_parsed(&lookup, STANDARD_KEY, defaults.standard)?;
        let peak = get_optional_parsed(&lookup, PEAK_KEY, defaults.peak)?;
        let establishment = get_optional(&lookup, ESTABLISHMENT_KEY, defaults.establishment)?;

        Ok(Self {
            currency,
            standard,
            peak,
            establishment,
        })
    }

    /// Creates a new `AppConfig` with the given values.
    #[must_use]
    pub const fn new(
        currency: String,
        standard: Decimal,
        peak: Decimal,
        establishment: String,
    ) -> Self {
        Self {
            currency,
            standard,
            peak,
            establishment,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            standard: Decimal::from(100),
            peak: Decimal::from(150),
            establishment: "Harbour Inn".to_string(),
        }
    }
}

/// Reads an environment variable, treating an unset one as `None`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the value is not valid Unicode.
fn read_env(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "value is not valid Unicode".to_string(),
        }),
    }
}

fn get_optional<F>(lookup: &F, key: &str, default: String) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    Ok(lookup(key)?.unwrap_or(default))
}

/// Gets an optional variable and parses it, with a default value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the variable is set but cannot be parsed.
fn get_optional_parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
    T: FromStr,
    T::Err: Display,
{
    lookup(key)?.map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|error: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
    })
}
