//! Pricing Sample Application Entry Point
//!
//! Runs the canned pricing scenarios, then prices the establishment described
//! by the environment configuration.

use std::error::Error;

use outcomes::OutcomeFutureExt;
use pricing::domain::{AccommodationPrice, CurrencyCatalog, Establishment};
use pricing::infrastructure::AppConfig;
use pricing::report::{Report, scenarios};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pricing=debug,outcomes=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pricing Sample Application...");

    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: currency={}, standard={}, peak={}",
                config.currency,
                config.standard,
                config.peak
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    for report in scenarios() {
        report.log();
    }

    let catalog = CurrencyCatalog::default();
    let outcome = catalog
        .find(&config.currency)
        .bind_outcome(|currency| {
            AccommodationPrice::create(config.standard, config.peak, currency)
        })
        .bind_outcome(|price| Establishment::create(&config.establishment, price))
        .await;

    Report::of("configured establishment", &outcome).log();

    let establishment = outcome.ensure_success()?;
    tracing::info!(
        "Establishment priced: {}",
        serde_json::to_string(&establishment)?
    );

    tracing::info!("Pricing Sample Application finished");
    Ok(())
}
