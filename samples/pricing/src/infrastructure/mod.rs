//! Infrastructure layer for the pricing application.
//!
//! - `config` - Application configuration loaded from environment variables

mod config;

pub use config::{AppConfig, ConfigError};
