//! Configuration module for fxtrader.
//!
//! Endpoint settings come from environment variables, account credentials
//! from a local JSON file.

mod broker_config;
mod credentials;

pub use broker_config::{DEFAULT_API_BASE_URL, DEFAULT_CREDENTIALS_PATH, OandaConfig};
pub use credentials::Credentials;
