//! OANDA configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api-fxpractice.oanda.com";
pub const DEFAULT_CREDENTIALS_PATH: &str = "config.json";

/// OANDA API configuration
#[derive(Debug, Clone)]
pub struct OandaConfig {
    pub api_base_url: String,
    pub credentials_path: PathBuf,
}

impl Default for OandaConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
        }
    }
}

impl OandaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_base_url: lookup("OANDA_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            credentials_path: lookup("OANDA_CREDENTIALS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_PATH)),
        }
    }

    /// Parsed API base URL
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.api_base_url)
            .with_context(|| format!("Invalid OANDA API base URL: {}", self.api_base_url))
    }
}
