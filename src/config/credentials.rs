//! Account credentials read from a local JSON file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(rename = "bearerToken")]
    pub bearer_token: String,
}

impl Credentials {
    pub fn new(account_id: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            bearer_token: bearer_token.into(),
        }
    }

    /// Reads `{"accountID": ..., "bearerToken": ...}` from `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse credentials file {}", path.display()))
    }

    pub(crate) fn authorization(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("bearer_token", &"<redacted>")
            .finish()
    }
}
