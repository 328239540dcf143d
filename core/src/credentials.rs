//! Account credentials: the API key and the account's base URL.

use std::fmt;

use crate::error::{ApiError, Result};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "TEAMWORK_API_KEY";
/// Environment variable holding the account URL, e.g. `https://acme.teamwork.com`.
pub const URL_VAR: &str = "TEAMWORK_URL";

/// Immutable for the lifetime of a client. Owned by the `RequestBuilder`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    base_url: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Read `TEAMWORK_API_KEY` and `TEAMWORK_URL` from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(required_var(API_KEY_VAR)?, required_var(URL_VAR)?))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn required_var(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::MissingConfig(name)),
    }
}
