//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub frankfurter_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let frankfurter_url = env::var("FRANKFURTER_URL")
            .unwrap_or_else(|_| fx_frankfurter::DEFAULT_BASE_URL.to_string());

        Ok(Self {
            port,
            frankfurter_url,
        })
    }
}
