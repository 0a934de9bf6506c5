use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::dates::parse_date;

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding the frontend bundle (`index.html`, scripts, images).
    pub static_dir: String,
    pub rust_log: String,
    /// Pins "today" for every date calculation. Unset means the local clock.
    pub today_override: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let today_override = match lookup("PORTFOLIO_TODAY") {
            Some(raw) => Some(
                parse_date(&raw).context("PORTFOLIO_TODAY must be a YYYY-MM-DD date")?,
            ),
            None => None,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "2200".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "ahmedayyad.dev".to_string()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            today_override,
        })
    }
}
