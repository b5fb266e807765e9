//! Application configuration loaded from environment variables.
//!
//! A `.env` file is read first (via dotenvy) when present.
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `DEFAULT_TAX_RATE` - Tax rate when a quote has no override (default: `0.13`)
//! - `BEDS24_API_URL` - Beds24 JSON API base (default: `https://api.beds24.com/json`)
//! - `BEDS24_PROP_ID` - Beds24 property id (default: `17759`, `NEEDS_CONFIG` = placeholder mode)
//! - `BEDS24_TIMEOUT_SECS` - Upstream request timeout (default: 10)
//! - `PLACEHOLDER_NIGHTLY_RATE` - Rate for placeholder/fallback quotes (default: 299)
//! - `AVAILABILITY_CACHE_TTL_SECS` - Availability cache TTL (default: 300)

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::pricing::LAS_VEGAS_TAX_RATE;

/// Property id value meaning "not set up yet".
pub const UNCONFIGURED_PROP_ID: &str = "NEEDS_CONFIG";

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub default_tax_rate: Decimal,
    pub beds24_api_url: String,
    pub beds24_prop_id: String,
    pub beds24_timeout: Duration,
    pub placeholder_nightly_rate: Decimal,
    pub availability_cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            default_tax_rate: LAS_VEGAS_TAX_RATE,
            beds24_api_url: "https://api.beds24.com/json".to_string(),
            beds24_prop_id: "17759".to_string(),
            beds24_timeout: Duration::from_secs(10),
            placeholder_nightly_rate: dec!(299),
            availability_cache_ttl: Duration::from_secs(5 * 60),
        }
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            default_tax_rate: parse_or(
                "DEFAULT_TAX_RATE",
                env::var("DEFAULT_TAX_RATE").ok(),
                defaults.default_tax_rate,
            )?,
            beds24_api_url: env::var("BEDS24_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.beds24_api_url),
            beds24_prop_id: env::var("BEDS24_PROP_ID").unwrap_or(defaults.beds24_prop_id),
            beds24_timeout: Duration::from_secs(parse_or(
                "BEDS24_TIMEOUT_SECS",
                env::var("BEDS24_TIMEOUT_SECS").ok(),
                defaults.beds24_timeout.as_secs(),
            )?),
            placeholder_nightly_rate: parse_or(
                "PLACEHOLDER_NIGHTLY_RATE",
                env::var("PLACEHOLDER_NIGHTLY_RATE").ok(),
                defaults.placeholder_nightly_rate,
            )?,
            availability_cache_ttl: Duration::from_secs(parse_or(
                "AVAILABILITY_CACHE_TTL_SECS",
                env::var("AVAILABILITY_CACHE_TTL_SECS").ok(),
                defaults.availability_cache_ttl.as_secs(),
            )?),
        })
    }

    /// Whether a real Beds24 property id is set
    pub fn beds24_configured(&self) -> bool {
        let prop_id = self.beds24_prop_id.trim();
        !prop_id.is_empty() && prop_id != UNCONFIGURED_PROP_ID
    }
}

/// Parse an optional raw variable, falling back to `default` when unset or blank.
fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("Invalid value for {}: '{}'", key, value)),
    }
}
