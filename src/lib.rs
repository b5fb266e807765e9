//! Backend for the Las Vegas Pool House booking widget.
//!
//! - [`pricing`]: stay quotes, occupancy tax, card fee and billing schedule
//! - [`availability`]: Beds24 availability proxy with placeholder fallback

pub mod availability;
pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use availability::{AvailabilityError, Beds24Client};
use cache::AppCache;
use config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: AppCache,
    pub beds24: Beds24Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AvailabilityError> {
        let beds24 = Beds24Client::from_config(&config)?;
        let cache = AppCache::new(config.availability_cache_ttl);

        Ok(Self {
            config: Arc::new(config),
            cache,
            beds24,
        })
    }
}
