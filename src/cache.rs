//! In-memory caching using moka
//!
//! Availability answers from Beds24 change slowly relative to how often the
//! booking widget asks, so they are cached per stay for a few minutes.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::availability::models::{AvailabilityResult, StayRequest};

/// Application cache
#[derive(Clone)]
pub struct AppCache {
    /// Availability results (stay key -> result)
    pub availability: Cache<String, Arc<AvailabilityResult>>,
}

impl AppCache {
    /// Create a new cache instance with the given availability TTL
    pub fn new(availability_ttl: Duration) -> Self {
        Self {
            // Availability: 1000 stays, short TTL so new bookings show up quickly
            availability: Cache::builder()
                .max_capacity(1_000)
                .time_to_live(availability_ttl)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            availability_size: self.availability.entry_count(),
        }
    }

    /// Generate cache key for an availability lookup
    pub fn availability_key(stay: &StayRequest) -> String {
        format!(
            "availability:{}:{}:{}",
            stay.check_in.format("%Y%m%d"),
            stay.check_out.format("%Y%m%d"),
            stay.guests
        )
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(5 * 60))
    }
}

/// Cache statistics for the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub availability_size: u64,
}
