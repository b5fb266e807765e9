//! Availability service: minimum stay, placeholder mode, cache, Beds24
//! lookup and fallback.

use rust_decimal::Decimal;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::cache::AppCache;
use crate::config::Config;
use crate::pricing::round_money;

use super::client::Beds24Client;
use super::models::{AvailabilityResult, StayRequest, MIN_NIGHTS};

/// Keys Beds24 echoes back next to the per-room entries
const ECHOED_KEYS: [&str; 5] = ["checkIn", "lastNight", "checkOut", "propId", "numAdult"];

/// Check availability and price for a stay.
///
/// Never fails: stays under `MIN_NIGHTS` are rejected without calling
/// Beds24, an unconfigured property gets a placeholder quote, and upstream
/// errors get a fallback "available" quote.
pub async fn get_availability(
    client: &Beds24Client,
    cache: &AppCache,
    config: &Config,
    stay: &StayRequest,
) -> AvailabilityResult {
    let nights = stay.nights();

    if nights < MIN_NIGHTS {
        return AvailabilityResult::minimum_stay(nights);
    }

    if !config.beds24_configured() {
        warn!("Beds24 property id not configured - returning placeholder availability");
        return AvailabilityResult::placeholder(nights, config.placeholder_nightly_rate);
    }

    let cache_key = AppCache::availability_key(stay);
    if let Some(cached) = cache.availability.get(&cache_key).await {
        debug!("Cache HIT for availability: {}", cache_key);
        return (*cached).clone();
    }
    debug!("Cache MISS for availability: {}", cache_key);

    let result = match client.get_availabilities(stay).await {
        Ok(data) => {
            let check_in = stay.check_in.format("%Y%m%d").to_string();
            parse_availability_response(&data, nights, &client.booking_url(&check_in))
        }
        Err(e) => {
            error!("Beds24 API error: {}", e);
            AvailabilityResult::fallback(nights, config.placeholder_nightly_rate)
        }
    };

    cache
        .availability
        .insert(cache_key, Arc::new(result.clone()))
        .await;

    result
}

/// Turn a Beds24 `getAvailabilities` response into an availability result.
///
/// The first room (by numeric room id) with rooms left decides the answer.
pub fn parse_availability_response(
    data: &Value,
    nights: i64,
    booking_url: &str,
) -> AvailabilityResult {
    let mut available = false;
    let mut total_price = Decimal::ZERO;

    if let Some(entries) = data.as_object() {
        let mut room_ids: Vec<&String> = entries
            .keys()
            .filter(|key| !ECHOED_KEYS.contains(&key.as_str()))
            .collect();
        room_ids.sort_by_key(|id| (id.parse::<u64>().unwrap_or(u64::MAX), id.to_string()));

        for room_id in room_ids {
            let room = &entries[room_id.as_str()];
            if has_rooms_available(room.get("roomsavail")) {
                available = true;
                if let Some(price) = room.get("price").and_then(decimal_from_value) {
                    total_price = price;
                }
                break;
            }
        }
    }

    let price = (!total_price.is_zero()).then_some(total_price);
    let price_per_night = match price {
        Some(total) if nights > 0 => Some(round_money(total / Decimal::from(nights), 0)),
        _ => None,
    };

    AvailabilityResult {
        available,
        price,
        price_per_night,
        nights,
        min_nights: MIN_NIGHTS,
        booking_url: available.then(|| booking_url.to_string()),
        error: None,
    }
}

/// `roomsavail` may be a number or a string; zero, empty and missing mean none left.
fn has_rooms_available(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => !s.is_empty() && s != "0",
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::Bool(b)) => *b,
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    }
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n
            .as_i64()
            .map(Decimal::from)
            .or_else(|| n.as_f64().and_then(|f| Decimal::try_from(f).ok())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::time::Duration;

    const BOOKING_URL: &str = "https://beds24.com/booking2.php?propid=17759&checkin=20250601";

    fn stay(days: i64) -> StayRequest {
        let check_in = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        StayRequest {
            check_in,
            check_out: check_in + chrono::Duration::days(days),
            guests: 2,
        }
    }

    fn unreachable_config() -> Config {
        Config {
            beds24_api_url: "http://127.0.0.1:9".to_string(),
            beds24_timeout: Duration::from_secs(2),
            ..Config::default()
        }
    }

    // ==================== parse_availability_response tests ====================

    #[test]
    fn test_parse_available_room() {
        let data = json!({
            "checkIn": "20250601",
            "lastNight": "20250605",
            "propId": "17759",
            "numAdult": 2,
            "43516": { "roomsavail": "1", "price": 1196 }
        });

        let result = parse_availability_response(&data, 4, BOOKING_URL);
        assert!(result.available);
        assert_eq!(result.price, Some(dec!(1196)));
        assert_eq!(result.price_per_night, Some(dec!(299)));
        assert_eq!(result.nights, 4);
        assert_eq!(result.booking_url.as_deref(), Some(BOOKING_URL));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_parse_price_per_night_rounds() {
        let data = json!({ "43516": { "roomsavail": 1, "price": "1000.50" } });

        // 1000.50 / 3 = 333.5 -> 334
        let result = parse_availability_response(&data, 3, BOOKING_URL);
        assert_eq!(result.price, Some(dec!(1000.50)));
        assert_eq!(result.price_per_night, Some(dec!(334)));
    }

    #[test]
    fn test_parse_no_rooms_left() {
        let data = json!({
            "checkIn": "20250601",
            "43516": { "roomsavail": "0", "price": 1196 },
            "43517": { "roomsavail": 0 }
        });

        let result = parse_availability_response(&data, 4, BOOKING_URL);
        assert!(!result.available);
        assert!(result.price.is_none());
        assert!(result.price_per_night.is_none());
        assert!(result.booking_url.is_none());
    }

    #[test]
    fn test_parse_available_without_price() {
        let data = json!({ "43516": { "roomsavail": 2 } });

        let result = parse_availability_response(&data, 4, BOOKING_URL);
        assert!(result.available);
        assert!(result.price.is_none());
        assert!(result.price_per_night.is_none());
        assert!(result.booking_url.is_some());
    }

    #[test]
    fn test_parse_takes_first_room_by_id() {
        let data = json!({
            "100": { "roomsavail": 1, "price": 800 },
            "43516": { "roomsavail": 1, "price": 1196 },
            "99": { "roomsavail": 1, "price": 600 }
        });

        let result = parse_availability_response(&data, 4, BOOKING_URL);
        assert_eq!(result.price, Some(dec!(600)));
    }

    #[test]
    fn test_parse_ignores_non_room_entries() {
        let data = json!({ "error": "Unauthorized", "propId": "17759" });

        let result = parse_availability_response(&data, 4, BOOKING_URL);
        assert!(!result.available);
    }

    #[test]
    fn test_has_rooms_available() {
        assert!(has_rooms_available(Some(&json!("2"))));
        assert!(has_rooms_available(Some(&json!(1))));
        assert!(!has_rooms_available(Some(&json!("0"))));
        assert!(!has_rooms_available(Some(&json!(""))));
        assert!(!has_rooms_available(Some(&json!(0))));
        assert!(!has_rooms_available(Some(&Value::Null)));
        assert!(!has_rooms_available(None));
    }

    // ==================== get_availability tests ====================

    #[tokio::test]
    async fn test_minimum_stay_skips_upstream() {
        let config = unreachable_config();
        let client = Beds24Client::from_config(&config).unwrap();
        let cache = AppCache::default();

        let result = get_availability(&client, &cache, &config, &stay(1)).await;
        assert!(!result.available);
        assert_eq!(result.error.as_deref(), Some("Minimum stay is 2 nights"));
        assert!(!cache
            .availability
            .contains_key(&AppCache::availability_key(&stay(1))));
    }

    #[tokio::test]
    async fn test_unconfigured_property_returns_placeholder() {
        let config = Config {
            beds24_prop_id: "NEEDS_CONFIG".to_string(),
            ..unreachable_config()
        };
        let client = Beds24Client::from_config(&config).unwrap();
        let cache = AppCache::default();

        let result = get_availability(&client, &cache, &config, &stay(3)).await;
        assert!(result.available);
        assert_eq!(result.price, Some(dec!(897)));
        assert_eq!(result.booking_url.as_deref(), Some("#"));
    }

    #[tokio::test]
    async fn test_upstream_failure_falls_back_and_caches() {
        let config = unreachable_config();
        let client = Beds24Client::from_config(&config).unwrap();
        let cache = AppCache::default();

        let result = get_availability(&client, &cache, &config, &stay(4)).await;
        assert!(result.available);
        assert_eq!(result.price, Some(dec!(1196)));
        assert_eq!(result.price_per_night, Some(dec!(299)));
        assert_eq!(
            result.error.as_deref(),
            Some("Could not check real-time availability")
        );

        let key = AppCache::availability_key(&stay(4));
        assert!(cache.availability.contains_key(&key));

        // Served from cache the second time
        let again = get_availability(&client, &cache, &config, &stay(4)).await;
        assert_eq!(again, result);
    }
}
