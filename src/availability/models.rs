//! Availability DTOs and the static room table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Minimum stay length in nights
pub const MIN_NIGHTS: i64 = 2;

/// Availability and price summary for a requested stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResult {
    pub available: bool,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_per_night: Option<Decimal>,
    pub nights: i64,
    pub min_nights: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AvailabilityResult {
    /// Stay shorter than `MIN_NIGHTS`
    pub fn minimum_stay(nights: i64) -> Self {
        Self {
            available: false,
            price: None,
            price_per_night: None,
            nights,
            min_nights: MIN_NIGHTS,
            booking_url: None,
            error: Some(format!("Minimum stay is {} nights", MIN_NIGHTS)),
        }
    }

    /// Quote used while no Beds24 property is configured
    pub fn placeholder(nights: i64, nightly_rate: Decimal) -> Self {
        Self {
            available: true,
            price: Some(nightly_rate * Decimal::from(nights)),
            price_per_night: Some(nightly_rate),
            nights,
            min_nights: MIN_NIGHTS,
            booking_url: Some("#".to_string()),
            error: None,
        }
    }

    /// Quote used when Beds24 could not be reached
    pub fn fallback(nights: i64, nightly_rate: Decimal) -> Self {
        Self {
            available: true,
            price: Some(nightly_rate * Decimal::from(nights)),
            price_per_night: Some(nightly_rate),
            nights,
            min_nights: MIN_NIGHTS,
            booking_url: None,
            error: Some("Could not check real-time availability".to_string()),
        }
    }
}

/// A validated availability request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl StayRequest {
    /// Nights between check-in and check-out (negative if reversed)
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Query string of `GET /api/availability`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    /// Kept raw: blank or junk values fall back to the default guest count
    #[serde(default)]
    pub guests: Option<String>,
}

/// Parse a `YYYYMMDD` stay date
pub fn parse_stay_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y%m%d").ok()
}

/// Room details for the booking page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfo {
    pub name: &'static str,
    pub max_guests: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_price: Decimal,
}

/// Look up a Beds24 room, falling back to the generic pool house entry
pub fn room_details(room_id: &str) -> RoomInfo {
    match room_id {
        "43516" => RoomInfo {
            name: "Private Pool House",
            max_guests: 12,
            min_price: dec!(299),
        },
        _ => RoomInfo {
            name: "Pool House",
            max_guests: 12,
            min_price: dec!(299),
        },
    }
}
