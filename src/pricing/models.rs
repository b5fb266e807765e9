//! Pricing value types.
//!
//! Everything here is an immutable computed value: built fresh for each
//! quote and serialized straight to the booking widget as camelCase JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rate for a single night of a stay.
///
/// `date` is an opaque key (normally an ISO date). Sequences of nightly
/// rates are chronological, first element = check-in night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightlyRate {
    pub date: String,
    pub rate: Decimal,
}

impl NightlyRate {
    pub fn new(date: impl Into<String>, rate: Decimal) -> Self {
        Self {
            date: date.into(),
            rate,
        }
    }
}

/// Full pricing breakdown for a stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub nights: usize,
    pub nightly_rates: Vec<NightlyRate>,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_before_fees: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cc_fee_percent: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cc_fee_amount: Decimal,
    #[serde(rename = "totalWithCCFee", with = "rust_decimal::serde::str")]
    pub total_with_cc_fee: Decimal,
    /// Bank transfer total, no card surcharge
    #[serde(rename = "totalACH", with = "rust_decimal::serde::str")]
    pub total_ach: Decimal,
    pub is_long_term: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_schedule: Option<Vec<BillingPeriod>>,
}

/// One payment of a long-term stay, covering at most 30 consecutive nights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPeriod {
    pub period_number: u32,
    pub start_date: String,
    pub end_date: String,
    pub nights: usize,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(rename = "totalWithCCFee", with = "rust_decimal::serde::str")]
    pub total_with_cc_fee: Decimal,
    pub is_first_payment: bool,
    pub is_prorated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_nightly_rate_accepts_number_or_string() {
        let from_number: NightlyRate =
            serde_json::from_str(r#"{"date":"2025-03-01","rate":299}"#).unwrap();
        let from_string: NightlyRate =
            serde_json::from_str(r#"{"date":"2025-03-01","rate":"299.00"}"#).unwrap();

        assert_eq!(from_number.rate, dec!(299));
        assert_eq!(from_string.rate, dec!(299));
        assert_eq!(from_number.date, "2025-03-01");
    }

    #[test]
    fn test_billing_period_field_names() {
        let period = BillingPeriod {
            period_number: 2,
            start_date: "2025-03-31".to_string(),
            end_date: "2025-04-09".to_string(),
            nights: 10,
            subtotal: dec!(500),
            tax_amount: dec!(6.50),
            total: dec!(506.50),
            total_with_cc_fee: dec!(521.70),
            is_first_payment: false,
            is_prorated: true,
        };

        let json = serde_json::to_value(&period).unwrap();
        assert_eq!(json["periodNumber"], 2);
        assert_eq!(json["startDate"], "2025-03-31");
        assert_eq!(json["taxAmount"], "6.50");
        assert_eq!(json["totalWithCCFee"], "521.70");
        assert_eq!(json["isFirstPayment"], false);
        assert_eq!(json["isProrated"], true);
    }
}
