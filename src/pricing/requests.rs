//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::NightlyRate;

/// Request to quote a stay
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub nightly_rates: Vec<NightlyRate>,
    /// Overrides the configured default tax rate
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_request_without_tax_rate() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{"nightlyRates":[{"date":"2025-03-01","rate":299},{"date":"2025-03-02","rate":"310.50"}]}"#,
        )
        .unwrap();

        assert_eq!(request.nightly_rates.len(), 2);
        assert_eq!(request.nightly_rates[1].rate, dec!(310.50));
        assert!(request.tax_rate.is_none());
    }

    #[test]
    fn test_quote_request_with_tax_rate() {
        let request: QuoteRequest =
            serde_json::from_str(r#"{"nightlyRates":[],"taxRate":"0.10"}"#).unwrap();

        assert!(request.nightly_rates.is_empty());
        assert_eq!(request.tax_rate, Some(dec!(0.10)));
    }
}
