//! Response DTOs for pricing API endpoints.

use serde::Serialize;

use super::format::format_currency;
use super::models::PricingBreakdown;

/// Quote returned to the booking widget: the breakdown plus display strings
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub breakdown: PricingBreakdown,
    pub formatted: FormattedTotals,
}

/// Dollar-formatted totals for display
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub subtotal: String,
    pub tax_amount: String,
    pub total_before_fees: String,
    pub cc_fee_amount: String,
    #[serde(rename = "totalWithCCFee")]
    pub total_with_cc_fee: String,
    #[serde(rename = "totalACH")]
    pub total_ach: String,
}

impl From<&PricingBreakdown> for FormattedTotals {
    fn from(breakdown: &PricingBreakdown) -> Self {
        Self {
            subtotal: format_currency(breakdown.subtotal),
            tax_amount: format_currency(breakdown.tax_amount),
            total_before_fees: format_currency(breakdown.total_before_fees),
            cc_fee_amount: format_currency(breakdown.cc_fee_amount),
            total_with_cc_fee: format_currency(breakdown.total_with_cc_fee),
            total_ach: format_currency(breakdown.total_ach),
        }
    }
}

impl From<PricingBreakdown> for QuoteResponse {
    fn from(breakdown: PricingBreakdown) -> Self {
        let formatted = FormattedTotals::from(&breakdown);
        Self {
            breakdown,
            formatted,
        }
    }
}
