//! Stay pricing services.
//!
//! Builds the full quote for a stay and, for long-term stays, the monthly
//! billing schedule. Both are pure and infallible; input validation is a
//! separate step the HTTP layer runs first.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::calculators::{
    calculate_cc_fee, calculate_tax, is_long_term, stay_tax, sum_rates, taxable_nights,
    BILLING_PERIOD_NIGHTS, CC_FEE_PERCENT, LAS_VEGAS_TAX_RATE,
};
use super::models::{BillingPeriod, NightlyRate, PricingBreakdown};

/// Rejected pricing input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Negative rate for night {date}")]
    NegativeRate { date: String },

    #[error("Invalid date '{date}', expected YYYY-MM-DD")]
    InvalidDate { date: String },

    #[error("Night {date} does not follow {previous}")]
    NotChronological { previous: String, date: String },

    #[error("Tax rate {0} must be between 0 and 1")]
    InvalidTaxRate(Decimal),
}

/// Calculate the pricing breakdown for a stay.
///
/// # Arguments
/// * `nightly_rates` - Per-night rates, check-in night first
/// * `tax_rate_override` - Tax rate to use instead of the Las Vegas default
///
/// # Returns
/// `PricingBreakdown` with totals, card fee and (for 30+ nights) the billing schedule
pub fn calculate_pricing(
    nightly_rates: Vec<NightlyRate>,
    tax_rate_override: Option<Decimal>,
) -> PricingBreakdown {
    let nights = nightly_rates.len();
    let long_term = is_long_term(nights);
    let tax_rate = tax_rate_override.unwrap_or(LAS_VEGAS_TAX_RATE);

    let subtotal = sum_rates(&nightly_rates);
    let tax_amount = stay_tax(&nightly_rates, tax_rate);
    let total_before_fees = subtotal + tax_amount;

    // Card fee only applies to long-term stays
    let (cc_fee_percent, cc_fee_amount) = if long_term {
        (CC_FEE_PERCENT, calculate_cc_fee(total_before_fees))
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let billing_schedule = long_term.then(|| calculate_billing_schedule(&nightly_rates, tax_rate));

    PricingBreakdown {
        nights,
        nightly_rates,
        subtotal,
        tax_rate,
        tax_amount,
        total_before_fees,
        cc_fee_percent,
        cc_fee_amount,
        total_with_cc_fee: total_before_fees + cc_fee_amount,
        total_ach: total_before_fees,
        is_long_term: long_term,
        billing_schedule,
    }
}

/// Split a stay into consecutive billing periods of at most 30 nights.
///
/// Each period is taxed against the stay-wide night count (nights after
/// the 31st are exempt no matter which period they fall in) and carries
/// its own card fee.
///
/// The period holding the stay's last taxable night takes the stay tax
/// minus the tax already billed, so period taxes always add up to the
/// stay tax to the cent.
pub fn calculate_billing_schedule(
    nightly_rates: &[NightlyRate],
    tax_rate: Decimal,
) -> Vec<BillingPeriod> {
    let stay_tax_amount = stay_tax(nightly_rates, tax_rate);
    let stay_taxable_nights = taxable_nights(1, nightly_rates.len());

    let mut periods = Vec::with_capacity(nightly_rates.len().div_ceil(BILLING_PERIOD_NIGHTS));
    let mut nights_processed = 0;
    let mut tax_billed = Decimal::ZERO;

    for (index, period_rates) in nightly_rates.chunks(BILLING_PERIOD_NIGHTS).enumerate() {
        let period_number = index as u32 + 1;
        let period_nights = period_rates.len();
        let subtotal = sum_rates(period_rates);

        let taxable = taxable_nights(nights_processed + 1, period_nights);
        let tax_amount = if taxable == 0 {
            Decimal::ZERO
        } else if nights_processed + period_nights >= stay_taxable_nights {
            stay_tax_amount - tax_billed
        } else {
            calculate_tax(sum_rates(&period_rates[..taxable]), tax_rate)
        };
        tax_billed += tax_amount;

        let total = subtotal + tax_amount;
        let cc_fee = calculate_cc_fee(total);

        periods.push(BillingPeriod {
            period_number,
            start_date: period_rates[0].date.clone(),
            end_date: period_rates[period_nights - 1].date.clone(),
            nights: period_nights,
            subtotal,
            tax_amount,
            total,
            total_with_cc_fee: total + cc_fee,
            is_first_payment: period_number == 1,
            is_prorated: period_number > 1 && period_nights < BILLING_PERIOD_NIGHTS,
        });

        nights_processed += period_nights;
    }

    periods
}

/// Check that nightly rates are usable for a quote.
///
/// Rejects negative rates, dates that are not `YYYY-MM-DD` and sequences
/// that are not strictly chronological. `calculate_pricing` never calls
/// this itself.
pub fn validate_nightly_rates(nightly_rates: &[NightlyRate]) -> Result<(), PricingError> {
    let mut previous: Option<(NaiveDate, &str)> = None;

    for night in nightly_rates {
        if night.rate < Decimal::ZERO {
            return Err(PricingError::NegativeRate {
                date: night.date.clone(),
            });
        }

        let date = NaiveDate::parse_from_str(&night.date, "%Y-%m-%d").map_err(|_| {
            PricingError::InvalidDate {
                date: night.date.clone(),
            }
        })?;

        if let Some((previous_date, previous_key)) = previous {
            if date <= previous_date {
                return Err(PricingError::NotChronological {
                    previous: previous_key.to_string(),
                    date: night.date.clone(),
                });
            }
        }
        previous = Some((date, &night.date));
    }

    Ok(())
}

/// Check a tax rate override is a fraction between 0 and 1.
pub fn validate_tax_rate(tax_rate: Decimal) -> Result<(), PricingError> {
    if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE {
        return Err(PricingError::InvalidTaxRate(tax_rate));
    }
    Ok(())
}
