//! Core pricing calculation functions.
//!
//! Pure functions for stay pricing math - no I/O.
//! Tax rules: occupancy tax on the FIRST 31 nights only, later nights are exempt.
//! Payment: credit card adds a 3% fee ONLY for 30+ night stays.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pricing::models::NightlyRate;

/// Stays of this many nights or more are long-term.
pub const LONG_TERM_THRESHOLD: usize = 30;

/// Maximum number of nights in one billing period.
pub const BILLING_PERIOD_NIGHTS: usize = 30;

/// Last taxable night of a stay (1-based).
pub const TAX_EXEMPTION_THRESHOLD: usize = 31;

/// Las Vegas transient occupancy tax (13%).
pub const LAS_VEGAS_TAX_RATE: Decimal = dec!(0.13);

/// Credit card surcharge for long-term stays (3%).
pub const CC_FEE_PERCENT: Decimal = dec!(0.03);

/// Round to specified decimal places, halves away from zero.
///
/// Every tax and fee value is rounded independently with this rule before
/// it is added into a total.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use poolhouse_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(0.125), 2), dec!(0.13));
/// assert_eq!(round_money(dec!(-0.125), 2), dec!(-0.13));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum of the nightly rates, unrounded.
pub fn sum_rates(rates: &[NightlyRate]) -> Decimal {
    rates.iter().map(|r| r.rate).sum()
}

/// Whether a stay of `nights` nights is long-term.
pub fn is_long_term(nights: usize) -> bool {
    nights >= LONG_TERM_THRESHOLD
}

/// Number of taxable nights in a run of `nights` nights starting at the
/// 1-based stay night `first_night`.
///
/// Only nights 1..=31 of the whole stay are taxable, so a run that starts
/// after night 31 has none.
pub fn taxable_nights(first_night: usize, nights: usize) -> usize {
    if first_night == 0 || first_night > TAX_EXEMPTION_THRESHOLD {
        return 0;
    }
    let end_exclusive = first_night + nights;
    end_exclusive.min(TAX_EXEMPTION_THRESHOLD + 1) - first_night
}

/// Tax on a taxable subtotal, rounded to cents.
pub fn calculate_tax(taxable_subtotal: Decimal, tax_rate: Decimal) -> Decimal {
    round_money(taxable_subtotal * tax_rate, 2)
}

/// Credit card fee on a total, rounded to cents.
pub fn calculate_cc_fee(total: Decimal) -> Decimal {
    round_money(total * CC_FEE_PERCENT, 2)
}

/// Tax for a whole stay: everything up to night 31 is taxed, the rest is exempt.
pub fn stay_tax(rates: &[NightlyRate], tax_rate: Decimal) -> Decimal {
    let taxable = taxable_nights(1, rates.len());
    calculate_tax(sum_rates(&rates[..taxable]), tax_rate)
}
