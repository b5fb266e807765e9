//! Pricing engine module for the Pool House booking widget.
//!
//! Quotes a stay from its nightly rates: Las Vegas occupancy tax with the
//! 31-night tax holiday, the long-term card fee, and the 30-night billing
//! schedule for long stays.

pub mod calculators;
pub mod format;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{round_money, CC_FEE_PERCENT, LAS_VEGAS_TAX_RATE};
pub use format::format_currency;
pub use models::{BillingPeriod, NightlyRate, PricingBreakdown};
pub use routes::router;
pub use services::{calculate_billing_schedule, calculate_pricing, PricingError};
