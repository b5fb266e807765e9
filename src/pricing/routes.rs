//! Pricing API route handlers

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::QuoteResponse;
use super::services::{calculate_pricing, validate_nightly_rates, validate_tax_rate};

/// Pricing routes, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new().route("/api/pricing/quote", post(quote))
}

/// Quote a stay from its nightly rates
async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    validate_nightly_rates(&request.nightly_rates)?;

    let tax_rate = match request.tax_rate {
        Some(rate) => {
            validate_tax_rate(rate)?;
            rate
        }
        None => state.config.default_tax_rate,
    };

    let breakdown = calculate_pricing(request.nightly_rates, Some(tax_rate));
    tracing::debug!(
        nights = breakdown.nights,
        long_term = breakdown.is_long_term,
        "Quoted stay"
    );

    Ok(Json(breakdown.into()))
}
