//! Router assembly

pub mod health;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{availability, pricing, AppState};

/// Build the application router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .merge(pricing::router())
        .merge(availability::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
