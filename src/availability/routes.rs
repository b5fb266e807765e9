//! Availability and room route handlers

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::models::{parse_stay_date, room_details, AvailabilityQuery, AvailabilityResult, RoomInfo, StayRequest};
use super::services;

const DEFAULT_GUESTS: u32 = 2;

/// Availability routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/availability", get(availability))
        .route("/api/rooms/:room_id", get(room))
}

/// Availability check for the booking widget
async fn availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResult>> {
    let stay = stay_from_query(query)?;
    let result = services::get_availability(&state.beds24, &state.cache, &state.config, &stay).await;
    Ok(Json(result))
}

/// Room details
async fn room(Path(room_id): Path<String>) -> Json<RoomInfo> {
    Json(room_details(&room_id))
}

fn stay_from_query(query: AvailabilityQuery) -> Result<StayRequest> {
    let (check_in, check_out) = match (query.check_in.as_deref(), query.check_out.as_deref()) {
        (Some(check_in), Some(check_out)) if !check_in.is_empty() && !check_out.is_empty() => {
            (check_in, check_out)
        }
        _ => {
            return Err(AppError::BadRequest(
                "checkIn and checkOut are required".to_string(),
            ))
        }
    };

    match (parse_stay_date(check_in), parse_stay_date(check_out)) {
        (Some(check_in), Some(check_out)) => Ok(StayRequest {
            check_in,
            check_out,
            guests: query
                .guests
                .as_deref()
                .and_then(|guests| guests.trim().parse().ok())
                .unwrap_or(DEFAULT_GUESTS),
        }),
        _ => Err(AppError::BadRequest(
            "checkIn and checkOut must be dates in YYYYMMDD format".to_string(),
        )),
    }
}
