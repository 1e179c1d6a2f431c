use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use artwalk_core::Availability;
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailabilityQuery {
    tour_id: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/availability", get(get_availability))
}

/// GET /api/availability?tourId=walk-1
async fn get_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Availability>, AppError> {
    let availability = state
        .bookings
        .availability(query.tour_id.as_deref())
        .await
        .map_err(|e| state.reject(e, "Failed to check availability"))?;

    Ok(Json(availability))
}
