use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get},
    Json, Router,
};
use artwalk_core::Availability;
use artwalk_shared::Booking;
use serde::Serialize;
use uuid::Uuid;

use crate::{error::AppError, middleware::admin_auth_middleware, state::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourSummary {
    pub label: String,
    #[serde(flatten)]
    pub availability: Availability,
}

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/admin/submissions", get(list_submissions))
        .route("/api/admin/submissions/{id}", delete(delete_submission))
        .route("/api/admin/summary", get(tour_summary))
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware))
}

/// GET /api/admin/submissions
async fn list_submissions(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state
        .bookings
        .list_bookings()
        .await
        .map_err(|e| state.reject(e, "Failed to load submissions"))?;

    Ok(Json(bookings))
}

/// DELETE /api/admin/submissions/{id}
async fn delete_submission(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id.map_err(|_| AppError::ValidationError("Invalid submission id".to_string()))?;

    state
        .bookings
        .delete_booking(id)
        .await
        .map_err(|e| state.reject(e, "Failed to delete submission"))?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admin/summary
async fn tour_summary(State(state): State<AppState>) -> Result<Json<Vec<TourSummary>>, AppError> {
    let tallies = state
        .bookings
        .summary()
        .await
        .map_err(|e| state.reject(e, "Failed to check availability"))?;

    let summary = tallies
        .into_iter()
        .map(|availability| TourSummary {
            label: state
                .bookings
                .catalog()
                .get(&availability.tour_id)
                .map(|t| t.label.clone())
                .unwrap_or_default(),
            availability,
        })
        .collect();

    Ok(Json(summary))
}
