use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use artwalk_core::SignupRequest;
use serde::Serialize;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize)]
struct SignupResponse {
    success: bool,
    id: Uuid,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/signup", post(create_signup))
}

/// POST /api/signup
async fn create_signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!("Unreadable signup body: {}", rejection.body_text());
        AppError::ValidationError("Invalid request body".to_string())
    })?;

    let id = state
        .bookings
        .sign_up(req)
        .await
        .map_err(|e| state.reject(e, "Failed to save submission"))?;

    Ok((StatusCode::CREATED, Json(SignupResponse { success: true, id })))
}
