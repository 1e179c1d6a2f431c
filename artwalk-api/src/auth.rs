use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{error::AppError, middleware::issue_admin_token, state::AppState};

#[derive(Debug, Deserialize)]
struct LoginRequest {
    password: String,
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/admin/login", post(login_admin))
}

async fn login_admin(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!("Unreadable login body: {}", rejection.body_text());
        AppError::ValidationError("Invalid request body".to_string())
    })?;

    if req.password != state.auth.admin_password {
        warn!("Rejected admin login");
        return Err(AppError::AuthenticationError("Incorrect password".to_string()));
    }

    let token = issue_admin_token(&state.auth).map_err(|e| AppError::InternalServerError {
        message: "Token encoding failed".to_string(),
        details: state.expose_error_details.then(|| e.to_string()),
    })?;

    Ok(Json(AuthResponse { token }))
}
