use axum::{extract::Path, routing::get, Json, Router};
use artwalk_core::venues::{self, TourType, Venue};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/venues", get(list_venues))
        .route("/api/venues/{slug}", get(get_venue))
        .route("/api/tour-types", get(list_tour_types))
        .route("/api/tour-types/{id}", get(get_tour_type))
}

async fn list_venues() -> Json<&'static [Venue]> {
    Json(venues::VENUES)
}

async fn get_venue(Path(slug): Path<String>) -> Result<Json<&'static Venue>, AppError> {
    venues::venue_by_slug(&slug)
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Venue {} not found", slug)))
}

async fn list_tour_types() -> Json<&'static [TourType]> {
    Json(venues::TOUR_TYPES)
}

async fn get_tour_type(Path(id): Path<String>) -> Result<Json<&'static TourType>, AppError> {
    venues::tour_type_by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Tour type {} not found", id)))
}
