use artwalk_core::{BookingService, CoreError};

use crate::error::AppError;

#[derive(Clone)]
pub struct AuthConfig {
    pub admin_password: String,
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub bookings: BookingService,
    pub auth: AuthConfig,
    /// Attach underlying causes to 500 responses (non-production only).
    pub expose_error_details: bool,
}

impl AppState {
    pub fn reject(&self, err: CoreError, context: &str) -> AppError {
        AppError::from_core(err, context, self.expose_error_details)
    }
}
