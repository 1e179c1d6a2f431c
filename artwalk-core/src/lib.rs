pub mod availability;
pub mod booking;
pub mod repository;
pub mod signup;
pub mod tours;
pub mod venues;

pub use availability::Availability;
pub use booking::BookingService;
pub use signup::SignupRequest;
pub use tours::{BookingRules, Tour, TourCatalog};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Only {available} ticket(s) available")]
    CapacityExceeded { available: i64 },
    #[error("{0}")]
    NotFound(String),
    #[error("Storage failure: {0}")]
    StorageError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
