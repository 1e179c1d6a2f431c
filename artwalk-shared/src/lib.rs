pub mod models;
pub mod pii;

pub use models::booking::Booking;
pub use pii::Masked;
