use artwalk_shared::Booking;
use async_trait::async_trait;
use uuid::Uuid;

pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;

/// Result of an insert that had to respect a tour's capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapacityOutcome {
    Inserted,
    Insufficient { available: i64 },
}

/// Storage for booking records.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Sum of `ticket_quantity` over bookings whose selection starts with `label`.
    async fn tickets_sold(&self, label: &str) -> Result<i64, RepositoryError>;

    async fn insert(&self, booking: &Booking) -> Result<(), RepositoryError>;

    /// Inserts `booking` only if the tickets already sold under `label` plus
    /// its quantity stay within `max_tickets`. The check and the write are
    /// one atomic step: concurrent callers for the same label are serialized.
    async fn insert_within_capacity(
        &self,
        booking: &Booking,
        label: &str,
        max_tickets: i64,
    ) -> Result<CapacityOutcome, RepositoryError>;

    /// All bookings, newest first.
    async fn list(&self) -> Result<Vec<Booking>, RepositoryError>;

    /// Returns false when no booking had this id.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
