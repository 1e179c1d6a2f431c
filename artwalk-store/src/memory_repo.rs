use artwalk_core::availability::remaining;
use artwalk_core::repository::{BookingRepository, CapacityOutcome, RepositoryError};
use artwalk_shared::Booking;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local store, used when no database is configured and in tests.
#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
        }
    }
}

fn sold(bookings: &[Booking], label: &str) -> i64 {
    bookings
        .iter()
        .filter(|b| b.belongs_to(label))
        .map(|b| i64::from(b.ticket_quantity))
        .sum()
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn tickets_sold(&self, label: &str) -> Result<i64, RepositoryError> {
        Ok(sold(&self.bookings.read().await, label))
    }

    async fn insert(&self, booking: &Booking) -> Result<(), RepositoryError> {
        self.bookings.write().await.push(booking.clone());
        Ok(())
    }

    async fn insert_within_capacity(
        &self,
        booking: &Booking,
        label: &str,
        max_tickets: i64,
    ) -> Result<CapacityOutcome, RepositoryError> {
        let mut bookings = self.bookings.write().await;

        let available = remaining(max_tickets, sold(&bookings, label));
        if available < i64::from(booking.ticket_quantity) {
            return Ok(CapacityOutcome::Insufficient { available });
        }

        bookings.push(booking.clone());
        Ok(CapacityOutcome::Inserted)
    }

    async fn list(&self) -> Result<Vec<Booking>, RepositoryError> {
        let mut out: Vec<Booking> = self.bookings.read().await.iter().rev().cloned().collect();
        // stable: equal timestamps keep most-recent-insert first
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut bookings = self.bookings.write().await;
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        Ok(bookings.len() < before)
    }
}
