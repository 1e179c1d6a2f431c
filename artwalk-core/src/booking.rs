use std::sync::Arc;

use artwalk_shared::Booking;
use tracing::{info, warn};
use uuid::Uuid;

use crate::availability::Availability;
use crate::repository::{BookingRepository, CapacityOutcome, RepositoryError};
use crate::signup::SignupRequest;
use crate::tours::{BookingRules, Tour, TourCatalog};
use crate::{CoreError, CoreResult};

/// Availability queries and the signup writer over a booking repository.
#[derive(Clone)]
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
    catalog: TourCatalog,
    rules: BookingRules,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>, rules: BookingRules) -> Self {
        Self {
            repo,
            catalog: TourCatalog::new(rules.tours.clone()),
            rules,
        }
    }

    pub fn catalog(&self) -> &TourCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &BookingRules {
        &self.rules
    }

    /// Tickets sold and remaining capacity for `tour_id`.
    pub async fn availability(&self, tour_id: Option<&str>) -> CoreResult<Availability> {
        let tour_id = tour_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CoreError::ValidationError("Tour ID is required".to_string()))?;

        let tour = self
            .catalog
            .get(tour_id)
            .ok_or_else(|| CoreError::ValidationError(format!("Unknown tour: {}", tour_id)))?;

        self.availability_for(tour).await
    }

    async fn availability_for(&self, tour: &Tour) -> CoreResult<Availability> {
        let sold = self.repo.tickets_sold(&tour.label).await.map_err(storage)?;
        Ok(Availability::compute(tour, sold))
    }

    /// Availability for every configured tour, in catalog order.
    pub async fn summary(&self) -> CoreResult<Vec<Availability>> {
        let mut out = Vec::with_capacity(self.catalog.all().len());
        for tour in self.catalog.all() {
            out.push(self.availability_for(tour).await?);
        }
        Ok(out)
    }

    /// Validates and persists a signup, returning the new booking id.
    pub async fn sign_up(&self, request: SignupRequest) -> CoreResult<Uuid> {
        let booking = request.validate(&self.rules)?;

        match self.catalog.for_selection(&booking.selected_date) {
            Some(tour) if self.rules.enforce_capacity => {
                let outcome = self
                    .repo
                    .insert_within_capacity(&booking, &tour.label, tour.max_tickets)
                    .await
                    .map_err(storage)?;

                if let CapacityOutcome::Insufficient { available } = outcome {
                    warn!(
                        tour = %tour.id,
                        requested = booking.ticket_quantity,
                        available,
                        "Signup rejected: not enough tickets"
                    );
                    return Err(CoreError::CapacityExceeded { available });
                }
            }
            _ => {
                self.repo.insert(&booking).await.map_err(storage)?;
            }
        }

        info!(
            id = %booking.id,
            email = %booking.email.email_hint(),
            tickets = booking.ticket_quantity,
            "Signup stored"
        );
        Ok(booking.id)
    }

    pub async fn list_bookings(&self) -> CoreResult<Vec<Booking>> {
        self.repo.list().await.map_err(storage)
    }

    pub async fn delete_booking(&self, id: Uuid) -> CoreResult<()> {
        if self.repo.delete(id).await.map_err(storage)? {
            info!(%id, "Booking deleted");
            Ok(())
        } else {
            Err(CoreError::NotFound(format!("Booking {} not found", id)))
        }
    }
}

fn storage(err: RepositoryError) -> CoreError {
    CoreError::StorageError(err.to_string())
}
