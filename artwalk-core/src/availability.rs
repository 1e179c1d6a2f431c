use serde::Serialize;

use crate::tours::Tour;

/// Remaining capacity for one tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub tour_id: String,
    pub total_sold: i64,
    pub available: i64,
    pub max_tickets: i64,
    pub is_sold_out: bool,
}

impl Availability {
    pub fn compute(tour: &Tour, total_sold: i64) -> Self {
        let available = remaining(tour.max_tickets, total_sold);
        Self {
            tour_id: tour.id.clone(),
            total_sold,
            available,
            max_tickets: tour.max_tickets,
            is_sold_out: available == 0,
        }
    }

    pub fn can_fit(&self, quantity: i64) -> bool {
        self.available >= quantity
    }
}

/// `max(0, max_tickets - total_sold)`.
pub fn remaining(max_tickets: i64, total_sold: i64) -> i64 {
    max_tickets.saturating_sub(total_sold).max(0)
}
