use serde::{Deserialize, Serialize};

/// A scheduled guided walk with a fixed ticket capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    /// Prefix every booking for this tour carries in its `selected_date`.
    pub label: String,
    #[serde(default = "default_max_tickets")]
    pub max_tickets: i64,
}

impl Tour {
    pub fn new(id: &str, label: &str, max_tickets: i64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            max_tickets,
        }
    }
}

/// Booking rules loaded from the `[booking]` config section.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRules {
    #[serde(default = "default_max_per_booking")]
    pub max_tickets_per_booking: i64,
    #[serde(default)]
    pub require_phone: bool,
    #[serde(default = "default_enforce_capacity")]
    pub enforce_capacity: bool,
    #[serde(default = "default_tours")]
    pub tours: Vec<Tour>,
}

fn default_max_tickets() -> i64 { 10 }
fn default_max_per_booking() -> i64 { 2 }
fn default_enforce_capacity() -> bool { true }

fn default_tours() -> Vec<Tour> {
    vec![
        Tour::new("walk-1", "Pilot walk #1", default_max_tickets()),
        Tour::new("walk-2", "Pilot walk #2", default_max_tickets()),
    ]
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            max_tickets_per_booking: default_max_per_booking(),
            require_phone: false,
            enforce_capacity: default_enforce_capacity(),
            tours: default_tours(),
        }
    }
}

/// Lookup over the configured tours.
#[derive(Debug, Clone)]
pub struct TourCatalog {
    tours: Vec<Tour>,
}

impl TourCatalog {
    pub fn new(tours: Vec<Tour>) -> Self {
        Self { tours }
    }

    pub fn get(&self, id: &str) -> Option<&Tour> {
        self.tours.iter().find(|t| t.id == id)
    }

    /// Tour a selection label belongs to, if any. Venue inquiries from the
    /// contact form ("Louisiana Museum of Modern Art - regular") match none.
    pub fn for_selection(&self, selected_date: &str) -> Option<&Tour> {
        self.tours.iter().find(|t| selected_date.starts_with(&t.label))
    }

    pub fn all(&self) -> &[Tour] {
        &self.tours
    }
}

impl Default for TourCatalog {
    fn default() -> Self {
        Self::new(default_tours())
    }
}
