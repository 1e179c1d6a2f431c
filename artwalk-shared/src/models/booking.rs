use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pii::Masked;

/// One signup record. The only persisted entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    /// Tour label the guest picked, e.g. "Pilot walk #1 - Saturday 14:00".
    /// Bookings are grouped per tour by prefix match on this label.
    pub selected_date: String,
    pub ticket_quantity: i32,
    pub full_name: String,
    pub email: Masked<String>,
    pub phone: Option<Masked<String>>,
    pub note: Option<String>,
    pub newsletter: bool,
    pub venue: Option<String>,
    pub tour_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn belongs_to(&self, tour_label: &str) -> bool {
        self.selected_date.starts_with(tour_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Booking {
        Booking {
            id: Uuid::new_v4(),
            selected_date: "Pilot walk #1 - Saturday".to_string(),
            ticket_quantity: 2,
            full_name: "Jane Doe".to_string(),
            email: Masked::new("jane@example.com".to_string()),
            phone: None,
            note: Some("Wheelchair access".to_string()),
            newsletter: true,
            venue: Some("louisiana".to_string()),
            tour_type: Some("regular".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn serializes_camel_case_with_contact_details() {
        let booking = sample();
        let value = serde_json::to_value(&booking).unwrap();

        assert_eq!(value["selectedDate"], json!("Pilot walk #1 - Saturday"));
        assert_eq!(value["ticketQuantity"], json!(2));
        assert_eq!(value["email"], json!("jane@example.com"));
        assert_eq!(value["phone"], json!(null));
        assert_eq!(value["tourType"], json!("regular"));
    }

    #[test]
    fn debug_output_masks_email() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("jane@example.com"));
    }

    #[test]
    fn groups_by_label_prefix() {
        let booking = sample();
        assert!(booking.belongs_to("Pilot walk #1"));
        assert!(!booking.belongs_to("Pilot walk #2"));
    }
}
