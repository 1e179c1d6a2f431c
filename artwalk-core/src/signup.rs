use artwalk_shared::{Booking, Masked};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::tours::BookingRules;
use crate::{CoreError, CoreResult};

/// Signup form as posted by the contact page. Every field is optional at
/// the wire level so that missing fields surface as validation errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub selected_date: Option<String>,
    pub ticket_quantity: Option<i64>,
    pub full_name: Option<String>,
    pub email: Option<Masked<String>>,
    pub phone: Option<Masked<String>>,
    pub note: Option<String>,
    pub newsletter: Option<bool>,
    pub venue: Option<String>,
    pub tour_type: Option<String>,
}

impl SignupRequest {
    /// Checks required fields, email format and ticket quantity, in that
    /// order, and builds the record to persist. Capacity is not checked here.
    pub fn validate(self, rules: &BookingRules) -> CoreResult<Booking> {
        let selected_date = present(self.selected_date);
        let full_name = present(self.full_name);
        // untrimmed: padding around the address makes it invalid, not absent
        let email = self
            .email
            .map(Masked::into_inner)
            .filter(|e| !e.trim().is_empty());
        let phone = present(self.phone.map(Masked::into_inner));

        let (selected_date, full_name, email) = match (selected_date, full_name, email) {
            (Some(s), Some(n), Some(e)) => (s, n, e),
            _ => return Err(missing_fields()),
        };
        if rules.require_phone && phone.is_none() {
            return Err(missing_fields());
        }

        if !is_valid_email(&email) {
            return Err(CoreError::ValidationError("Invalid email address".to_string()));
        }

        let quantity = self.ticket_quantity.unwrap_or(1);
        if !(1..=rules.max_tickets_per_booking).contains(&quantity) {
            return Err(CoreError::ValidationError(format!(
                "Ticket quantity must be between 1 and {}",
                rules.max_tickets_per_booking
            )));
        }

        Ok(Booking {
            id: Uuid::new_v4(),
            selected_date,
            // bounded by max_tickets_per_booking above
            ticket_quantity: quantity as i32,
            full_name,
            email: Masked::new(email),
            phone: phone.map(Masked::new),
            note: present(self.note),
            newsletter: self.newsletter.unwrap_or(false),
            venue: present(self.venue),
            tour_type: present(self.tour_type),
            created_at: Utc::now(),
        })
    }
}

fn missing_fields() -> CoreError {
    CoreError::ValidationError("Missing required fields".to_string())
}

/// Trimmed value, with blank strings treated as absent.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Same acceptance as `^[^\s@]+@[^\s@]+\.[^\s@]+$`: exactly one `@`, no
/// whitespace, a non-empty local part, and a domain with a dot that is
/// neither its first nor its last character.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_pattern_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The `\s` class of ECMAScript patterns. Differs from `char::is_whitespace`:
/// includes U+FEFF, excludes U+0085.
fn is_pattern_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}
