use crate::booking::BookingRequest;
use crate::utils::time::calculate_end_time;
use chrono::Utc;
use rand::Rng;
use serde::Serialize;

const LINK_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// In-memory calendar event synthesized for one booking; never persisted
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    /// Present for virtual meetings only
    pub meet_link: Option<String>,
    /// Present for on-site meetings only
    pub location: Option<String>,
}

fn random_token(len: usize, alphabet: &[u8]) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

/// Generate a mock Google Meet link with an xxx-xxxx-xxx token
pub fn generate_meet_link() -> String {
    format!(
        "https://meet.google.com/{}-{}-{}",
        random_token(3, LINK_ALPHABET),
        random_token(4, LINK_ALPHABET),
        random_token(3, LINK_ALPHABET)
    )
}

/// Generate a best-effort unique event id; collisions are not checked
fn generate_event_id() -> String {
    format!(
        "evt_{}_{}",
        Utc::now().timestamp_millis(),
        random_token(6, ID_ALPHABET)
    )
}

impl CalendarEvent {
    /// Synthesize the calendar event for a validated booking.
    ///
    /// Stand-in for a real calendar integration: the meet link and id are
    /// generated locally and nothing is written anywhere.
    pub fn from_booking(booking: &BookingRequest) -> Self {
        let meet_link = booking.is_virtual().then(generate_meet_link);
        let end_time = calculate_end_time(&booking.time, &booking.duration);
        let location = if booking.is_onsite() {
            booking.project_address.clone()
        } else {
            None
        };

        let link_or_location = match &meet_link {
            Some(link) => format!("Google Meet: {}", link),
            None => format!(
                "Location: {}",
                booking.project_address.as_deref().unwrap_or("")
            ),
        };
        let meeting_kind = if booking.is_virtual() {
            "Virtual Meeting (Google Meet)"
        } else {
            "On-Site Meeting"
        };
        let description = format!(
            "Client: {}\nEmail: {}\nDuration: {}\nType: {}\n{}",
            booking.client_name, booking.client_email, booking.duration, meeting_kind, link_or_location
        );

        CalendarEvent {
            id: generate_event_id(),
            title: format!("Consultation: {}", booking.client_name),
            description,
            start_time: format!("{} at {}", booking.date_display(), booking.time),
            end_time: format!("{} at {}", booking.date_display(), end_time),
            meet_link,
            location,
        }
    }
}
