use crate::error::{validation_error, BookingResult};
use serde::{Deserialize, Serialize};

pub mod emails;
pub mod event;
pub mod widget;

/// Whether a consultation happens over video or at the project site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingType {
    Virtual,
    Onsite,
}

/// A consultation booking submission.
///
/// Field names follow the JSON wire format of the booking form. Absent
/// fields deserialize to zero/empty so validation can report them with the
/// proper message instead of rejecting the body outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Day of month; 0 when the field was absent
    #[serde(default)]
    pub date: u32,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: i32,
    /// Start time like "10:00am"
    #[serde(default)]
    pub time: String,
    /// Duration like "30m"
    #[serde(default)]
    pub duration: String,
    pub meeting_type: MeetingType,
    /// Required for on-site meetings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_address: Option<String>,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_email: String,
}

impl BookingRequest {
    pub fn is_virtual(&self) -> bool {
        self.meeting_type == MeetingType::Virtual
    }

    pub fn is_onsite(&self) -> bool {
        self.meeting_type == MeetingType::Onsite
    }

    /// Display string for the booking date, e.g. "December 3, 2025"
    pub fn date_display(&self) -> String {
        format!("{} {}, {}", self.month, self.date, self.year)
    }

    /// Meeting-type label used in notification payloads
    pub fn meeting_type_display(&self) -> &'static str {
        match self.meeting_type {
            MeetingType::Virtual => "Virtual (Google Meet)",
            MeetingType::Onsite => "On-Site Meeting",
        }
    }

    /// Confirmation message returned to the client on success
    pub fn confirmation_message(&self) -> &'static str {
        match self.meeting_type {
            MeetingType::Virtual => {
                "Your consultation is confirmed! A Google Meet link has been created and emailed to you."
            }
            MeetingType::Onsite => {
                "Your on-site consultation is confirmed! Details have been emailed to you."
            }
        }
    }

    /// Validate the submission; the first failed rule wins
    pub fn validate(&self) -> BookingResult<()> {
        if self.date == 0 || self.month.is_empty() || self.time.is_empty() || self.duration.is_empty()
        {
            return Err(validation_error("Missing required booking information"));
        }

        if self.client_name.trim().is_empty() {
            return Err(validation_error("Client name is required"));
        }

        if self.client_email.trim().is_empty() || !self.client_email.contains('@') {
            return Err(validation_error("Valid client email is required"));
        }

        let address = self.project_address.as_deref().unwrap_or("");
        if self.is_onsite() && address.trim().is_empty() {
            return Err(validation_error(
                "Project address is required for on-site meetings",
            ));
        }

        Ok(())
    }
}

/// Echo of the booking plus the synthesized calendar details
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(flatten)]
    pub booking: BookingRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meet_link: Option<String>,
    pub calendar_event_id: String,
}

/// Successful booking response body
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub appointment: Appointment,
    pub message: String,
}
