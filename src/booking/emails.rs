use crate::booking::event::CalendarEvent;
use crate::booking::BookingRequest;
use crate::config::Config;

const BANNER: &str = "═══════════════════════════════════════════════════";

/// A formatted email-like payload handed to the delivery collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPayload {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

/// Shared meeting-details block used by both payloads
fn meeting_details(booking: &BookingRequest) -> String {
    format!(
        "MEETING DETAILS\n\
         ───────────────\n\
         Date:     {}\n\
         Time:     {}\n\
         Duration: {}\n\
         Type:     {}",
        booking.date_display(),
        booking.time,
        booking.duration,
        booking.meeting_type_display()
    )
}

/// Notification sent to the business owner for every confirmed booking
pub fn business_notification(
    config: &Config,
    booking: &BookingRequest,
    event: &CalendarEvent,
) -> EmailPayload {
    let link_or_location = match &event.meet_link {
        Some(link) => format!("GOOGLE MEET LINK\n─────────────────\n{}", link),
        None => format!(
            "LOCATION\n────────\n{}",
            booking.project_address.as_deref().unwrap_or("")
        ),
    };

    let body = format!(
        "{BANNER}\n\
         \x20          NEW CONSULTATION BOOKING\n\
         {BANNER}\n\
         \n\
         CLIENT INFORMATION\n\
         ──────────────────\n\
         Name:  {}\n\
         Email: {}\n\
         \n\
         {}\n\
         \n\
         {}\n\
         \n\
         {BANNER}\n\
         Calendar Event ID: {}\n\
         {BANNER}",
        booking.client_name,
        booking.client_email,
        meeting_details(booking),
        link_or_location,
        event.id
    );

    EmailPayload {
        to: config.business_email.clone(),
        from: config.from_email.clone(),
        subject: format!("New Consultation Booking: {}", booking.client_name),
        body,
    }
}

/// Confirmation sent to the client, varying by meeting type
pub fn client_confirmation(
    config: &Config,
    booking: &BookingRequest,
    event: &CalendarEvent,
) -> EmailPayload {
    let join_or_location = match &event.meet_link {
        Some(link) => format!(
            "JOIN THE MEETING\n\
             ─────────────────\n\
             Click here to join: {}\n\
             \n\
             You can also copy and paste this link into your browser.",
            link
        ),
        None => format!(
            "MEETING LOCATION\n\
             ────────────────\n\
             {}\n\
             \n\
             We'll meet you at this address at the scheduled time.",
            booking.project_address.as_deref().unwrap_or("")
        ),
    };

    let body = format!(
        "Hi {},\n\
         \n\
         Your consultation with {} has been confirmed!\n\
         \n\
         {}\n\
         \n\
         {}\n\
         \n\
         ───────────────────────────────────────────────────\n\
         \n\
         Need to reschedule? Contact us:\n\
         Email: {}\n\
         Phone: {}\n\
         \n\
         We look forward to discussing your project!\n\
         \n\
         Best regards,\n\
         {} Team",
        booking.client_name,
        config.company_name,
        meeting_details(booking),
        join_or_location,
        config.business_email,
        config.business_phone,
        config.company_name
    );

    EmailPayload {
        to: booking.client_email.clone(),
        from: config.business_email.clone(),
        subject: format!("Your {} Consultation is Confirmed", config.company_name),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::MeetingType;

    fn onsite_booking() -> BookingRequest {
        BookingRequest {
            date: 14,
            month: "January".to_string(),
            year: 2026,
            time: "1:30pm".to_string(),
            duration: "60m".to_string(),
            meeting_type: MeetingType::Onsite,
            project_address: Some("280 Tower Rd, Cocolalla, ID".to_string()),
            client_name: "Sam Reyes".to_string(),
            client_email: "sam@example.com".to_string(),
        }
    }

    #[test]
    fn test_business_notification_addressing() {
        let config = Config::default();
        let booking = onsite_booking();
        let event = CalendarEvent::from_booking(&booking);
        let payload = business_notification(&config, &booking, &event);

        assert_eq!(payload.to, config.business_email);
        assert_eq!(payload.from, config.from_email);
        assert_eq!(payload.subject, "New Consultation Booking: Sam Reyes");
        assert!(payload.body.contains("Calendar Event ID: "));
        assert!(payload.body.contains(&event.id));
        assert!(payload.body.contains("280 Tower Rd, Cocolalla, ID"));
        assert!(payload.body.contains("Date:     January 14, 2026"));
    }

    #[test]
    fn test_client_confirmation_virtual_has_join_block() {
        let config = Config::default();
        let booking = BookingRequest {
            meeting_type: MeetingType::Virtual,
            project_address: None,
            ..onsite_booking()
        };
        let event = CalendarEvent::from_booking(&booking);
        let payload = client_confirmation(&config, &booking, &event);

        assert_eq!(payload.to, "sam@example.com");
        assert_eq!(payload.from, config.business_email);
        assert!(payload.body.starts_with("Hi Sam Reyes,"));
        assert!(payload.body.contains("JOIN THE MEETING"));
        assert!(payload
            .body
            .contains(event.meet_link.as_deref().unwrap()));
        assert!(!payload.body.contains("MEETING LOCATION"));
    }

    #[test]
    fn test_client_confirmation_onsite_has_address_block() {
        let config = Config::default();
        let booking = onsite_booking();
        let event = CalendarEvent::from_booking(&booking);
        let payload = client_confirmation(&config, &booking, &event);

        assert!(payload.body.contains("MEETING LOCATION"));
        assert!(payload.body.contains("280 Tower Rd, Cocolalla, ID"));
        assert!(payload.body.contains(&config.business_phone));
        assert!(!payload.body.contains("JOIN THE MEETING"));
    }
}
