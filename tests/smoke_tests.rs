use antova_booking::booking::emails::EmailPayload;
use antova_booking::booking::{BookingRequest, MeetingType};
use antova_booking::components::Notifier;
use antova_booking::config::Config;
use antova_booking::error::BookingResult;
use antova_booking::handlers::process_booking;
use async_trait::async_trait;
use std::sync::Mutex;

/// Capturing notifier for testing without a real delivery backend
#[derive(Default)]
struct CapturingNotifier {
    sent: Mutex<Vec<EmailPayload>>,
}

#[async_trait]
impl Notifier for CapturingNotifier {
    fn name(&self) -> &'static str {
        "capturing"
    }

    async fn send(&self, payload: &EmailPayload) -> BookingResult<()> {
        self.sent.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

fn virtual_booking() -> BookingRequest {
    BookingRequest {
        date: 3,
        month: "December".to_string(),
        year: 2025,
        time: "10:00am".to_string(),
        duration: "30m".to_string(),
        meeting_type: MeetingType::Virtual,
        project_address: None,
        client_name: "Jordan Hale".to_string(),
        client_email: "jordan@example.com".to_string(),
    }
}

/// Smoke test to verify that the default config is usable
#[tokio::test]
async fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.port, 3000);
    assert!(config.business_email.contains('@'));
    assert!(config.scheduler_url.starts_with("https://"));
}

#[tokio::test]
async fn test_booking_pipeline_sends_both_emails() {
    let config = Config::default();
    let notifier = CapturingNotifier::default();

    let response = process_booking(&config, &notifier, virtual_booking())
        .await
        .unwrap();

    assert!(response.success);
    assert!(response
        .appointment
        .meet_link
        .as_deref()
        .unwrap()
        .starts_with("https://meet.google.com/"));
    assert_eq!(
        response.message,
        "Your consultation is confirmed! A Google Meet link has been created and emailed to you."
    );

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, config.business_email);
    assert_eq!(sent[0].subject, "New Consultation Booking: Jordan Hale");
    assert_eq!(sent[1].to, "jordan@example.com");
    assert!(sent[1].subject.contains("Consultation is Confirmed"));
}

#[tokio::test]
async fn test_onsite_booking_echoes_address() {
    let config = Config::default();
    let notifier = CapturingNotifier::default();

    let mut booking = virtual_booking();
    booking.meeting_type = MeetingType::Onsite;
    booking.project_address = Some("280 Tower Rd, Cocolalla, ID".to_string());

    let response = process_booking(&config, &notifier, booking).await.unwrap();

    assert!(response.appointment.meet_link.is_none());
    assert_eq!(
        response.appointment.booking.project_address.as_deref(),
        Some("280 Tower Rd, Cocolalla, ID")
    );
    assert_eq!(
        response.message,
        "Your on-site consultation is confirmed! Details have been emailed to you."
    );

    // Both payloads carry the address verbatim
    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].body.contains("280 Tower Rd, Cocolalla, ID"));
    assert!(sent[1].body.contains("280 Tower Rd, Cocolalla, ID"));
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let config = Config::default();
    let notifier = CapturingNotifier::default();

    let mut booking = virtual_booking();
    booking.client_email = "no-at-sign".to_string();

    let error = process_booking(&config, &notifier, booking)
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Valid client email is required");
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_successive_bookings_get_distinct_event_ids() {
    let config = Config::default();
    let notifier = CapturingNotifier::default();

    let first = process_booking(&config, &notifier, virtual_booking())
        .await
        .unwrap();
    let second = process_booking(&config, &notifier, virtual_booking())
        .await
        .unwrap();

    assert!(first.appointment.calendar_event_id.starts_with("evt_"));
    assert_ne!(
        first.appointment.calendar_event_id,
        second.appointment.calendar_event_id
    );
}
