use crate::booking::emails::{business_notification, client_confirmation};
use crate::booking::event::CalendarEvent;
use crate::booking::{Appointment, BookingRequest, BookingResponse};
use crate::components::Notifier;
use crate::config::Config;
use crate::error::{BookingResult, Error};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Delivery collaborator for notification payloads
    pub notifier: Arc<dyn Notifier>,
}

/// Handler for the liveness probe
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Handler for booking submissions
pub async fn booking_handler(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Response {
    // A body that does not deserialize is an internal failure at this
    // boundary, surfaced as the generic error without leaking detail
    let booking = match payload {
        Ok(Json(booking)) => booking,
        Err(rejection) => {
            error!("Booking error: {}", rejection);
            return internal_error();
        }
    };

    match process_booking(&state.config, state.notifier.as_ref(), booking).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(Error::Validation(message)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        }
        Err(e) => {
            error!("Booking error: {:?}", e);
            internal_error()
        }
    }
}

/// Generic 500 response that leaks no internal detail
fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to process booking" })),
    )
        .into_response()
}

/// Validate a booking, synthesize its calendar event, and emit both
/// notification payloads through the notifier
pub async fn process_booking(
    config: &Config,
    notifier: &dyn Notifier,
    booking: BookingRequest,
) -> BookingResult<BookingResponse> {
    booking.validate()?;

    let event = CalendarEvent::from_booking(&booking);
    info!(
        "Created calendar event {} for {}",
        event.id, booking.client_name
    );

    notifier
        .send(&business_notification(config, &booking, &event))
        .await?;
    notifier
        .send(&client_confirmation(config, &booking, &event))
        .await?;

    let message = booking.confirmation_message().to_string();
    Ok(BookingResponse {
        success: true,
        appointment: Appointment {
            meet_link: event.meet_link.clone(),
            calendar_event_id: event.id,
            booking,
        },
        message,
    })
}
