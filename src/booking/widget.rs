use crate::booking::{BookingRequest, MeetingType};
use crate::config::Config;
use crate::error::{validation_error, BookingResult, Error};
use crate::utils::time::{month_number, to_24_hour_display};
use url::Url;

/// Build the third-party scheduling-widget URL the booking page opens in a
/// new browser tab, carrying the submission as query parameters. The service
/// itself never calls this URL; actual booking is delegated to the widget.
pub fn scheduling_url(config: &Config, booking: &BookingRequest) -> BookingResult<Url> {
    let mut url = Url::parse(&config.scheduler_url)
        .map_err(|e| Error::Config(format!("Invalid scheduler URL: {}", e)))?;

    let month = month_number(&booking.month)
        .ok_or_else(|| validation_error("Unknown month name"))?;
    let date = format!("{:04}-{:02}-{:02}", booking.year, month, booking.date);
    let time = to_24_hour_display(&booking.time)
        .ok_or_else(|| validation_error("Invalid booking time"))?;
    let duration = if booking.duration == "30m" { "30" } else { "60" };
    let type_label = match booking.meeting_type {
        MeetingType::Virtual => "Virtual Meeting",
        MeetingType::Onsite => "On-Site Meeting",
    };

    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("name", booking.client_name.trim());
        pairs.append_pair("email", booking.client_email.trim());
        pairs.append_pair("date", &date);
        pairs.append_pair("time", &time);
        pairs.append_pair("duration", duration);
        pairs.append_pair("type", type_label);
        if booking.meeting_type == MeetingType::Onsite {
            if let Some(address) = booking.project_address.as_deref() {
                if !address.trim().is_empty() {
                    pairs.append_pair("location", address.trim());
                }
            }
        }
    }

    Ok(url)
}
