const MINUTES_PER_DAY: u32 = 24 * 60;

/// Meridiem half of a 12-hour clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// Parse a 12-hour clock time like "9:00am" or "12:30PM"
pub fn parse_clock_time(time_str: &str) -> Option<(u32, u32, Meridiem)> {
    let lower = time_str.trim().to_ascii_lowercase();
    let (clock, meridiem) = if let Some(rest) = lower.strip_suffix("am") {
        (rest, Meridiem::Am)
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest, Meridiem::Pm)
    } else {
        return None;
    };

    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }
    Some((hour, minute, meridiem))
}

/// Parse a duration string like "30m" into whole minutes
pub fn parse_duration_minutes(duration: &str) -> Option<u32> {
    duration.trim().trim_end_matches('m').parse::<u32>().ok()
}

/// Convert a 12-hour clock reading to minutes since midnight
fn to_minute_of_day(hour: u32, minute: u32, meridiem: Meridiem) -> u32 {
    let hour24 = match meridiem {
        Meridiem::Pm if hour != 12 => hour + 12,
        Meridiem::Am if hour == 12 => 0,
        _ => hour,
    };
    hour24 * 60 + minute
}

/// Format minutes since midnight back to 12-hour display, e.g. "1:05pm"
fn format_clock_time(minute_of_day: u32) -> String {
    let hour = (minute_of_day / 60) % 24;
    let minute = minute_of_day % 60;
    let suffix = if hour >= 12 { "pm" } else { "am" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:{:02}{}", display_hour, minute, suffix)
}

/// Compute the display end time for a booking from its start time and duration.
///
/// The sum wraps modulo 24 hours: an end time past midnight keeps the same
/// calendar date label as the start. If either input fails to parse, the
/// start string is returned unchanged.
pub fn calculate_end_time(start_time: &str, duration: &str) -> String {
    let Some((hour, minute, meridiem)) = parse_clock_time(start_time) else {
        return start_time.to_string();
    };
    let Some(duration_minutes) = parse_duration_minutes(duration) else {
        return start_time.to_string();
    };

    let total = (to_minute_of_day(hour, minute, meridiem) + duration_minutes) % MINUTES_PER_DAY;
    format_clock_time(total)
}

/// Convert a 12-hour clock string to zero-padded 24-hour "HH:MM"
pub fn to_24_hour_display(time_str: &str) -> Option<String> {
    let (hour, minute, meridiem) = parse_clock_time(time_str)?;
    let minute_of_day = to_minute_of_day(hour, minute, meridiem);
    Some(format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60))
}

/// Map an English month name to its 1-based number
pub fn month_number(name: &str) -> Option<u32> {
    match name.trim().to_ascii_lowercase().as_str() {
        "january" => Some(1),
        "february" => Some(2),
        "march" => Some(3),
        "april" => Some(4),
        "may" => Some(5),
        "june" => Some(6),
        "july" => Some(7),
        "august" => Some(8),
        "september" => Some(9),
        "october" => Some(10),
        "november" => Some(11),
        "december" => Some(12),
        _ => None,
    }
}
