use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Parses a 24-hour `HH:MM` clock value as returned by the prayer-times API.
///
/// Surrounding whitespace is ignored; anything else after the minutes
/// (seconds, a timezone suffix) is rejected.
pub fn parse_clock_time(input: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
}

/// Formats an instant as a zero-padded `HH:MM`, dropping date and seconds.
pub fn format_clock(dt: &NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

/// Formats an elapsed duration as `H:MM:SS`.
///
/// Hours are not padded and are not folded into days, so a 25 hour span
/// renders as `25:00:00`. Sub-second parts are truncated.
pub fn format_night_duration(duration: &Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();

    format!(
        "{sign}{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
