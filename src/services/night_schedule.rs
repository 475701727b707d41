//! Night-schedule arithmetic.
//!
//! Maghrib and Isha are anchored to the reference date and Fajr to the
//! following day, so the night always spans clock midnight. The span is
//! split on whole seconds: inputs carry minute precision, which makes the
//! halves and sixths exact. Clock values are only truncated to `HH:MM` when
//! formatted.
//!
//! Fajr is placed on the next day unconditionally. If an upstream ever
//! reports a Fajr clock value later than Maghrib's, the night comes out
//! longer than 24 hours rather than being corrected.

use chrono::{Days, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::services::prayer_times::Timings;
use crate::utils::datetime::{format_clock, format_night_duration, parse_clock_time};

pub const MAGHRIB: &str = "Maghrib";
pub const ISHA: &str = "Isha";
pub const FAJR: &str = "Fajr";

/// The timings could not be turned into a schedule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("timing '{0}' is missing")]
    MissingTiming(&'static str),
    #[error("timing '{name}' has unparsable value '{value}'")]
    InvalidTime { name: &'static str, value: String },
    #[error("reference date {0} has no following day")]
    DateOutOfRange(NaiveDate),
}

/// Derived night schedule for one evening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightSchedule {
    pub maghrib: NaiveDateTime,
    pub isha: NaiveDateTime,
    /// Fajr of the following day.
    pub fajr: NaiveDateTime,
    /// Fajr minus Maghrib.
    pub night_duration: Duration,
    /// Midpoint between Maghrib and Fajr.
    pub islamic_midnight: NaiveDateTime,
    /// Suggested wake-up, the Islamic midnight itself.
    pub wake_up: NaiveDateTime,
    /// Start of the last sixth of the night.
    pub sleep: NaiveDateTime,
}

/// [`NightSchedule`] rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSchedule {
    pub maghrib: String,
    pub isha: String,
    pub fajr: String,
    pub night_duration: String,
    pub islamic_midnight: String,
    pub wake_up: String,
    pub sleep: String,
}

impl NightSchedule {
    pub fn formatted(&self) -> FormattedSchedule {
        FormattedSchedule {
            maghrib: format_clock(&self.maghrib),
            isha: format_clock(&self.isha),
            fajr: format_clock(&self.fajr),
            night_duration: format_night_duration(&self.night_duration),
            islamic_midnight: format_clock(&self.islamic_midnight),
            wake_up: format_clock(&self.wake_up),
            sleep: format_clock(&self.sleep),
        }
    }
}

/// Computes the night schedule from Maghrib, Isha and Fajr.
///
/// `reference` is the calendar day of Maghrib and Isha. A missing or
/// unparsable timing is an error; callers show a generic failure message.
pub fn calculate_times(
    timings: &Timings,
    reference: NaiveDate,
) -> Result<NightSchedule, ScheduleError> {
    let maghrib_time = clock_value(timings, MAGHRIB)?;
    let isha_time = clock_value(timings, ISHA)?;
    let fajr_time = clock_value(timings, FAJR)?;

    let next_day = reference
        .checked_add_days(Days::new(1))
        .ok_or(ScheduleError::DateOutOfRange(reference))?;

    let maghrib = reference.and_time(maghrib_time);
    let isha = reference.and_time(isha_time);
    let fajr = next_day.and_time(fajr_time);

    let night_duration = fajr.signed_duration_since(maghrib);
    let night_seconds = night_duration.num_seconds();

    let islamic_midnight = maghrib + Duration::seconds(night_seconds / 2);
    let sleep = fajr - Duration::seconds(night_seconds / 6);

    Ok(NightSchedule {
        maghrib,
        isha,
        fajr,
        night_duration,
        islamic_midnight,
        wake_up: islamic_midnight,
        sleep,
    })
}

fn clock_value(timings: &Timings, name: &'static str) -> Result<NaiveTime, ScheduleError> {
    let raw = timings.get(name).ok_or(ScheduleError::MissingTiming(name))?;
    parse_clock_time(raw).map_err(|_| ScheduleError::InvalidTime {
        name,
        value: raw.to_string(),
    })
}
