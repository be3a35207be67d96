//! Resolve the day/hour/minute of a report into an absolute time.
//!
//! A report only carries the day of the month and the time of day. The year and month are taken
//! from a reference instant, usually the time of decoding, assuming the observation happened
//! within the last month.
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

/// Find the most recent instant at or before `now` with the given day of month, hour, and minute.
///
/// If the day/hour/minute is later than `now`'s, the observation must have been made during the
/// previous month, rolling from January back to December of the prior year. The result is always
/// at or before `now` and less than 31 days before it.
///
/// Returns `None` if the day does not exist in the resolved month (e.g. the 31st resolving into
/// a 30 day month) or if the hour or minute is out of range.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use metar_decoder::resolve_observation_time;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
///
/// let same_month = resolve_observation_time(4, 15, 17, now).unwrap();
/// assert_eq!(same_month, Utc.with_ymd_and_hms(2024, 3, 4, 15, 17, 0).unwrap());
///
/// let last_month = resolve_observation_time(24, 15, 17, now).unwrap();
/// assert_eq!(last_month, Utc.with_ymd_and_hms(2024, 2, 24, 15, 17, 0).unwrap());
///
/// // There is no February 30th.
/// assert!(resolve_observation_time(30, 0, 0, now).is_none());
/// ```
pub fn resolve_observation_time(
    day: u32,
    hour: u32,
    minute: u32,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let (mut year, mut month) = (now.year(), now.month());

    if (day, hour, minute) > (now.day(), now.hour(), now.minute()) {
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;

    Some(Utc.from_utc_datetime(&naive))
}
