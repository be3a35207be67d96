//! The groups identifying a report: type, station, date/time, and modifier.
use super::Matched;
use crate::{
    error::{DecodeError, Result},
    report::Modifier,
    time::resolve_observation_time,
};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    static ref STATION: Regex = Regex::new(r"^[A-Za-z0-9]{4}$").unwrap();
    static ref DATE_TIME: Regex = Regex::new(r"^(\d{2})(\d{2})(\d{2})Z$").unwrap();
}

/// Report type, `METAR` or `SPECI`. The value is `true` for a special report.
///
/// The type may be left out, in which case the report is routine and nothing is consumed. A first
/// group that is neither a type nor shaped like a station identifier is an error.
pub fn report_type(groups: &[&str], cursor: usize) -> Result<Matched<bool>> {
    match groups.get(cursor) {
        Some(&"METAR") => Ok(Some((false, cursor + 1))),
        Some(&"SPECI") => Ok(Some((true, cursor + 1))),
        Some(group) if !STATION.is_match(group) => {
            Err(DecodeError::InvalidReportType((*group).to_owned()))
        }
        _ => Ok(Some((false, cursor))),
    }
}

/// Four character station identifier.
pub fn station(groups: &[&str], cursor: usize) -> Result<Matched<String>> {
    Ok(groups
        .get(cursor)
        .filter(|group| STATION.is_match(group))
        .map(|group| ((*group).to_owned(), cursor + 1)))
}

/// Day of month, hour, and minute followed by `Z`, resolved against `now`.
pub fn date_time(
    groups: &[&str],
    cursor: usize,
    now: DateTime<Utc>,
) -> Result<Matched<DateTime<Utc>>> {
    let group = match groups.get(cursor) {
        Some(group) => *group,
        None => return Ok(None),
    };

    let caps = match DATE_TIME.captures(group) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let invalid = || DecodeError::InvalidDateTime(group.to_owned());

    let day = u32::from_str(&caps[1]).map_err(|_| invalid())?;
    let hour = u32::from_str(&caps[2]).map_err(|_| invalid())?;
    let minute = u32::from_str(&caps[3]).map_err(|_| invalid())?;

    resolve_observation_time(day, hour, minute, now)
        .map(|time| Some((time, cursor + 1)))
        .ok_or_else(invalid)
}

/// `AUTO` or `COR`.
pub fn modifier(groups: &[&str], cursor: usize) -> Result<Matched<Modifier>> {
    Ok(groups
        .get(cursor)
        .and_then(|group| Modifier::from_str(group).ok())
        .map(|modifier| (modifier, cursor + 1)))
}
