//! Temperature and dew point, `T'T'/T'dT'd`. A leading `M` means below zero.
use super::Matched;
use crate::{
    error::{DecodeError, Result},
    units::{Temperature, TemperatureUnit},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    static ref LOOKS_LIKE: Regex = Regex::new(r"^M?\d{2}/").unwrap();
    static ref TEMPERATURE: Regex = Regex::new(r"^(M?)(\d{2})/(?:(M?)(\d{2}))?$").unwrap();
}

/// Decode the temperature and, if it was reported, the dew point.
pub fn parse(
    groups: &[&str],
    cursor: usize,
) -> Result<Matched<(Temperature, Option<Temperature>)>> {
    let group = match groups.get(cursor) {
        Some(group) if LOOKS_LIKE.is_match(group) => *group,
        _ => return Ok(None),
    };

    let invalid = || DecodeError::InvalidTemperature(group.to_owned());
    let caps = TEMPERATURE.captures(group).ok_or_else(invalid)?;

    let temperature = celsius(&caps[1], &caps[2]).ok_or_else(invalid)?;
    let dew_point = match (caps.get(3), caps.get(4)) {
        (Some(sign), Some(digits)) => {
            Some(celsius(sign.as_str(), digits.as_str()).ok_or_else(invalid)?)
        }
        _ => None,
    };

    Ok(Some(((temperature, dew_point), cursor + 1)))
}

fn celsius(sign: &str, digits: &str) -> Option<Temperature> {
    let val = f64::from_str(digits).ok()?;
    let val = if sign == "M" { -val } else { val };

    Some(Temperature::new(val, TemperatureUnit::Celsius))
}
