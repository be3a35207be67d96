//! Altimeter setting, `APHPHPHPH` in hundredths of an inch of mercury.
use super::Matched;
use crate::{
    error::{DecodeError, Result},
    units::{Pressure, PressureUnit},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    static ref LOOKS_LIKE: Regex = Regex::new(r"^A\d+$").unwrap();
    static ref ALTIMETER: Regex = Regex::new(r"^A(\d{4})$").unwrap();
}

/// Decode the altimeter setting.
pub fn parse(groups: &[&str], cursor: usize) -> Result<Matched<Pressure>> {
    let group = match groups.get(cursor) {
        Some(group) if LOOKS_LIKE.is_match(group) => *group,
        _ => return Ok(None),
    };

    let invalid = || DecodeError::InvalidAltimeter(group.to_owned());
    let caps = ALTIMETER.captures(group).ok_or_else(invalid)?;
    let hundredths = f64::from_str(&caps[1]).map_err(|_| invalid())?;

    let alstg = Pressure::new(hundredths / 100.0, PressureUnit::InchesOfMercury);

    Ok(Some((alstg, cursor + 1)))
}
