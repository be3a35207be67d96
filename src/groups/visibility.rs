//! Prevailing visibility in statute miles, e.g. `10SM`, `1/2SM`, `M1/4SM`, or `1 3/4SM`.
use super::Matched;
use crate::{
    error::{DecodeError, Result},
    units::{Polarity, Visibility, VisibilityUnit},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    static ref WHOLE_MILES: Regex = Regex::new(r"^\d+$").unwrap();
    static ref FRACTION: Regex = Regex::new(r"^M?\d+/\d+SM$").unwrap();
    static ref LOOKS_LIKE: Regex = Regex::new(r"^M?[\d/]+SM$").unwrap();
    static ref VISIBILITY: Regex = Regex::new(r"^(M?)(\d+)(?:/(\d+))?SM$").unwrap();
}

/// Decode visibility. A whole number of miles followed by a fraction is one group and consumes
/// both.
pub fn parse(groups: &[&str], cursor: usize) -> Result<Matched<Visibility>> {
    let group = match groups.get(cursor) {
        Some(group) => *group,
        None => return Ok(None),
    };

    match groups.get(cursor + 1) {
        Some(fraction) if WHOLE_MILES.is_match(group) && FRACTION.is_match(fraction) => {
            let raw = format!("{} {}", group, fraction);
            let invalid = || DecodeError::InvalidVisibility(raw.clone());

            // A whole number can't be combined with a less than marker.
            let (polarity, miles) = decode_single(fraction).ok_or_else(invalid)?;
            if polarity != Polarity::None {
                return Err(invalid());
            }
            let whole = f64::from_str(group).map_err(|_| invalid())?;

            let vis = Visibility::new(whole + miles, VisibilityUnit::StatuteMiles);
            Ok(Some((vis, cursor + 2)))
        }
        _ if LOOKS_LIKE.is_match(group) => {
            let (polarity, miles) = decode_single(group)
                .ok_or_else(|| DecodeError::InvalidVisibility(group.to_owned()))?;

            let vis = Visibility::new(miles, VisibilityUnit::StatuteMiles).with_polarity(polarity);
            Ok(Some((vis, cursor + 1)))
        }
        _ => Ok(None),
    }
}

fn decode_single(group: &str) -> Option<(Polarity, f64)> {
    let caps = VISIBILITY.captures(group)?;

    let polarity = Polarity::from_str(&caps[1]).ok()?;
    let numerator = f64::from_str(&caps[2]).ok()?;
    let miles = match caps.get(3) {
        Some(denominator) => {
            let denominator = f64::from_str(denominator.as_str()).ok()?;
            if denominator == 0.0 {
                return None;
            }
            numerator / denominator
        }
        None => numerator,
    };

    Some((polarity, miles))
}
