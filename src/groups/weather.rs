//! Present weather, `w'w'`, e.g. `-SHRA`, `+FC`, `VCTS`, or `BR`.
use super::Matched;
use crate::{
    error::{DecodeError, Result},
    report::{Descriptor, Intensity, Phenomenon, PresentWeather},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    // Any run of known two letter codes, in any order. Ordering rules are checked after matching.
    static ref LOOKS_LIKE: Regex = Regex::new(
        r"^([-+]|VC)?((?:MI|PR|BC|DR|BL|SH|TS|FZ|DZ|RA|SN|SG|IC|PE|GR|GS|UP|BR|FG|FU|VA|DU|SA|HZ|PY|PO|SQ|FC|SS|DS)+)$"
    )
    .unwrap();
}

/// Decode one present weather group.
///
/// A group has at most one descriptor, which must come first, and its phenomena must all be from
/// the same sub-alphabet: precipitation, obscuration, or other.
pub fn parse(groups: &[&str], cursor: usize) -> Result<Matched<PresentWeather>> {
    let group = match groups.get(cursor) {
        Some(group) => *group,
        None => return Ok(None),
    };

    let caps = match LOOKS_LIKE.captures(group) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let invalid = || DecodeError::InvalidPresentWeather(group.to_owned());

    let intensity = match caps.get(1).map(|m| m.as_str()) {
        Some("-") => Intensity::Light,
        Some("+") => Intensity::Heavy,
        Some("VC") => Intensity::Vicinity,
        _ => Intensity::Moderate,
    };

    // The pattern only matched ASCII letter pairs, so these slices are on char boundaries.
    let letters = &caps[2];
    let mut codes = (0..letters.len())
        .step_by(2)
        .map(|i| &letters[i..i + 2])
        .peekable();

    let descriptor = codes
        .peek()
        .and_then(|code| Descriptor::from_str(code).ok());
    if descriptor.is_some() {
        codes.next();
    }

    let phenomena = codes
        .map(|code| Phenomenon::from_str(code).map_err(|_| invalid()))
        .collect::<Result<Vec<Phenomenon>>>()?;

    if let Some(first) = phenomena.first() {
        if phenomena.iter().any(|p| p.class() != first.class()) {
            return Err(invalid());
        }
    }

    let wx = PresentWeather {
        intensity,
        descriptor,
        phenomena,
    };

    Ok(Some((wx, cursor + 1)))
}
