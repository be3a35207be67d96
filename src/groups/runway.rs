//! Runway visual range, `RDRDR/VRVRVRVRFT` or `RDRDR/VNVNVNVNVVXVXVXVXFT`.
use super::Matched;
use crate::{
    error::{DecodeError, Result},
    report::{RunwayVisualRange, VisualRange},
    units::Height,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LOOKS_LIKE: Regex = Regex::new(r"^R\d{2}[LCR]?/\S*FT$").unwrap();
    static ref RVR: Regex =
        Regex::new(r"^R(\d{2}[LCR]?)/([PM]?)(\d+)(?:V([PM]?)(\d+))?FT$").unwrap();
}

/// Decode one runway visual range group.
pub fn parse(groups: &[&str], cursor: usize) -> Result<Matched<RunwayVisualRange>> {
    let group = match groups.get(cursor) {
        Some(group) if LOOKS_LIKE.is_match(group) => *group,
        _ => return Ok(None),
    };

    let invalid = || DecodeError::InvalidRunwayVisualRange(group.to_owned());
    let caps = RVR.captures(group).ok_or_else(invalid)?;

    let first = feet(&caps[3], &caps[2]).ok_or_else(invalid)?;
    let range = match (caps.get(4), caps.get(5)) {
        (Some(marker), Some(digits)) => VisualRange::Variable {
            low: first,
            high: feet(digits.as_str(), marker.as_str()).ok_or_else(invalid)?,
        },
        _ => VisualRange::Single(first),
    };

    let rvr = RunwayVisualRange {
        runway: caps[1].to_owned(),
        range,
    };

    Ok(Some((rvr, cursor + 1)))
}

fn feet(digits: &str, marker: &str) -> Option<Height> {
    Height::parse(digits, "FT")
        .and_then(|dist| dist.with_polarity_marker(marker))
        .ok()
}
