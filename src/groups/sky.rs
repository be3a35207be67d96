//! Sky condition, `NsNsNshshshs`, `VVhshshs`, or `SKC`/`CLR`.
use super::Matched;
use crate::{
    error::{DecodeError, Result},
    report::{ClearSky, CloudType, Cover, SkyLayer},
    units::{Height, HeightUnit},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    static ref LOOKS_LIKE: Regex = Regex::new(r"^(?:VV|FEW|SCT|BKN|OVC)").unwrap();
    static ref LAYER: Regex =
        Regex::new(r"^(VV|FEW|SCT|BKN|OVC)(\d{3}|///)(CB|TCU)?$").unwrap();
}

/// Decode one sky condition group. Heights are coded in hundreds of feet; `///` means the height
/// is unknown.
pub fn parse(groups: &[&str], cursor: usize) -> Result<Matched<SkyLayer>> {
    let group = match groups.get(cursor) {
        Some(group) => *group,
        None => return Ok(None),
    };

    if let Ok(clear) = ClearSky::from_str(group) {
        return Ok(Some((SkyLayer::Clear(clear), cursor + 1)));
    }

    if !LOOKS_LIKE.is_match(group) {
        return Ok(None);
    }

    let invalid = || DecodeError::InvalidSkyCondition(group.to_owned());
    let caps = LAYER.captures(group).ok_or_else(invalid)?;

    let cover = Cover::from_str(&caps[1]).map_err(|_| invalid())?;
    let height = match &caps[2] {
        "///" => None,
        digits => {
            let hundreds = f64::from_str(digits).map_err(|_| invalid())?;
            Some(Height::new(hundreds * 100.0, HeightUnit::Feet))
        }
    };
    let cloud_type = caps
        .get(3)
        .map(|ct| CloudType::from_str(ct.as_str()))
        .transpose()
        .map_err(|_| invalid())?;

    let layer = SkyLayer::Layer {
        cover,
        height,
        cloud_type,
    };

    Ok(Some((layer, cursor + 1)))
}
