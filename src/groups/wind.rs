//! Surface wind, `dddff(f)Gfmfm(fm)KT` with an optional `dndndnVdxdxdx` group after it.
use super::Matched;
use crate::{
    error::{DecodeError, Result},
    report::{Wind, WindDirection},
    units::{Angle, AngleUnit, Speed, SpeedUnit},
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WIND: Regex =
        Regex::new(r"^(\d{3}|VRB)(\d{2,3})(?:G(\d{2,3}))?(KT|KMH|MPS)$").unwrap();
    static ref VARIABLE_RANGE: Regex = Regex::new(r"^(\d{3})V(\d{3})$").unwrap();
}

/// Light and variable wind may not be faster than this, in knots.
const LIGHT_AND_VARIABLE_MAX_KNOTS: f64 = 6.0;

/// Decode a wind group, consuming the variable direction group after it if there is one.
pub fn parse(groups: &[&str], cursor: usize) -> Result<Matched<Wind>> {
    let group = match groups.get(cursor) {
        Some(group) => *group,
        None => return Ok(None),
    };

    let caps = match WIND.captures(group) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let range_caps = groups
        .get(cursor + 1)
        .and_then(|next| VARIABLE_RANGE.captures(next));

    let (raw, next) = if range_caps.is_some() {
        (groups[cursor..cursor + 2].join(" "), cursor + 2)
    } else {
        (group.to_owned(), cursor + 1)
    };
    let invalid = || DecodeError::InvalidWind(raw.clone());

    let unit = &caps[4];
    let speed = Speed::parse(&caps[2], unit).map_err(|_| invalid())?;
    let gust = caps
        .get(3)
        .map(|gust| Speed::parse(gust.as_str(), unit))
        .transpose()
        .map_err(|_| invalid())?;

    let direction = match &caps[1] {
        "VRB" => WindDirection::Variable,
        dir => WindDirection::From(parse_angle(dir).ok_or_else(invalid)?),
    };

    let variable_range = match range_caps {
        Some(rng) => {
            let first = parse_angle(&rng[1]).ok_or_else(invalid)?;
            let second = parse_angle(&rng[2]).ok_or_else(invalid)?;

            if first <= second {
                Some((first, second))
            } else {
                Some((second, first))
            }
        }
        None => None,
    };

    if direction == WindDirection::Variable {
        // VRB is for light winds, a strong variable wind has a direction and a range.
        if variable_range.is_some()
            || speed.in_unit(SpeedUnit::Knots) > LIGHT_AND_VARIABLE_MAX_KNOTS
        {
            return Err(invalid());
        }
    }

    let wind = Wind {
        speed,
        direction,
        gust,
        variable_range,
    };

    Ok(Some((wind, next)))
}

fn parse_angle(digits: &str) -> Option<Angle> {
    let angle = Angle::parse(digits, "deg").ok()?;

    if angle <= Angle::new(360.0, AngleUnit::Degrees) {
        Some(angle)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn kts(val: f64) -> Speed {
        Speed::new(val, SpeedUnit::Knots)
    }

    fn deg(val: f64) -> Angle {
        Angle::new(val, AngleUnit::Degrees)
    }

    fn decode_one(group: &str) -> Wind {
        let (wind, next) = parse(&[group], 0).unwrap().unwrap();
        assert_eq!(next, 1);
        wind
    }

    #[test]
    fn test_calm() {
        let wind = decode_one("00000KT");
        assert!(wind.is_calm());
        assert_eq!(wind.speed(), kts(0.0));
        assert_eq!(wind.direction(), WindDirection::From(deg(0.0)));
        assert!(wind.gust().is_none());
        assert!(wind.variable_range().is_none());
    }

    #[test]
    fn test_gusts() {
        let wind = decode_one("27020G35KT");
        assert_eq!(wind.direction(), WindDirection::From(deg(270.0)));
        assert_eq!(wind.speed(), kts(20.0));
        assert_eq!(wind.gust(), Some(kts(35.0)));

        let wind = decode_one("270120G135KT");
        assert_eq!(wind.speed(), kts(120.0));
        assert_eq!(wind.gust(), Some(kts(135.0)));
    }

    #[test]
    fn test_units() {
        let wind = decode_one("09010MPS");
        assert_eq!(wind.speed().unit(), SpeedUnit::MetersPerSecond);
        assert_eq!(wind.speed().magnitude(), 10.0);

        let wind = decode_one("09018G30KMH");
        assert_eq!(wind.speed().unit(), SpeedUnit::KilometersPerHour);
        assert_eq!(wind.gust().unwrap().unit(), SpeedUnit::KilometersPerHour);
    }

    #[test]
    fn test_light_and_variable() {
        let wind = decode_one("VRB03KT");
        assert_eq!(wind.direction(), WindDirection::Variable);
        assert_eq!(wind.speed(), kts(3.0));
        assert!(wind.variable_range().is_none());

        assert_eq!(
            parse(&["VRB07KT"], 0),
            Err(DecodeError::InvalidWind("VRB07KT".to_owned()))
        );

        // 3 m/s is just under 6 knots, 4 m/s is over.
        assert!(parse(&["VRB03MPS"], 0).is_ok());
        assert!(parse(&["VRB04MPS"], 0).is_err());
    }

    #[test]
    fn test_strong_and_variable() {
        let (wind, next) = parse(&["21010KT", "100V240", "10SM"], 0).unwrap().unwrap();
        assert_eq!(next, 2);
        assert_eq!(wind.direction(), WindDirection::From(deg(210.0)));
        assert_eq!(wind.speed(), kts(10.0));
        assert_eq!(wind.variable_range(), Some((deg(100.0), deg(240.0))));

        // Always ascending.
        let (wind, _) = parse(&["21010KT", "240V100"], 0).unwrap().unwrap();
        assert_eq!(wind.variable_range(), Some((deg(100.0), deg(240.0))));

        assert_eq!(
            parse(&["VRB03KT", "100V240"], 0),
            Err(DecodeError::InvalidWind("VRB03KT 100V240".to_owned()))
        );
    }

    #[test]
    fn test_bad_directions() {
        assert!(parse(&["36010KT"], 0).is_ok());
        assert!(parse(&["37010KT"], 0).is_err());
        assert!(parse(&["21010KT", "100V370"], 0).is_err());
    }

    #[test]
    fn test_not_wind() {
        assert_eq!(parse(&["10SM"], 0), Ok(None));
        assert_eq!(parse(&["2101KT"], 0), Ok(None));
        assert_eq!(parse(&["21010"], 0), Ok(None));
        assert_eq!(parse(&["21010MPH"], 0), Ok(None));
        assert_eq!(parse(&[], 0), Ok(None));
    }
}
